//! Modelo de Vehicle
//! 
//! Este módulo contiene la ficha del vehículo de la flota y la vista reducida
//! (`VehicleRecord`) que consume el cálculo de liquidación.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado del vehículo - mapea al ENUM vehicle_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
    Decommissioned,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Rented => "rented",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Decommissioned => "decommissioned",
        };
        f.write_str(label)
    }
}

/// Vehicle principal de la flota
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub fuel_type: String,
    pub status: VehicleStatus,
    /// Odómetro actual en km
    pub mileage: i64,
    /// Nivel de combustible en porcentaje (0-100)
    pub fuel_level: i32,
    /// Capacidad del depósito en litros
    pub tank_capacity: Decimal,
    pub daily_rate: Decimal,
}

impl Vehicle {
    /// Vista del vehículo para el cálculo de liquidación
    pub fn record(&self) -> VehicleRecord {
        VehicleRecord {
            tank_capacity_liters: self.tank_capacity,
            current_mileage: self.mileage,
        }
    }
}

/// Datos del vehículo que intervienen en la liquidación (solo lectura)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub tank_capacity_liters: Decimal,
    pub current_mileage: i64,
}
