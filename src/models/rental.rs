//! Modelo de Rental
//! 
//! Este módulo contiene el alquiler tal como lo guarda el repositorio en memoria
//! y el `RentalAgreement`, la parte del contrato que usa la liquidación.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado del alquiler - mapea al ENUM rental_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Pending,
    Active,
    Completed,
    Late,
}

impl RentalStatus {
    /// Un alquiler abierto todavía tiene el vehículo en la calle
    pub fn is_open(&self) -> bool {
        matches!(self, RentalStatus::Active | RentalStatus::Late)
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RentalStatus::Pending => "pending",
            RentalStatus::Active => "active",
            RentalStatus::Completed => "completed",
            RentalStatus::Late => "late",
        };
        f.write_str(label)
    }
}

/// Rental principal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub vehicle_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_days: i32,
    pub status: RentalStatus,
    /// Importe acordado para el periodo de alquiler
    pub total_amount: Decimal,
    /// Odómetro registrado al activar el alquiler
    pub start_mileage: i64,
    pub end_mileage: Option<i64>,
    pub final_amount: Option<Decimal>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Rental {
    pub fn agreement(&self) -> RentalAgreement {
        RentalAgreement {
            duration_days: self.duration_days,
            base_amount: self.total_amount,
            start_mileage_odometer: self.start_mileage,
        }
    }
}

/// Condiciones del contrato que intervienen en la liquidación (solo lectura)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalAgreement {
    pub duration_days: i32,
    pub base_amount: Decimal,
    pub start_mileage_odometer: i64,
}
