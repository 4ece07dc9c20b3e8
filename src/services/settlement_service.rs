//! Servicio de liquidación de alquileres
//! 
//! Convierte las lecturas de la inspección de devolución (odómetro y nivel de
//! combustible) en el importe final a cobrar:
//!
//! ```text
//! final_total = base_amount + exceso_km * tarifa_km + litros_faltantes * tarifa_litro
//! ```
//!
//! El cálculo es puro: solo lee sus argumentos y la política de tarifas. Cobrar
//! el importe o persistir el cierre es responsabilidad de quien lo llama.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::models::{
    RentalAgreement, ReturnInspection, SettlementPolicy, SettlementResult, VehicleRecord,
};

const FULL_TANK_PERCENT: i32 = 100;

/// Importe base máximo aceptado (mil millones)
pub const MAX_BASE_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Capacidad de depósito máxima aceptada, en litros
pub const MAX_TANK_CAPACITY_LITERS: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Lectura de odómetro máxima aceptada, en km
pub const MAX_ODOMETER_KM: i64 = 10_000_000;

/// Campo de entrada que no cumple su restricción de dominio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SettlementField {
    #[serde(rename = "durationDays")]
    DurationDays,
    #[serde(rename = "baseAmount")]
    BaseAmount,
    #[serde(rename = "startMileageOdometer")]
    StartMileageOdometer,
    #[serde(rename = "tankCapacityLiters")]
    TankCapacityLiters,
    #[serde(rename = "returnOdometer")]
    ReturnOdometer,
    #[serde(rename = "returnFuelPercent")]
    ReturnFuelPercent,
}

impl SettlementField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementField::DurationDays => "durationDays",
            SettlementField::BaseAmount => "baseAmount",
            SettlementField::StartMileageOdometer => "startMileageOdometer",
            SettlementField::TankCapacityLiters => "tankCapacityLiters",
            SettlementField::ReturnOdometer => "returnOdometer",
            SettlementField::ReturnFuelPercent => "returnFuelPercent",
        }
    }
}

impl fmt::Display for SettlementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errores de la liquidación
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettlementError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        field: SettlementField,
        reason: String,
    },
}

impl SettlementError {
    fn invalid(field: SettlementField, reason: impl Into<String>) -> Self {
        SettlementError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    fn out_of_range<T: fmt::Display>(field: SettlementField, value: T, max: T) -> Self {
        Self::invalid(field, format!("must not exceed {}, got {}", max, value))
    }

    pub fn field(&self) -> SettlementField {
        match self {
            SettlementError::InvalidInput { field, .. } => *field,
        }
    }
}

/// Calculadora de liquidación con una política de tarifas fija
#[derive(Debug, Clone, Default)]
pub struct SettlementCalculator {
    policy: SettlementPolicy,
}

impl SettlementCalculator {
    pub fn new(policy: SettlementPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SettlementPolicy {
        &self.policy
    }

    /// Calcular la liquidación final de un alquiler.
    ///
    /// Falla con `SettlementError::InvalidInput` sin resultado parcial si
    /// alguna entrada está fuera de su dominio.
    pub fn compute(
        &self,
        agreement: &RentalAgreement,
        vehicle: &VehicleRecord,
        inspection: &ReturnInspection,
    ) -> Result<SettlementResult, SettlementError> {
        validate_inputs(agreement, vehicle, inspection)?;

        let allowed_distance = i64::from(agreement.duration_days)
            .checked_mul(self.policy.allowed_distance_per_day)
            .ok_or_else(|| overflow(SettlementField::DurationDays))?;
        let actual_distance = inspection.return_odometer - agreement.start_mileage_odometer;
        let excess_distance = actual_distance
            .checked_sub(allowed_distance)
            .ok_or_else(|| overflow(SettlementField::DurationDays))?
            .max(0);
        let excess_distance_fee = Decimal::from(excess_distance)
            .checked_mul(self.policy.excess_distance_rate)
            .ok_or_else(|| overflow(SettlementField::ReturnOdometer))?;

        let fuel_shortfall_percent = (FULL_TANK_PERCENT - inspection.return_fuel_percent).max(0);
        let missing_fuel_liters = (Decimal::from(fuel_shortfall_percent) / Decimal::ONE_HUNDRED)
            .checked_mul(vehicle.tank_capacity_liters)
            .ok_or_else(|| overflow(SettlementField::TankCapacityLiters))?;
        let fuel_shortfall_fee = missing_fuel_liters
            .checked_mul(self.policy.fuel_penalty_rate)
            .ok_or_else(|| overflow(SettlementField::TankCapacityLiters))?;

        let final_total = agreement
            .base_amount
            .checked_add(excess_distance_fee)
            .and_then(|total| total.checked_add(fuel_shortfall_fee))
            .ok_or_else(|| overflow(SettlementField::BaseAmount))?;

        Ok(SettlementResult {
            base_amount: agreement.base_amount,
            allowed_distance,
            actual_distance,
            excess_distance,
            excess_distance_fee,
            fuel_shortfall_percent,
            missing_fuel_liters,
            fuel_shortfall_fee,
            final_total,
        })
    }
}

/// Liquidación con la política por defecto (200 km/día, 0.25/km, 2.50/L)
pub fn compute_settlement(
    agreement: &RentalAgreement,
    vehicle: &VehicleRecord,
    inspection: &ReturnInspection,
) -> Result<SettlementResult, SettlementError> {
    SettlementCalculator::default().compute(agreement, vehicle, inspection)
}

fn overflow(field: SettlementField) -> SettlementError {
    SettlementError::invalid(field, "value too large to settle")
}

fn validate_inputs(
    agreement: &RentalAgreement,
    vehicle: &VehicleRecord,
    inspection: &ReturnInspection,
) -> Result<(), SettlementError> {
    if agreement.duration_days <= 0 {
        return Err(SettlementError::invalid(
            SettlementField::DurationDays,
            format!("must be greater than 0, got {}", agreement.duration_days),
        ));
    }
    if agreement.base_amount < Decimal::ZERO {
        return Err(SettlementError::invalid(
            SettlementField::BaseAmount,
            format!("must not be negative, got {}", agreement.base_amount),
        ));
    }
    if agreement.base_amount > MAX_BASE_AMOUNT {
        return Err(SettlementError::out_of_range(
            SettlementField::BaseAmount,
            agreement.base_amount,
            MAX_BASE_AMOUNT,
        ));
    }
    if agreement.start_mileage_odometer < 0 {
        return Err(SettlementError::invalid(
            SettlementField::StartMileageOdometer,
            format!("must not be negative, got {}", agreement.start_mileage_odometer),
        ));
    }
    if agreement.start_mileage_odometer > MAX_ODOMETER_KM {
        return Err(SettlementError::out_of_range(
            SettlementField::StartMileageOdometer,
            agreement.start_mileage_odometer,
            MAX_ODOMETER_KM,
        ));
    }
    if vehicle.tank_capacity_liters <= Decimal::ZERO {
        return Err(SettlementError::invalid(
            SettlementField::TankCapacityLiters,
            format!("must be greater than 0, got {}", vehicle.tank_capacity_liters),
        ));
    }
    if vehicle.tank_capacity_liters > MAX_TANK_CAPACITY_LITERS {
        return Err(SettlementError::out_of_range(
            SettlementField::TankCapacityLiters,
            vehicle.tank_capacity_liters,
            MAX_TANK_CAPACITY_LITERS,
        ));
    }
    if !(0..=FULL_TANK_PERCENT).contains(&inspection.return_fuel_percent) {
        return Err(SettlementError::invalid(
            SettlementField::ReturnFuelPercent,
            format!("must be between 0 and 100, got {}", inspection.return_fuel_percent),
        ));
    }
    if inspection.return_odometer < agreement.start_mileage_odometer {
        return Err(SettlementError::invalid(
            SettlementField::ReturnOdometer,
            format!(
                "return odometer {} is below start odometer {}",
                inspection.return_odometer, agreement.start_mileage_odometer
            ),
        ));
    }
    if inspection.return_odometer > MAX_ODOMETER_KM {
        return Err(SettlementError::out_of_range(
            SettlementField::ReturnOdometer,
            inspection.return_odometer,
            MAX_ODOMETER_KM,
        ));
    }
    Ok(())
}
