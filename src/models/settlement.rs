//! Modelo de Settlement
//! 
//! Entradas y salida de la liquidación de un alquiler: la inspección de
//! devolución, la política de penalizaciones y el resultado desglosado.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lecturas tomadas en la inspección de devolución
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnInspection {
    pub return_odometer: i64,
    /// Nivel de combustible en la devolución (0-100)
    pub return_fuel_percent: i32,
}

/// Tarifas de penalización aplicadas al cerrar un alquiler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementPolicy {
    /// Km incluidos por día de alquiler
    pub allowed_distance_per_day: i64,
    /// Importe por km por encima de la franquicia
    pub excess_distance_rate: Decimal,
    /// Importe por litro de combustible que falta
    pub fuel_penalty_rate: Decimal,
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            allowed_distance_per_day: 200,
            excess_distance_rate: Decimal::new(25, 2),
            fuel_penalty_rate: Decimal::new(250, 2),
        }
    }
}

/// Resultado de la liquidación con precisión completa.
///
/// El redondeo a 2 decimales se hace solo al presentar
/// (ver `dto::settlement_dto::SettlementResponse`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    pub base_amount: Decimal,
    pub allowed_distance: i64,
    pub actual_distance: i64,
    pub excess_distance: i64,
    pub excess_distance_fee: Decimal,
    pub fuel_shortfall_percent: i32,
    pub missing_fuel_liters: Decimal,
    pub fuel_shortfall_fee: Decimal,
    pub final_total: Decimal,
}
