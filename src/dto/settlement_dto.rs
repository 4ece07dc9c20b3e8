//! DTOs de liquidación
//! 
//! Frontera de validación tipada: el JSON se parsea y valida aquí antes de
//! convertirse en los tipos de dominio que recibe la calculadora.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{
    RentalAgreement, ReturnInspection, SettlementPolicy, SettlementResult, VehicleRecord,
};
use crate::utils::money::round_currency;
use crate::utils::validation::{validate_non_negative_amount, validate_positive_amount};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AgreementInput {
    #[validate(range(min = 1))]
    pub duration_days: i32,

    #[validate(custom = "validate_non_negative_amount")]
    pub base_amount: Decimal,

    #[validate(range(min = 0))]
    pub start_mileage_odometer: i64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInput {
    #[validate(custom = "validate_positive_amount")]
    pub tank_capacity_liters: Decimal,

    #[validate(range(min = 0))]
    pub current_mileage: i64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InspectionInput {
    #[validate(range(min = 0))]
    pub return_odometer: i64,

    #[validate(range(min = 0, max = 100))]
    pub return_fuel_percent: i32,
}

/// Request para previsualizar una liquidación sin cerrar ningún alquiler
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SettlementPreviewRequest {
    #[validate]
    pub agreement: AgreementInput,

    #[validate]
    pub vehicle: VehicleInput,

    #[validate]
    pub inspection: InspectionInput,
}

/// Request para cerrar un alquiler con la inspección de devolución
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CloseRentalRequest {
    #[validate(range(min = 0))]
    pub return_odometer: i64,

    #[validate(range(min = 0, max = 100))]
    pub return_fuel_percent: i32,

    #[validate(length(min = 1, max = 100))]
    pub actor_id: Option<String>,
}

impl From<&AgreementInput> for RentalAgreement {
    fn from(input: &AgreementInput) -> Self {
        Self {
            duration_days: input.duration_days,
            base_amount: input.base_amount,
            start_mileage_odometer: input.start_mileage_odometer,
        }
    }
}

impl From<&VehicleInput> for VehicleRecord {
    fn from(input: &VehicleInput) -> Self {
        Self {
            tank_capacity_liters: input.tank_capacity_liters,
            current_mileage: input.current_mileage,
        }
    }
}

impl From<&InspectionInput> for ReturnInspection {
    fn from(input: &InspectionInput) -> Self {
        Self {
            return_odometer: input.return_odometer,
            return_fuel_percent: input.return_fuel_percent,
        }
    }
}

impl From<&CloseRentalRequest> for ReturnInspection {
    fn from(request: &CloseRentalRequest) -> Self {
        Self {
            return_odometer: request.return_odometer,
            return_fuel_percent: request.return_fuel_percent,
        }
    }
}

/// Desglose de la liquidación redondeado a céntimos para mostrar
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_id: Option<String>,
    pub base_amount: Decimal,
    pub allowed_distance: i64,
    pub actual_distance: i64,
    pub excess_distance: i64,
    pub excess_distance_rate: Decimal,
    pub excess_distance_fee: Decimal,
    pub fuel_shortfall_percent: i32,
    pub missing_fuel_liters: Decimal,
    pub fuel_penalty_rate: Decimal,
    pub fuel_shortfall_fee: Decimal,
    pub final_total: Decimal,
}

impl SettlementResponse {
    pub fn new(result: &SettlementResult, policy: &SettlementPolicy) -> Self {
        Self {
            rental_id: None,
            base_amount: round_currency(result.base_amount),
            allowed_distance: result.allowed_distance,
            actual_distance: result.actual_distance,
            excess_distance: result.excess_distance,
            excess_distance_rate: round_currency(policy.excess_distance_rate),
            excess_distance_fee: round_currency(result.excess_distance_fee),
            fuel_shortfall_percent: result.fuel_shortfall_percent,
            missing_fuel_liters: round_currency(result.missing_fuel_liters),
            fuel_penalty_rate: round_currency(policy.fuel_penalty_rate),
            fuel_shortfall_fee: round_currency(result.fuel_shortfall_fee),
            final_total: round_currency(result.final_total),
        }
    }

    pub fn for_rental(mut self, rental_id: impl Into<String>) -> Self {
        self.rental_id = Some(rental_id.into());
        self
    }
}
