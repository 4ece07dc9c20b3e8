use tracing::debug;
use validator::Validate;

use crate::dto::settlement_dto::{SettlementPreviewRequest, SettlementResponse};
use crate::dto::ApiResponse;
use crate::models::{RentalAgreement, ReturnInspection, VehicleRecord};
use crate::services::SettlementCalculator;
use crate::utils::errors::AppError;

pub struct SettlementController {
    calculator: SettlementCalculator,
}

impl SettlementController {
    pub fn new(calculator: SettlementCalculator) -> Self {
        Self { calculator }
    }

    /// Liquidación de prueba: no toca el repositorio
    pub fn preview(
        &self,
        request: SettlementPreviewRequest,
    ) -> Result<ApiResponse<SettlementResponse>, AppError> {
        request.validate()?;

        let agreement = RentalAgreement::from(&request.agreement);
        let vehicle = VehicleRecord::from(&request.vehicle);
        let inspection = ReturnInspection::from(&request.inspection);

        let result = self.calculator.compute(&agreement, &vehicle, &inspection)?;
        debug!("🧮 Liquidación calculada: {:?}", result);

        Ok(ApiResponse::success(SettlementResponse::new(
            &result,
            self.calculator.policy(),
        )))
    }
}
