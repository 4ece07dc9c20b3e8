use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::dto::settlement_dto::{CloseRentalRequest, SettlementResponse};
use crate::dto::ApiResponse;
use crate::models::{Rental, ReturnInspection, Vehicle};
use crate::repositories::RentalRepository;
use crate::services::{AuditService, SettlementCalculator};
use crate::state::AppState;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct RentalController {
    repository: RentalRepository,
    calculator: SettlementCalculator,
    audit: AuditService,
}

impl RentalController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
            calculator: state.calculator.clone(),
            audit: state.audit.clone(),
        }
    }

    pub async fn list_rentals(&self) -> Vec<Rental> {
        self.repository.list_rentals().await
    }

    pub async fn list_vehicles(&self) -> Vec<Vehicle> {
        self.repository.list_vehicles().await
    }

    /// Cerrar un alquiler: liquidar, marcar como completado y auditar
    pub async fn close(
        &self,
        rental_id: &str,
        request: CloseRentalRequest,
    ) -> Result<ApiResponse<SettlementResponse>, AppError> {
        request.validate()?;

        let rental = self
            .repository
            .find_rental(rental_id)
            .await
            .ok_or_else(|| not_found_error("Rental", rental_id))?;
        if !rental.status.is_open() {
            return Err(conflict_error(
                "Rental",
                rental_id,
                &format!("is {} and cannot be closed", rental.status),
            ));
        }
        let vehicle = self
            .repository
            .find_vehicle(&rental.vehicle_id)
            .await
            .ok_or_else(|| not_found_error("Vehicle", &rental.vehicle_id))?;

        let inspection = ReturnInspection::from(&request);
        let settlement =
            self.calculator
                .compute(&rental.agreement(), &vehicle.record(), &inspection)?;

        let closed = self
            .repository
            .complete_rental(rental_id, &inspection, settlement.final_total, Utc::now())
            .await?;

        self.audit.log_rental_status_change(
            rental_id,
            closed.previous_status,
            closed.rental.status,
            request.actor_id.as_deref(),
        );

        let response = SettlementResponse::new(&settlement, self.calculator.policy())
            .for_rental(rental_id);
        info!(
            "✅ Alquiler {} cerrado: total {} ({} km extra, {}% combustible faltante)",
            rental_id,
            response.final_total,
            settlement.excess_distance,
            settlement.fuel_shortfall_percent
        );

        Ok(ApiResponse::success_with_message(
            response,
            "Rental closed successfully".to_string(),
        ))
    }
}
