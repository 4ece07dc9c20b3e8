use validator::Validate;

use crate::dto::booking_dto::{BookingQuoteRequest, BookingQuoteResponse};
use crate::dto::ApiResponse;
use crate::models::PricingPolicy;
use crate::repositories::RentalRepository;
use crate::services::quote_booking;
use crate::utils::errors::{not_found_error, AppError};

pub struct BookingController {
    repository: RentalRepository,
    pricing: PricingPolicy,
}

impl BookingController {
    pub fn new(repository: RentalRepository, pricing: PricingPolicy) -> Self {
        Self {
            repository,
            pricing,
        }
    }

    pub async fn quote(
        &self,
        request: BookingQuoteRequest,
    ) -> Result<ApiResponse<BookingQuoteResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .find_vehicle(&request.vehicle_id)
            .await
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id))?;

        let quote = quote_booking(
            vehicle.daily_rate,
            request.start_date,
            request.end_date,
            &self.pricing,
        )?;

        Ok(ApiResponse::success(BookingQuoteResponse::new(&request, &quote)))
    }
}
