use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingQuoteRequest, BookingQuoteResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new().route("/quote", post(quote_booking))
}

async fn quote_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingQuoteRequest>,
) -> Result<Json<ApiResponse<BookingQuoteResponse>>, AppError> {
    let controller =
        BookingController::new(state.repository.clone(), state.config.pricing.clone());
    let response = controller.quote(request).await?;
    Ok(Json(response))
}
