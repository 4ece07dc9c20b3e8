use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::rental_controller::RentalController;
use crate::dto::settlement_dto::{CloseRentalRequest, SettlementResponse};
use crate::dto::ApiResponse;
use crate::models::{Rental, Vehicle};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rentals))
        .route("/:id/close", post(close_rental))
}

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new().route("/", get(list_vehicles))
}

async fn list_rentals(State(state): State<AppState>) -> Json<ApiResponse<Vec<Rental>>> {
    let controller = RentalController::new(&state);
    Json(ApiResponse::success(controller.list_rentals().await))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<ApiResponse<Vec<Vehicle>>> {
    let controller = RentalController::new(&state);
    Json(ApiResponse::success(controller.list_vehicles().await))
}

async fn close_rental(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CloseRentalRequest>,
) -> Result<Json<ApiResponse<SettlementResponse>>, AppError> {
    let controller = RentalController::new(&state);
    let response = controller.close(&id, request).await?;
    Ok(Json(response))
}
