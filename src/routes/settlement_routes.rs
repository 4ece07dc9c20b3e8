use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::settlement_controller::SettlementController;
use crate::dto::settlement_dto::{SettlementPreviewRequest, SettlementResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_settlement_router() -> Router<AppState> {
    Router::new().route("/preview", post(preview_settlement))
}

async fn preview_settlement(
    State(state): State<AppState>,
    Json(request): Json<SettlementPreviewRequest>,
) -> Result<Json<ApiResponse<SettlementResponse>>, AppError> {
    let controller = SettlementController::new(state.calculator.clone());
    let response = controller.preview(request)?;
    Ok(Json(response))
}
