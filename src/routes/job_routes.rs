use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::dto::ApiResponse;
use crate::jobs::rental_reminders::{run_rental_reminders_now, ReminderJobReport};
use crate::state::AppState;

pub fn create_job_router() -> Router<AppState> {
    Router::new().route("/trigger", post(trigger_rental_reminders))
}

async fn trigger_rental_reminders(
    State(state): State<AppState>,
) -> Json<ApiResponse<ReminderJobReport>> {
    info!("🔔 Manual trigger of rental reminders job...");
    let report = run_rental_reminders_now(&state).await;
    Json(ApiResponse::success_with_message(
        report,
        "Job executed successfully".to_string(),
    ))
}
