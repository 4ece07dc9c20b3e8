//! Rutas HTTP
//! 
//! Ensambla los routers de cada recurso bajo `/api`.

pub mod booking_routes;
pub mod job_routes;
pub mod rental_routes;
pub mod settlement_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config);
    Router::new()
        .route("/api/health", get(health_check))
        .nest("/api/settlements", settlement_routes::create_settlement_router())
        .nest("/api/rentals", rental_routes::create_rental_router())
        .nest("/api/vehicles", rental_routes::create_vehicle_router())
        .nest("/api/bookings", booking_routes::create_booking_router())
        .nest("/api/jobs", job_routes::create_job_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
