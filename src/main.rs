use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rentflow_backend::config::environment::EnvironmentConfig;
use rentflow_backend::jobs::rental_reminders::start_rental_reminder_job;
use rentflow_backend::routes::create_app;
use rentflow_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("🚗 RentFlow - Rental Settlement API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    info!(
        "📐 Política de liquidación: {} km/día, {}/km extra, {}/L combustible",
        config.settlement.allowed_distance_per_day,
        config.settlement.excess_distance_rate,
        config.settlement.fuel_penalty_rate
    );

    let state = AppState::with_demo_fleet(config.clone()).await;
    let reminder_job = start_rental_reminder_job(state.clone());
    let app = create_app(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Health check");
    info!("   POST /api/settlements/preview - Previsualizar liquidación");
    info!("   GET  /api/rentals - Listar alquileres");
    info!("   POST /api/rentals/:id/close - Cerrar alquiler");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   POST /api/bookings/quote - Presupuestar reserva");
    info!("   POST /api/jobs/trigger - Ejecutar recordatorios");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
    }

    reminder_job.abort();
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
