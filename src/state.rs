//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum y al job de recordatorios.

use chrono::Utc;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{fixtures, RentalRepository};
use crate::services::{AuditService, LogReminderNotifier, ReminderNotifier, SettlementCalculator};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub repository: RentalRepository,
    pub calculator: SettlementCalculator,
    pub audit: AuditService,
    pub notifier: Arc<dyn ReminderNotifier>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, repository: RentalRepository) -> Self {
        Self {
            calculator: SettlementCalculator::new(config.settlement.clone()),
            audit: AuditService::new(config.tenant_id.clone()),
            notifier: Arc::new(LogReminderNotifier),
            config,
            repository,
        }
    }

    /// Estado con la flota de demostración cargada
    pub async fn with_demo_fleet(config: EnvironmentConfig) -> Self {
        let repository = fixtures::seeded_repository(Utc::now()).await;
        Self::new(config, repository)
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn ReminderNotifier>) -> Self {
        self.notifier = notifier;
        self
    }
}
