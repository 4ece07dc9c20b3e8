//! Servicio de auditoría
//! 
//! Registra acciones críticas del sistema para cumplimiento y depuración.
//! Los eventos se emiten por `tracing` con target `audit`; no hay tabla
//! `audit_logs` detrás.

use chrono::Utc;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::models::{AuditAction, AuditEntityType, AuditEntry, AuditReceipt, RentalStatus};

#[derive(Debug, Clone)]
pub struct AuditService {
    tenant_id: String,
}

impl AuditService {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
        }
    }

    pub fn log_event(&self, entry: AuditEntry) -> AuditReceipt {
        let receipt = AuditReceipt {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
        };

        let old_values = entry.old_values.as_ref().map(|v| v.to_string());
        let new_values = entry.new_values.as_ref().map(|v| v.to_string());
        info!(
            target: "audit",
            audit_id = %receipt.id,
            tenant_id = %entry.tenant_id,
            actor_id = entry.actor_id.as_deref().unwrap_or("system"),
            entity_type = ?entry.entity_type,
            entity_id = %entry.entity_id,
            action = ?entry.action,
            old_values = old_values.as_deref().unwrap_or("-"),
            new_values = new_values.as_deref().unwrap_or("-"),
            recorded_at = %receipt.recorded_at.to_rfc3339(),
            "📝 [AUDIT LOG]"
        );

        receipt
    }

    /// Registrar un cambio de estado de alquiler con su contexto
    pub fn log_rental_status_change(
        &self,
        rental_id: &str,
        old_status: RentalStatus,
        new_status: RentalStatus,
        actor_id: Option<&str>,
    ) -> AuditReceipt {
        self.log_event(AuditEntry {
            tenant_id: self.tenant_id.clone(),
            actor_id: actor_id.map(str::to_string),
            entity_type: AuditEntityType::Rental,
            entity_id: rental_id.to_string(),
            action: AuditAction::StatusChange,
            old_values: Some(json!({ "status": old_status })),
            new_values: Some(json!({ "status": new_status })),
        })
    }
}
