//! Modelo de Audit
//! 
//! Eventos de auditoría de acciones críticas (cambios de estado de alquileres,
//! cierres, etc.). No se persisten: se emiten por `tracing`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditEntityType {
    Rental,
    Vehicle,
    Client,
    Payment,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    StatusChange,
    Approve,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub tenant_id: String,
    /// `None` para acciones del sistema (jobs)
    pub actor_id: Option<String>,
    pub entity_type: AuditEntityType,
    pub entity_id: String,
    pub action: AuditAction,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReceipt {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
}
