// Append-only audit trail record.
//
// Every mutating service operation records one event; there is no endpoint
// that writes to the trail directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::actor::Actor;

/// What happened to the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    #[serde(rename = "create")]
    Create,

    #[serde(rename = "update")]
    Update,

    #[serde(rename = "delete")]
    Delete,

    #[serde(rename = "status_change")]
    StatusChange,

    #[serde(rename = "calculation")]
    Calculation,

    #[serde(rename = "export")]
    Export,

    #[serde(rename = "import")]
    Import,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Create => write!(f, "create"),
            AuditAction::Update => write!(f, "update"),
            AuditAction::Delete => write!(f, "delete"),
            AuditAction::StatusChange => write!(f, "status_change"),
            AuditAction::Calculation => write!(f, "calculation"),
            AuditAction::Export => write!(f, "export"),
            AuditAction::Import => write!(f, "import"),
        }
    }
}

/// Which kind of record the event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    #[serde(rename = "client")]
    Client,

    #[serde(rename = "tax_credit")]
    TaxCredit,

    #[serde(rename = "recovery_process")]
    RecoveryProcess,

    #[serde(rename = "monetary_correction")]
    MonetaryCorrection,

    #[serde(rename = "selic_series")]
    SelicSeries,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Client => write!(f, "client"),
            ResourceType::TaxCredit => write!(f, "tax_credit"),
            ResourceType::RecoveryProcess => write!(f, "recovery_process"),
            ResourceType::MonetaryCorrection => write!(f, "monetary_correction"),
            ResourceType::SelicSeries => write!(f, "selic_series"),
        }
    }
}

/// One entry on the audit trail, immutable once appended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub actor_role: String,
    pub action: AuditAction,
    pub resource_type: ResourceType,
    pub resource_id: String,
    pub resource_name: String,
    pub details: String,
    pub ip: Option<String>,
    pub previous_status: Option<String>,
    pub new_status: Option<String>,
}

impl AuditEvent {
    pub fn new(
        actor: &Actor,
        action: AuditAction,
        resource_type: ResourceType,
        resource_id: impl Into<String>,
        resource_name: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            actor: actor.name.clone(),
            actor_role: actor.role.clone(),
            action,
            resource_type,
            resource_id: resource_id.into(),
            resource_name: resource_name.into(),
            details: details.into(),
            ip: actor.ip.clone(),
            previous_status: None,
            new_status: None,
        }
    }

    /// Attaches the before/after statuses of a status-change event.
    pub fn with_status_change(
        mut self,
        previous: impl ToString,
        new: impl ToString,
    ) -> Self {
        self.previous_status = Some(previous.to_string());
        self.new_status = Some(new.to_string());
        self
    }
}
