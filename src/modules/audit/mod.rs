// Audit trail module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AuditAction, AuditEvent, ResourceType};
pub use repositories::audit_repository::{AuditFilter, AuditRepository, InMemoryAuditRepository};
pub use services::audit_service::AuditService;
