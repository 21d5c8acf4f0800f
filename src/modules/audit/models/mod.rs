pub mod audit_event;

pub use audit_event::{AuditAction, AuditEvent, ResourceType};
