// Recovery processes module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ProcessType, RecoveryProcess, RecoveryStatus, RecoverySummary};
pub use repositories::recovery_repository::{InMemoryRecoveryRepository, RecoveryFilter};
pub use services::recovery_service::RecoveryService;
