// Tax credits module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreditStatus, CreditSummary, CreditType, TaxCredit};
pub use repositories::credit_repository::{CreditFilter, InMemoryCreditRepository};
pub use services::credit_service::CreditService;
