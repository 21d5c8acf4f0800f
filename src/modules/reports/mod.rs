// Reports module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ClientCounters, CorrectionTotals, DashboardReport, PeriodCreditReport};
pub use services::report_service::ReportService;
