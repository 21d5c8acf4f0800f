// Monetary correction module: Selic rate series, the correction engine and
// its history.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{MonetaryCorrection, MonthRef, SelicRate, SelicSeries};
pub use repositories::correction_repository::{
    CorrectionFilter, CorrectionRepository, InMemoryCorrectionRepository,
};
pub use repositories::selic_repository::{InMemorySelicRepository, SelicRepository};
pub use services::correction_calculator::{correct_value, CorrectionOutcome};
pub use services::correction_service::CorrectionService;
