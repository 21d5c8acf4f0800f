pub mod dashboard;

pub use dashboard::{ClientCounters, CorrectionTotals, DashboardReport, PeriodCreditReport};
