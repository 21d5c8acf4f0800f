pub mod monetary_correction;
pub mod selic_rate;

pub use monetary_correction::MonetaryCorrection;
pub use selic_rate::{MonthRef, SelicRate, SelicSeries};
