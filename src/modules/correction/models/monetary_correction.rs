use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One monetary-correction calculation, immutable once appended to the
/// history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonetaryCorrection {
    pub id: String,

    /// Credit the correction was computed for, when tied to one
    pub credit_id: Option<String>,

    pub original_value: Decimal,
    pub corrected_value: Decimal,

    /// corrected − original
    pub difference: Decimal,

    #[serde(with = "crate::core::dates::br_date")]
    pub origination_date: NaiveDate,

    #[serde(with = "crate::core::dates::br_date")]
    pub correction_date: NaiveDate,

    /// Whole months between origination and correction dates
    pub elapsed_months: u32,

    /// Accumulated percentage applied
    pub accumulated_rate: Decimal,

    /// True when the elapsed period ran past the series coverage and the
    /// last available accumulated value was used
    pub series_exhausted: bool,

    pub created_at: DateTime<Utc>,
}

impl MonetaryCorrection {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        credit_id: Option<String>,
        original_value: Decimal,
        corrected_value: Decimal,
        origination_date: NaiveDate,
        correction_date: NaiveDate,
        elapsed_months: u32,
        accumulated_rate: Decimal,
        series_exhausted: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            credit_id,
            original_value,
            corrected_value,
            difference: corrected_value - original_value,
            origination_date,
            correction_date,
            elapsed_months,
            accumulated_rate,
            series_exhausted,
            created_at: Utc::now(),
        }
    }
}
