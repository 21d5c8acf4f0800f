// Monetary-correction engine.
//
// Pure calculation: the caller supplies the reference date and the rate
// series, so the same inputs always produce the same output.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::currency::round_brl;
use crate::core::dates::whole_months_between;
use crate::core::error::{AppError, Result};
use crate::modules::correction::models::SelicSeries;

/// Result of a correction calculation
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionOutcome {
    pub corrected_value: Decimal,
    pub difference: Decimal,
    pub elapsed_months: u32,
    pub accumulated_rate: Decimal,

    /// True when the elapsed period exceeded the series coverage and the
    /// last available accumulated value was applied
    pub series_exhausted: bool,
}

/// Corrects a nominal value by the accumulated Selic percentage for the
/// whole months elapsed between origination and the reference date.
///
/// `corrected = original × (1 + accumulated / 100)`, rounded to centavos.
/// The accumulated percentage is the additive running sum of the monthly
/// table; it is applied in a single multiplication, not compounded month by
/// month.
///
/// Fails with a validation error when the value is not positive, when no
/// whole month has elapsed (same-month or future origination) or when the
/// series is empty. An elapsed period beyond the series coverage is not an
/// error: the last accumulated value is applied and the outcome is flagged
/// `series_exhausted` so the caller can warn.
pub fn correct_value(
    original_value: Decimal,
    origination_date: NaiveDate,
    reference_date: NaiveDate,
    series: &SelicSeries,
) -> Result<CorrectionOutcome> {
    if original_value <= Decimal::ZERO {
        return Err(AppError::validation(
            "Valor original deve ser maior que zero",
        ));
    }

    let elapsed = whole_months_between(origination_date, reference_date);
    if elapsed <= 0 {
        return Err(AppError::validation(
            "Data de origem deve ser anterior ao mês de referência",
        ));
    }
    let elapsed_months = elapsed as u32;

    let (accumulated_rate, series_exhausted) = series
        .accumulated_for(elapsed_months)
        .ok_or_else(|| AppError::validation("Série Selic não configurada"))?;

    let factor = Decimal::ONE + accumulated_rate / Decimal::ONE_HUNDRED;
    let corrected_value = round_brl(original_value * factor);

    Ok(CorrectionOutcome {
        corrected_value,
        difference: corrected_value - original_value,
        elapsed_months,
        accumulated_rate,
        series_exhausted,
    })
}
