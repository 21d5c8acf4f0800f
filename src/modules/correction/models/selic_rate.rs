// Monthly Selic reference table used for monetary correction.
//
// The accumulated column is always recomputed from the monthly rates when a
// series is built, never accepted from input, so the running-sum invariant
// holds by construction.

use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{AppError, Result};

/// Calendar month reference, rendered `MM/YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "Mês de referência inválido: {:02}/{}",
                month, year
            )));
        }

        Ok(Self { year, month })
    }

    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || {
            AppError::validation(format!(
                "Referência inválida: '{}' (use MM/AAAA)",
                input
            ))
        };

        let (month_part, year_part) = input.trim().split_once('/').ok_or_else(invalid)?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        let year: i32 = year_part.parse().map_err(|_| invalid())?;

        Self::new(month, year)
    }
}

impl std::fmt::Display for MonthRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

impl Serialize for MonthRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// One month of the reference table
#[derive(Debug, Clone, Serialize)]
pub struct SelicRate {
    pub reference: MonthRef,

    /// Published monthly rate, in percent
    pub monthly_rate: Decimal,

    /// Running sum of the monthly rates up to this month, in percent
    pub accumulated: Decimal,
}

/// Ordered monthly rate series with precomputed accumulated percentages.
///
/// The accumulated index is an additive running sum of the published monthly
/// rates, not a compounded factor; that is the table contract this back
/// office works with.
#[derive(Debug, Clone, Default)]
pub struct SelicSeries {
    rates: Vec<SelicRate>,
}

impl SelicSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from `(reference, monthly rate)` pairs.
    ///
    /// Rejects an empty input, negative rates and non-increasing month
    /// references; computes the accumulated column.
    pub fn from_monthly_rates(entries: Vec<(MonthRef, Decimal)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AppError::validation(
                "Série Selic deve conter ao menos um mês",
            ));
        }

        let mut rates = Vec::with_capacity(entries.len());
        let mut accumulated = Decimal::ZERO;
        let mut previous: Option<MonthRef> = None;

        for (reference, monthly_rate) in entries {
            if monthly_rate < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "Taxa mensal negativa em {}",
                    reference
                )));
            }
            if let Some(previous) = previous {
                if reference <= previous {
                    return Err(AppError::validation(format!(
                        "Referências fora de ordem: {} após {}",
                        reference, previous
                    )));
                }
            }

            accumulated += monthly_rate;
            rates.push(SelicRate {
                reference,
                monthly_rate,
                accumulated,
            });
            previous = Some(reference);
        }

        Ok(Self { rates })
    }

    pub fn rates(&self) -> &[SelicRate] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Accumulated percentage after `elapsed_months` whole months.
    ///
    /// When the series is shorter than the elapsed period the last available
    /// accumulated value is used and the second element of the pair is true,
    /// so callers can surface the coverage warning. `None` for an empty
    /// series or a zero elapsed period.
    pub fn accumulated_for(&self, elapsed_months: u32) -> Option<(Decimal, bool)> {
        if self.rates.is_empty() || elapsed_months == 0 {
            return None;
        }

        let exhausted = elapsed_months as usize > self.rates.len();
        let index = (elapsed_months as usize).min(self.rates.len()) - 1;

        Some((self.rates[index].accumulated, exhausted))
    }

    /// Reference table bundled for development environments, covering
    /// 01/2023 through 06/2025.
    pub fn bundled() -> Self {
        let table: &[(u32, i32, &str)] = &[
            (1, 2023, "1.12"),
            (2, 2023, "0.92"),
            (3, 2023, "1.17"),
            (4, 2023, "0.92"),
            (5, 2023, "1.12"),
            (6, 2023, "1.07"),
            (7, 2023, "1.07"),
            (8, 2023, "1.14"),
            (9, 2023, "0.97"),
            (10, 2023, "1.00"),
            (11, 2023, "0.92"),
            (12, 2023, "0.89"),
            (1, 2024, "0.97"),
            (2, 2024, "0.80"),
            (3, 2024, "0.83"),
            (4, 2024, "0.89"),
            (5, 2024, "0.83"),
            (6, 2024, "0.79"),
            (7, 2024, "0.91"),
            (8, 2024, "0.87"),
            (9, 2024, "0.84"),
            (10, 2024, "0.93"),
            (11, 2024, "0.79"),
            (12, 2024, "0.93"),
            (1, 2025, "1.01"),
            (2, 2025, "0.99"),
            (3, 2025, "0.96"),
            (4, 2025, "1.06"),
            (5, 2025, "1.00"),
            (6, 2025, "1.02"),
        ];

        let entries = table
            .iter()
            .map(|(month, year, rate)| {
                let reference = MonthRef::new(*month, *year).expect("static table");
                let rate: Decimal = rate.parse().expect("static table");
                (reference, rate)
            })
            .collect();

        Self::from_monthly_rates(entries).expect("static table")
    }
}

impl Serialize for SelicSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SelicSeries", 2)?;
        state.serialize_field("months", &self.rates.len())?;
        state.serialize_field("rates", &self.rates)?;
        state.end()
    }
}
