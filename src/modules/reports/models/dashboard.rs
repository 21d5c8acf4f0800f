use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::clients::models::{Client, ClientStatus};
use crate::modules::correction::models::MonetaryCorrection;
use crate::modules::credits::models::CreditSummary;
use crate::modules::recovery::models::RecoverySummary;

/// Client counters for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientCounters {
    pub total: usize,
    pub ativo: usize,
    pub inativo: usize,
    pub pendente: usize,
}

impl ClientCounters {
    pub fn from_clients<'a, I>(clients: I) -> Self
    where
        I: IntoIterator<Item = &'a Client>,
    {
        let mut counters = Self {
            total: 0,
            ativo: 0,
            inativo: 0,
            pendente: 0,
        };

        for client in clients {
            counters.total += 1;
            match client.status {
                ClientStatus::Ativo => counters.ativo += 1,
                ClientStatus::Inativo => counters.inativo += 1,
                ClientStatus::Pendente => counters.pendente += 1,
            }
        }

        counters
    }
}

/// Correction-history totals for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectionTotals {
    pub total: usize,

    /// Summed difference (corrected − original) across the history
    pub total_difference: Decimal,
}

impl CorrectionTotals {
    pub fn from_history<'a, I>(corrections: I) -> Self
    where
        I: IntoIterator<Item = &'a MonetaryCorrection>,
    {
        let mut totals = Self {
            total: 0,
            total_difference: Decimal::ZERO,
        };

        for correction in corrections {
            totals.total += 1;
            totals.total_difference += correction.difference;
        }

        totals
    }
}

/// Composed dashboard view
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub clients: ClientCounters,
    pub credits: CreditSummary,
    pub recovery: RecoverySummary,
    pub corrections: CorrectionTotals,
    pub generated_at: DateTime<Utc>,
}

/// Credit counters restricted to an assessment-period range
#[derive(Debug, Clone, Serialize)]
pub struct PeriodCreditReport {
    #[serde(with = "crate::core::dates::br_date")]
    pub start: NaiveDate,

    #[serde(with = "crate::core::dates::br_date")]
    pub end: NaiveDate,

    pub summary: CreditSummary,
}
