use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::core::traits::repository::Repository;
use crate::modules::clients::models::Client;
use crate::modules::clients::repositories::client_repository::ClientFilter;
use crate::modules::correction::repositories::correction_repository::{
    CorrectionFilter, CorrectionRepository,
};
use crate::modules::credits::models::{CreditSummary, TaxCredit};
use crate::modules::credits::repositories::credit_repository::CreditFilter;
use crate::modules::recovery::models::{RecoveryProcess, RecoverySummary};
use crate::modules::recovery::repositories::recovery_repository::RecoveryFilter;
use crate::modules::reports::models::{
    ClientCounters, CorrectionTotals, DashboardReport, PeriodCreditReport,
};

/// Widest accepted reporting span: the five-year prescription window for
/// tax-credit claims.
const MAX_RANGE_DAYS: i64 = 5 * 366;

/// Composes dashboard and period reports from the other modules' stores
pub struct ReportService {
    clients: Arc<dyn Repository<Client, ClientFilter>>,
    credits: Arc<dyn Repository<TaxCredit, CreditFilter>>,
    recovery: Arc<dyn Repository<RecoveryProcess, RecoveryFilter>>,
    corrections: Arc<dyn CorrectionRepository>,
}

impl ReportService {
    pub fn new(
        clients: Arc<dyn Repository<Client, ClientFilter>>,
        credits: Arc<dyn Repository<TaxCredit, CreditFilter>>,
        recovery: Arc<dyn Repository<RecoveryProcess, RecoveryFilter>>,
        corrections: Arc<dyn CorrectionRepository>,
    ) -> Self {
        Self {
            clients,
            credits,
            recovery,
            corrections,
        }
    }

    /// Snapshot of every module's counters.
    pub async fn dashboard(&self) -> Result<DashboardReport> {
        let clients = self.clients.list(&ClientFilter::default()).await?;
        let credits = self.credits.list(&CreditFilter::default()).await?;
        let processes = self.recovery.list(&RecoveryFilter::default()).await?;
        let corrections = self.corrections.list(&CorrectionFilter::default()).await?;

        info!(
            clients = clients.len(),
            credits = credits.len(),
            processes = processes.len(),
            corrections = corrections.len(),
            "Generating dashboard report"
        );

        Ok(DashboardReport {
            clients: ClientCounters::from_clients(&clients),
            credits: CreditSummary::from_credits(&credits),
            recovery: RecoverySummary::from_processes(&processes),
            corrections: CorrectionTotals::from_history(&corrections),
            generated_at: Utc::now(),
        })
    }

    /// Credit counters restricted to credits whose assessment period
    /// intersects `[start, end]`.
    pub async fn credit_period_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodCreditReport> {
        self.validate_date_range(start, end)?;

        let credits = self.credits.list(&CreditFilter::default()).await?;
        let in_period = credits
            .iter()
            .filter(|credit| credit.period_start <= end && credit.period_end >= start);
        let summary = CreditSummary::from_credits(in_period);

        if summary.total == 0 {
            warn!(
                "Empty credit report generated for period {} to {}",
                start, end
            );
        }

        Ok(PeriodCreditReport {
            start,
            end,
            summary,
        })
    }

    /// Validate that a reporting range is reasonable: ordered, not in the
    /// future and within the prescription window.
    pub fn validate_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<()> {
        let today = Utc::now().date_naive();

        if start > end {
            return Err(AppError::validation(
                "Data inicial deve ser anterior ou igual à final",
            ));
        }

        if end > today {
            return Err(AppError::validation(format!(
                "Data final não pode estar no futuro (hoje é {})",
                crate::core::dates::format_br(today)
            )));
        }

        let days = (end - start).num_days();
        if days > MAX_RANGE_DAYS {
            return Err(AppError::validation(format!(
                "Período muito longo: {} dias (máximo de 5 anos)",
                days
            )));
        }

        Ok(())
    }
}
