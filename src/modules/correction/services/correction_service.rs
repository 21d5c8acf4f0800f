use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::currency::{format_brl, format_percent_br};
use crate::core::dates::parse_flexible;
use crate::core::error::{AppError, Result};
use crate::core::listing::{paginate, Page};
use crate::core::notify::Notifier;
use crate::core::traits::repository::Repository;
use crate::middleware::actor::Actor;
use crate::modules::audit::models::{AuditAction, AuditEvent, ResourceType};
use crate::modules::audit::services::audit_service::AuditService;
use crate::modules::correction::models::{MonetaryCorrection, MonthRef, SelicSeries};
use crate::modules::correction::repositories::correction_repository::{
    CorrectionFilter, CorrectionRepository,
};
use crate::modules::correction::repositories::selic_repository::SelicRepository;
use crate::modules::correction::services::correction_calculator::correct_value;
use crate::modules::credits::models::TaxCredit;
use crate::modules::credits::repositories::credit_repository::CreditFilter;

/// Payload for POST /corrections
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateCorrectionRequest {
    pub credit_id: Option<String>,
    pub original_value: Decimal,
    /// `DD/MM/YYYY` or ISO
    pub origination_date: String,
}

/// One month of PUT /selic
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesEntryRequest {
    /// `MM/YYYY`
    pub reference: String,
    pub monthly_rate: Decimal,
}

/// Payload for PUT /selic
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceSeriesRequest {
    pub rates: Vec<SeriesEntryRequest>,
}

/// Computed correction plus the human-readable outcome
#[derive(Debug, Clone, Serialize)]
pub struct CorrectionResponse {
    pub correction: MonetaryCorrection,
    pub message: String,
    pub warning: Option<String>,
}

/// Service for the monetary-correction engine and its history
pub struct CorrectionService {
    selic: Arc<dyn SelicRepository>,
    history: Arc<dyn CorrectionRepository>,
    credits: Arc<dyn Repository<TaxCredit, CreditFilter>>,
    audit: Arc<AuditService>,
    notifier: Arc<dyn Notifier>,
}

impl CorrectionService {
    pub fn new(
        selic: Arc<dyn SelicRepository>,
        history: Arc<dyn CorrectionRepository>,
        credits: Arc<dyn Repository<TaxCredit, CreditFilter>>,
        audit: Arc<AuditService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            selic,
            history,
            credits,
            audit,
            notifier,
        }
    }

    /// Computes a correction as of today, appends it to the history and
    /// notifies the outcome.
    pub async fn calculate(
        &self,
        request: CalculateCorrectionRequest,
        actor: &Actor,
    ) -> Result<CorrectionResponse> {
        let credit = match &request.credit_id {
            Some(id) => Some(
                self.credits
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Crédito {}", id)))?,
            ),
            None => None,
        };

        let origination_date = parse_flexible(&request.origination_date)?;
        let correction_date = Utc::now().date_naive();
        let series = self.selic.get().await?;

        let outcome = correct_value(
            request.original_value,
            origination_date,
            correction_date,
            &series,
        )?;

        let correction = MonetaryCorrection::new(
            request.credit_id.clone(),
            request.original_value,
            outcome.corrected_value,
            origination_date,
            correction_date,
            outcome.elapsed_months,
            outcome.accumulated_rate,
            outcome.series_exhausted,
        );
        let correction = self.history.append(correction).await?;

        let message = format!(
            "Correção calculada: original {} → corrigido {}",
            format_brl(correction.original_value),
            format_brl(correction.corrected_value)
        );
        let warning = outcome.series_exhausted.then(|| {
            format!(
                "Série Selic cobre {} de {} meses; aplicado o acumulado disponível de {}",
                series.len(),
                outcome.elapsed_months,
                format_percent_br(outcome.accumulated_rate)
            )
        });

        self.notifier.success(&message);
        if let Some(warning) = &warning {
            self.notifier.warning(warning);
        }

        let resource_name = credit
            .map(|c| c.client_name)
            .unwrap_or_else(|| "correção avulsa".to_string());
        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Calculation,
                ResourceType::MonetaryCorrection,
                &correction.id,
                resource_name,
                message.clone(),
            ))
            .await?;

        Ok(CorrectionResponse {
            correction,
            message,
            warning,
        })
    }

    /// Correction history, newest first, optionally restricted to a credit.
    pub async fn history(
        &self,
        filter: &CorrectionFilter,
        page: u32,
        page_size: u32,
    ) -> Result<Page<MonetaryCorrection>> {
        let corrections = self.history.list(filter).await?;
        paginate(corrections, page, page_size)
    }

    pub async fn series(&self) -> Result<SelicSeries> {
        self.selic.get().await
    }

    /// Replaces the rate series; the accumulated column is recomputed from
    /// the monthly rates.
    pub async fn replace_series(
        &self,
        request: ReplaceSeriesRequest,
        actor: &Actor,
    ) -> Result<SelicSeries> {
        let entries = request
            .rates
            .into_iter()
            .map(|entry| Ok((MonthRef::parse(&entry.reference)?, entry.monthly_rate)))
            .collect::<Result<Vec<_>>>()?;

        let series = SelicSeries::from_monthly_rates(entries)?;
        let series = self.selic.replace(series).await?;

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Update,
                ResourceType::SelicSeries,
                "selic",
                "Série Selic",
                format!("Série substituída com {} meses", series.len()),
            ))
            .await?;
        self.notifier.success(&format!(
            "Série Selic atualizada: {} meses",
            series.len()
        ));

        Ok(series)
    }
}
