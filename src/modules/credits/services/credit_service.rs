use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::currency::format_brl;
use crate::core::error::{AppError, Result};
use crate::core::listing::{paginate, Page};
use crate::core::notify::Notifier;
use crate::core::traits::repository::Repository;
use crate::middleware::actor::Actor;
use crate::modules::audit::models::{AuditAction, AuditEvent, ResourceType};
use crate::modules::audit::services::audit_service::AuditService;
use crate::modules::clients::models::Client;
use crate::modules::clients::repositories::client_repository::ClientFilter;
use crate::modules::credits::models::{
    CreateCreditRequest, CreditStatus, CreditSummary, TaxCredit, UpdateCreditRequest,
};
use crate::modules::credits::repositories::credit_repository::CreditFilter;

/// Service for tax-credit business logic
pub struct CreditService {
    repo: Arc<dyn Repository<TaxCredit, CreditFilter>>,
    clients: Arc<dyn Repository<Client, ClientFilter>>,
    audit: Arc<AuditService>,
    notifier: Arc<dyn Notifier>,
}

impl CreditService {
    pub fn new(
        repo: Arc<dyn Repository<TaxCredit, CreditFilter>>,
        clients: Arc<dyn Repository<Client, ClientFilter>>,
        audit: Arc<AuditService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repo,
            clients,
            audit,
            notifier,
        }
    }

    /// Create a credit; the referenced client must exist, and its name and
    /// CNPJ are copied onto the record.
    pub async fn create_credit(
        &self,
        request: CreateCreditRequest,
        actor: &Actor,
    ) -> Result<TaxCredit> {
        let client = self
            .clients
            .find_by_id(&request.client_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cliente {}", request.client_id)))?;

        let credit = TaxCredit::new(request, &client)?;
        let created = self.repo.create(credit).await?;

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Create,
                ResourceType::TaxCredit,
                &created.id,
                &created.client_name,
                format!(
                    "Crédito {} de {} cadastrado",
                    created.credit_type,
                    format_brl(created.credit_amount)
                ),
            ))
            .await?;
        self.notifier.success(&format!(
            "Crédito tributário cadastrado para {}: {}",
            created.client_name,
            format_brl(created.credit_amount)
        ));

        Ok(created)
    }

    pub async fn get_credit(&self, id: &str) -> Result<TaxCredit> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Crédito {}", id)))
    }

    pub async fn list_credits(
        &self,
        filter: &CreditFilter,
        page: u32,
        page_size: u32,
    ) -> Result<Page<TaxCredit>> {
        let credits = self.repo.list(filter).await?;
        paginate(credits, page, page_size)
    }

    pub async fn update_credit(
        &self,
        id: &str,
        request: UpdateCreditRequest,
        actor: &Actor,
    ) -> Result<TaxCredit> {
        let mut credit = self.get_credit(id).await?;
        credit.apply_update(request)?;
        let updated = self.repo.update(credit).await?;

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Update,
                ResourceType::TaxCredit,
                &updated.id,
                &updated.client_name,
                "Dados do crédito atualizados",
            ))
            .await?;

        Ok(updated)
    }

    /// Soft removal: the id simply disappears from the in-memory list.
    pub async fn delete_credit(&self, id: &str, actor: &Actor) -> Result<()> {
        let credit = self.get_credit(id).await?;
        self.repo.delete(id).await?;

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Delete,
                ResourceType::TaxCredit,
                &credit.id,
                &credit.client_name,
                format!("Crédito de {} removido", format_brl(credit.credit_amount)),
            ))
            .await?;
        self.notifier.success(&format!(
            "Crédito de {} removido",
            format_brl(credit.credit_amount)
        ));

        Ok(())
    }

    /// Direct status assignment. Any status may be set to any other; the
    /// transition is captured on the audit trail rather than guarded.
    pub async fn change_status(
        &self,
        id: &str,
        new_status: CreditStatus,
        actor: &Actor,
    ) -> Result<TaxCredit> {
        let mut credit = self.get_credit(id).await?;
        let previous = credit.set_status(new_status);
        let updated = self.repo.update(credit).await?;

        self.audit
            .record(
                AuditEvent::new(
                    actor,
                    AuditAction::StatusChange,
                    ResourceType::TaxCredit,
                    &updated.id,
                    &updated.client_name,
                    format!("Status alterado de {} para {}", previous, new_status),
                )
                .with_status_change(previous, new_status),
            )
            .await?;
        self.notifier.success(&format!(
            "Status do crédito de {} alterado de {} para {}",
            updated.client_name, previous, new_status
        ));

        Ok(updated)
    }

    /// Dashboard counters over the whole collection.
    pub async fn summary(&self) -> Result<CreditSummary> {
        let credits = self.repo.list(&CreditFilter::default()).await?;
        Ok(CreditSummary::from_credits(&credits))
    }

    /// Counters restricted to credits whose assessment period intersects
    /// `[start, end]`.
    pub async fn summary_for_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<CreditSummary> {
        let credits = self.repo.list(&CreditFilter::default()).await?;
        let in_period = credits
            .iter()
            .filter(|credit| credit.period_start <= end && credit.period_end >= start);

        Ok(CreditSummary::from_credits(in_period))
    }
}
