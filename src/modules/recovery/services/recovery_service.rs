use std::sync::Arc;

use crate::core::currency::{format_brl, format_percent_br};
use crate::core::error::{AppError, Result};
use crate::core::listing::{paginate, Page};
use crate::core::notify::Notifier;
use crate::core::traits::repository::Repository;
use crate::middleware::actor::Actor;
use crate::modules::audit::models::{AuditAction, AuditEvent, ResourceType};
use crate::modules::audit::services::audit_service::AuditService;
use crate::modules::clients::models::Client;
use crate::modules::clients::repositories::client_repository::ClientFilter;
use crate::modules::recovery::models::{
    CreateRecoveryRequest, RecoveryProcess, RecoveryProcessResponse, RecoveryProgressRequest,
    RecoverySummary, UpdateRecoveryRequest,
};
use crate::modules::recovery::repositories::recovery_repository::RecoveryFilter;

/// Service for recovery-process business logic
pub struct RecoveryService {
    repo: Arc<dyn Repository<RecoveryProcess, RecoveryFilter>>,
    clients: Arc<dyn Repository<Client, ClientFilter>>,
    audit: Arc<AuditService>,
    notifier: Arc<dyn Notifier>,
}

impl RecoveryService {
    pub fn new(
        repo: Arc<dyn Repository<RecoveryProcess, RecoveryFilter>>,
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

    pub async fn create_process(
        &self,
        request: CreateRecoveryRequest,
        actor: &Actor,
    ) -> Result<RecoveryProcessResponse> {
        let client = self
            .clients
            .find_by_id(&request.client_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cliente {}", request.client_id)))?;

        let process = RecoveryProcess::new(request, &client)?;
        let created = self.repo.create(process).await?;

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Create,
                ResourceType::RecoveryProcess,
                &created.id,
                &created.client_name,
                format!(
                    "Processo {} de {} aberto",
                    created.process_type,
                    format_brl(created.original_amount)
                ),
            ))
            .await?;
        self.notifier.success(&format!(
            "Processo de recuperação aberto para {}",
            created.client_name
        ));

        Ok(created.into())
    }

    pub async fn get_process(&self, id: &str) -> Result<RecoveryProcessResponse> {
        Ok(self.fetch(id).await?.into())
    }

    pub async fn list_processes(
        &self,
        filter: &RecoveryFilter,
        page: u32,
        page_size: u32,
    ) -> Result<Page<RecoveryProcessResponse>> {
        let processes = self.repo.list(filter).await?;
        let responses = processes
            .into_iter()
            .map(RecoveryProcessResponse::from)
            .collect();
        paginate(responses, page, page_size)
    }

    pub async fn update_process(
        &self,
        id: &str,
        request: UpdateRecoveryRequest,
        actor: &Actor,
    ) -> Result<RecoveryProcessResponse> {
        let mut process = self.fetch(id).await?;
        process.apply_update(request)?;
        let updated = self.repo.update(process).await?;

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Update,
                ResourceType::RecoveryProcess,
                &updated.id,
                &updated.client_name,
                "Dados do processo atualizados",
            ))
            .await?;

        Ok(updated.into())
    }

    /// Soft removal: the id simply disappears from the in-memory list.
    pub async fn delete_process(&self, id: &str, actor: &Actor) -> Result<()> {
        let process = self.fetch(id).await?;
        self.repo.delete(id).await?;

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Delete,
                ResourceType::RecoveryProcess,
                &process.id,
                &process.client_name,
                "Processo removido",
            ))
            .await?;

        Ok(())
    }

    /// Registers recovered value and, when provided, a new status.
    pub async fn register_progress(
        &self,
        id: &str,
        request: RecoveryProgressRequest,
        actor: &Actor,
    ) -> Result<RecoveryProcessResponse> {
        let mut process = self.fetch(id).await?;
        let new_status = request.status;
        let previous = process.apply_progress(request)?;
        let updated = self.repo.update(process).await?;

        let mut event = AuditEvent::new(
            actor,
            AuditAction::Update,
            ResourceType::RecoveryProcess,
            &updated.id,
            &updated.client_name,
            format!(
                "Recuperação registrada: {} de {} ({})",
                format_brl(updated.recovered_amount),
                format_brl(updated.original_amount),
                format_percent_br(updated.recovery_percent())
            ),
        );
        if let Some(status) = new_status {
            event = event.with_status_change(previous, status);
        }
        self.audit.record(event).await?;

        self.notifier.success(&format!(
            "Progresso registrado para {}: {} recuperado",
            updated.client_name,
            format_percent_br(updated.recovery_percent())
        ));

        Ok(updated.into())
    }

    /// Dashboard counters over the whole collection.
    pub async fn summary(&self) -> Result<RecoverySummary> {
        let processes = self.repo.list(&RecoveryFilter::default()).await?;
        Ok(RecoverySummary::from_processes(&processes))
    }

    async fn fetch(&self, id: &str) -> Result<RecoveryProcess> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Processo {}", id)))
    }
}
