use std::sync::Arc;

use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::core::listing::{paginate, Page};
use crate::core::notify::Notifier;
use crate::core::session::ActiveClientSession;
use crate::core::traits::repository::Repository;
use crate::middleware::actor::Actor;
use crate::modules::audit::models::{AuditAction, AuditEvent, ResourceType};
use crate::modules::audit::services::audit_service::AuditService;
use crate::modules::clients::models::{Client, CreateClientRequest, UpdateClientRequest};
use crate::modules::clients::repositories::client_repository::ClientFilter;

/// Current active-client selection, as returned by GET /session
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub active_client_id: Option<String>,
    pub client_name: Option<String>,
}

/// Service for client business logic
pub struct ClientService {
    repo: Arc<dyn Repository<Client, ClientFilter>>,
    session: Arc<ActiveClientSession>,
    audit: Arc<AuditService>,
    notifier: Arc<dyn Notifier>,
}

impl ClientService {
    pub fn new(
        repo: Arc<dyn Repository<Client, ClientFilter>>,
        session: Arc<ActiveClientSession>,
        audit: Arc<AuditService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repo,
            session,
            audit,
            notifier,
        }
    }

    pub async fn create_client(
        &self,
        request: CreateClientRequest,
        actor: &Actor,
    ) -> Result<Client> {
        let client = Client::new(request)?;
        let created = self.repo.create(client).await?;

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Create,
                ResourceType::Client,
                &created.id,
                &created.name,
                "Cliente cadastrado",
            ))
            .await?;
        self.notifier
            .success(&format!("Cliente cadastrado: {}", created.name));

        Ok(created)
    }

    pub async fn get_client(&self, id: &str) -> Result<Client> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cliente {}", id)))
    }

    pub async fn list_clients(
        &self,
        filter: &ClientFilter,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Client>> {
        let clients = self.repo.list(filter).await?;
        paginate(clients, page, page_size)
    }

    pub async fn update_client(
        &self,
        id: &str,
        request: UpdateClientRequest,
        actor: &Actor,
    ) -> Result<Client> {
        let mut client = self.get_client(id).await?;
        client.apply_update(request)?;
        let updated = self.repo.update(client).await?;

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Update,
                ResourceType::Client,
                &updated.id,
                &updated.name,
                "Dados do cliente atualizados",
            ))
            .await?;
        self.notifier
            .success(&format!("Cliente atualizado: {}", updated.name));

        Ok(updated)
    }

    /// Soft removal: the id simply disappears from the in-memory list.
    pub async fn delete_client(&self, id: &str, actor: &Actor) -> Result<()> {
        let client = self.get_client(id).await?;
        self.repo.delete(id).await?;

        // Clear a dangling active-client selection
        if self.session.selected().await.as_deref() == Some(id) {
            self.session.select(None).await;
        }

        self.audit
            .record(AuditEvent::new(
                actor,
                AuditAction::Delete,
                ResourceType::Client,
                &client.id,
                &client.name,
                "Cliente removido",
            ))
            .await?;
        self.notifier
            .success(&format!("Cliente removido: {}", client.name));

        Ok(())
    }

    /// Sets (or clears) the back office's active client.
    pub async fn select_active_client(
        &self,
        client_id: Option<String>,
    ) -> Result<SessionView> {
        let client = match &client_id {
            Some(id) => Some(self.get_client(id).await?),
            None => None,
        };

        self.session.select(client_id.clone()).await;

        match &client {
            Some(client) => self
                .notifier
                .success(&format!("Cliente ativo selecionado: {}", client.name)),
            None => self.notifier.success("Seleção de cliente ativo removida"),
        }

        Ok(SessionView {
            active_client_id: client_id,
            client_name: client.map(|c| c.name),
        })
    }

    /// Current selection; a client deleted after being selected shows as empty.
    pub async fn current_session(&self) -> Result<SessionView> {
        let active_client_id = self.session.selected().await;
        let client_name = match &active_client_id {
            Some(id) => self.repo.find_by_id(id).await?.map(|c| c.name),
            None => None,
        };

        Ok(SessionView {
            active_client_id,
            client_name,
        })
    }
}
