//! Composition root: builds the in-memory stores, wires the services and
//! registers every module's routes.
//!
//! Used by `main` and by the integration tests, so both run the exact same
//! wiring.

use std::sync::Arc;

use actix_web::web;

use crate::config::ListingConfig;
use crate::core::notify::{LogNotifier, Notifier};
use crate::core::session::ActiveClientSession;
use crate::core::traits::repository::Repository;
use crate::modules::audit::controllers::audit_controller;
use crate::modules::audit::repositories::audit_repository::InMemoryAuditRepository;
use crate::modules::audit::services::audit_service::AuditService;
use crate::modules::clients::controllers::client_controller;
use crate::modules::clients::models::Client;
use crate::modules::clients::repositories::client_repository::{
    ClientFilter, InMemoryClientRepository,
};
use crate::modules::clients::services::client_service::ClientService;
use crate::modules::correction::controllers::correction_controller;
use crate::modules::correction::models::SelicSeries;
use crate::modules::correction::repositories::correction_repository::{
    CorrectionRepository, InMemoryCorrectionRepository,
};
use crate::modules::correction::repositories::selic_repository::InMemorySelicRepository;
use crate::modules::correction::services::correction_service::CorrectionService;
use crate::modules::credits::controllers::credit_controller;
use crate::modules::credits::models::TaxCredit;
use crate::modules::credits::repositories::credit_repository::{
    CreditFilter, InMemoryCreditRepository,
};
use crate::modules::credits::services::credit_service::CreditService;
use crate::modules::health::controllers::health_controller;
use crate::modules::recovery::controllers::recovery_controller;
use crate::modules::recovery::repositories::recovery_repository::InMemoryRecoveryRepository;
use crate::modules::recovery::services::recovery_service::RecoveryService;
use crate::modules::reports::controllers::report_controller;
use crate::modules::reports::services::report_service::ReportService;

/// Every wired service, ready to be handed to the HTTP layer
#[derive(Clone)]
pub struct Services {
    pub listing: ListingConfig,
    pub clients: Arc<ClientService>,
    pub credits: Arc<CreditService>,
    pub recovery: Arc<RecoveryService>,
    pub corrections: Arc<CorrectionService>,
    pub audit: Arc<AuditService>,
    pub reports: Arc<ReportService>,
}

impl Services {
    /// Wiring used by `main`: in-memory stores, the bundled rate series and
    /// log-backed notifications.
    pub fn in_memory(listing: ListingConfig) -> Self {
        Self::with_notifier(listing, Arc::new(LogNotifier))
    }

    /// Same wiring with a caller-chosen notifier; tests pass a recording one.
    pub fn with_notifier(listing: ListingConfig, notifier: Arc<dyn Notifier>) -> Self {
        let client_repo: Arc<dyn Repository<Client, ClientFilter>> =
            Arc::new(InMemoryClientRepository::new());
        let credit_repo: Arc<dyn Repository<TaxCredit, CreditFilter>> =
            Arc::new(InMemoryCreditRepository::new());
        let recovery_repo = Arc::new(InMemoryRecoveryRepository::new());
        let selic_repo = Arc::new(InMemorySelicRepository::with_series(SelicSeries::bundled()));
        let correction_repo: Arc<dyn CorrectionRepository> =
            Arc::new(InMemoryCorrectionRepository::new());
        let audit_repo = Arc::new(InMemoryAuditRepository::new());
        let session = Arc::new(ActiveClientSession::new());

        let audit = Arc::new(AuditService::new(audit_repo));
        let clients = Arc::new(ClientService::new(
            client_repo.clone(),
            session,
            audit.clone(),
            notifier.clone(),
        ));
        let credits = Arc::new(CreditService::new(
            credit_repo.clone(),
            client_repo.clone(),
            audit.clone(),
            notifier.clone(),
        ));
        let recovery = Arc::new(RecoveryService::new(
            recovery_repo.clone(),
            client_repo.clone(),
            audit.clone(),
            notifier.clone(),
        ));
        let corrections = Arc::new(CorrectionService::new(
            selic_repo,
            correction_repo.clone(),
            credit_repo.clone(),
            audit.clone(),
            notifier,
        ));
        let reports = Arc::new(ReportService::new(
            client_repo,
            credit_repo,
            recovery_repo,
            correction_repo,
        ));

        Self {
            listing,
            clients,
            credits,
            recovery,
            corrections,
            audit,
            reports,
        }
    }
}

/// Registers service data and every module's routes on an actix app.
pub fn configure_api(cfg: &mut web::ServiceConfig, services: &Services) {
    cfg.app_data(web::Data::new(services.listing))
        .app_data(web::Data::new(services.clients.clone()))
        .app_data(web::Data::new(services.credits.clone()))
        .app_data(web::Data::new(services.recovery.clone()))
        .app_data(web::Data::new(services.corrections.clone()))
        .app_data(web::Data::new(services.audit.clone()))
        .app_data(web::Data::new(services.reports.clone()));

    client_controller::configure(cfg);
    credit_controller::configure(cfg);
    recovery_controller::configure(cfg);
    correction_controller::configure(cfg);
    audit_controller::configure(cfg);
    report_controller::configure(cfg);
    health_controller::configure(cfg);
}
