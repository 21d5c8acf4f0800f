// Recovery process: the administrative or judicial path through which an
// identified credit is actually recovered.
//
// `recovery_percent` is always derived from the recovered and original
// amounts; it is never stored, so the two can't drift apart.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::dates::parse_flexible;
use crate::core::{AppError, Result};
use crate::modules::clients::models::Client;
use crate::modules::credits::models::CreditType;

/// Which legal avenue the recovery follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessType {
    #[serde(rename = "administrativo")]
    Administrativo,

    #[serde(rename = "judicial")]
    Judicial,

    #[serde(rename = "per_dcomp")]
    PerDcomp,
}

impl std::fmt::Display for ProcessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessType::Administrativo => write!(f, "Administrativo"),
            ProcessType::Judicial => write!(f, "Judicial"),
            ProcessType::PerDcomp => write!(f, "PER/DCOMP"),
        }
    }
}

/// Progress of the recovery.
///
/// Like credit statuses, transitions are unrestricted and audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryStatus {
    #[serde(rename = "inicial")]
    Inicial,

    #[serde(rename = "em_andamento")]
    EmAndamento,

    #[serde(rename = "parcial")]
    Parcial,

    #[serde(rename = "concluido")]
    Concluido,
}

impl Default for RecoveryStatus {
    fn default() -> Self {
        RecoveryStatus::Inicial
    }
}

impl std::fmt::Display for RecoveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoveryStatus::Inicial => write!(f, "inicial"),
            RecoveryStatus::EmAndamento => write!(f, "em_andamento"),
            RecoveryStatus::Parcial => write!(f, "parcial"),
            RecoveryStatus::Concluido => write!(f, "concluido"),
        }
    }
}

/// A credit-recovery process
#[derive(Debug, Clone, Serialize)]
pub struct RecoveryProcess {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub credit_type: CreditType,
    pub process_type: ProcessType,
    pub original_amount: Decimal,
    pub recovered_amount: Decimal,
    pub status: RecoveryStatus,

    #[serde(with = "crate::core::dates::br_date")]
    pub started_at: NaiveDate,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for POST /recovery
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecoveryRequest {
    pub client_id: String,
    pub credit_type: CreditType,
    pub process_type: ProcessType,
    pub original_amount: Decimal,
    #[serde(default)]
    pub recovered_amount: Option<Decimal>,
    /// `DD/MM/YYYY` or ISO; defaults to today
    pub started_at: Option<String>,
}

/// Payload for PUT /recovery/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecoveryRequest {
    pub credit_type: Option<CreditType>,
    pub process_type: Option<ProcessType>,
    pub original_amount: Option<Decimal>,
}

/// Payload for POST /recovery/{id}/progress
#[derive(Debug, Clone, Deserialize)]
pub struct RecoveryProgressRequest {
    pub recovered_amount: Decimal,
    pub status: Option<RecoveryStatus>,
}

impl RecoveryProcess {
    pub fn new(request: CreateRecoveryRequest, client: &Client) -> Result<Self> {
        if request.original_amount <= Decimal::ZERO {
            return Err(AppError::validation("Valor original deve ser maior que zero"));
        }

        let recovered_amount = request.recovered_amount.unwrap_or(Decimal::ZERO);
        Self::validate_recovered(recovered_amount, request.original_amount)?;

        let started_at = match request.started_at.as_deref() {
            Some(raw) => parse_flexible(raw)?,
            None => Utc::now().date_naive(),
        };

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            credit_type: request.credit_type,
            process_type: request.process_type,
            original_amount: request.original_amount,
            recovered_amount,
            status: RecoveryStatus::default(),
            started_at,
            created_at: now,
            updated_at: now,
        })
    }

    /// Recovered share of the original amount, in percent.
    ///
    /// Derived on demand so it always agrees with the two amounts. Zero when
    /// the original amount is zero.
    pub fn recovery_percent(&self) -> Decimal {
        if self.original_amount.is_zero() {
            return Decimal::ZERO;
        }

        (self.recovered_amount / self.original_amount * Decimal::ONE_HUNDRED).round_dp(2)
    }

    pub fn apply_update(&mut self, request: UpdateRecoveryRequest) -> Result<()> {
        if let Some(credit_type) = request.credit_type {
            self.credit_type = credit_type;
        }
        if let Some(process_type) = request.process_type {
            self.process_type = process_type;
        }
        if let Some(amount) = request.original_amount {
            if amount <= Decimal::ZERO {
                return Err(AppError::validation(
                    "Valor original deve ser maior que zero",
                ));
            }
            Self::validate_recovered(self.recovered_amount, amount)?;
            self.original_amount = amount;
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    /// Registers recovered value; the status only changes when explicitly
    /// provided. Returns the previous status.
    pub fn apply_progress(
        &mut self,
        request: RecoveryProgressRequest,
    ) -> Result<RecoveryStatus> {
        Self::validate_recovered(request.recovered_amount, self.original_amount)?;

        let previous = self.status;
        self.recovered_amount = request.recovered_amount;
        if let Some(status) = request.status {
            self.status = status;
        }
        self.updated_at = Utc::now();

        Ok(previous)
    }

    fn validate_recovered(recovered: Decimal, original: Decimal) -> Result<()> {
        if recovered < Decimal::ZERO {
            return Err(AppError::validation(
                "Valor recuperado não pode ser negativo",
            ));
        }
        if recovered > original {
            return Err(AppError::validation(
                "Valor recuperado não pode exceder o valor original",
            ));
        }

        Ok(())
    }
}

/// Response shape carrying the derived percentage
#[derive(Debug, Clone, Serialize)]
pub struct RecoveryProcessResponse {
    #[serde(flatten)]
    pub process: RecoveryProcess,
    pub recovery_percent: Decimal,
}

impl From<RecoveryProcess> for RecoveryProcessResponse {
    fn from(process: RecoveryProcess) -> Self {
        let recovery_percent = process.recovery_percent();
        Self {
            process,
            recovery_percent,
        }
    }
}

/// Dashboard counters derived from the process collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecoverySummary {
    pub total: usize,
    pub inicial: usize,
    pub em_andamento: usize,
    pub parcial: usize,
    pub concluido: usize,
    pub original_amount: Decimal,
    pub recovered_amount: Decimal,

    /// Recovered share across all processes, in percent
    pub overall_percent: Decimal,
}

impl RecoverySummary {
    pub fn zero() -> Self {
        Self {
            total: 0,
            inicial: 0,
            em_andamento: 0,
            parcial: 0,
            concluido: 0,
            original_amount: Decimal::ZERO,
            recovered_amount: Decimal::ZERO,
            overall_percent: Decimal::ZERO,
        }
    }

    pub fn from_processes<'a, I>(processes: I) -> Self
    where
        I: IntoIterator<Item = &'a RecoveryProcess>,
    {
        let mut summary = Self::zero();

        for process in processes {
            summary.total += 1;
            match process.status {
                RecoveryStatus::Inicial => summary.inicial += 1,
                RecoveryStatus::EmAndamento => summary.em_andamento += 1,
                RecoveryStatus::Parcial => summary.parcial += 1,
                RecoveryStatus::Concluido => summary.concluido += 1,
            }

            summary.original_amount += process.original_amount;
            summary.recovered_amount += process.recovered_amount;
        }

        if !summary.original_amount.is_zero() {
            summary.overall_percent = (summary.recovered_amount / summary.original_amount
                * Decimal::ONE_HUNDRED)
                .round_dp(2);
        }

        summary
    }

    pub fn status_count_total(&self) -> usize {
        self.inicial + self.em_andamento + self.parcial + self.concluido
    }
}
