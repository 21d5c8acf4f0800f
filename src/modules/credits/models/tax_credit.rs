// Tax credit: a recoverable amount identified for a client in a given
// assessment period. The client name and CNPJ are denormalized copies taken
// at creation time.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::dates::parse_flexible;
use crate::core::{AppError, Result};
use crate::modules::clients::models::{serialize_cnpj, Client};

/// Tax category the credit originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditType {
    #[serde(rename = "pis_cofins")]
    PisCofins,

    #[serde(rename = "icms")]
    Icms,

    #[serde(rename = "ipi")]
    Ipi,

    #[serde(rename = "irrf")]
    Irrf,

    #[serde(rename = "csll")]
    Csll,

    #[serde(rename = "inss")]
    Inss,

    #[serde(rename = "outros")]
    Outros,
}

impl std::fmt::Display for CreditType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditType::PisCofins => write!(f, "PIS/COFINS"),
            CreditType::Icms => write!(f, "ICMS"),
            CreditType::Ipi => write!(f, "IPI"),
            CreditType::Irrf => write!(f, "IRRF"),
            CreditType::Csll => write!(f, "CSLL"),
            CreditType::Inss => write!(f, "INSS"),
            CreditType::Outros => write!(f, "Outros"),
        }
    }
}

/// Analysis lifecycle of a credit.
///
/// No transition is enforced: any status may be set to any other, as the
/// back office allows analysts to reclassify freely. Changes are captured on
/// the audit trail instead of being guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditStatus {
    #[serde(rename = "pending")]
    Pending,

    #[serde(rename = "analyzing")]
    Analyzing,

    #[serde(rename = "approved")]
    Approved,

    #[serde(rename = "rejected")]
    Rejected,

    #[serde(rename = "recovered")]
    Recovered,
}

impl Default for CreditStatus {
    fn default() -> Self {
        CreditStatus::Pending
    }
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditStatus::Pending => write!(f, "pending"),
            CreditStatus::Analyzing => write!(f, "analyzing"),
            CreditStatus::Approved => write!(f, "approved"),
            CreditStatus::Rejected => write!(f, "rejected"),
            CreditStatus::Recovered => write!(f, "recovered"),
        }
    }
}

impl std::str::FromStr for CreditStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CreditStatus::Pending),
            "analyzing" => Ok(CreditStatus::Analyzing),
            "approved" => Ok(CreditStatus::Approved),
            "rejected" => Ok(CreditStatus::Rejected),
            "recovered" => Ok(CreditStatus::Recovered),
            _ => Err(format!("Invalid credit status: {}", s)),
        }
    }
}

/// A recoverable tax credit
#[derive(Debug, Clone, Serialize)]
pub struct TaxCredit {
    pub id: String,
    pub client_id: String,
    pub client_name: String,

    #[serde(serialize_with = "serialize_cnpj")]
    pub document_number: String,

    pub credit_type: CreditType,
    pub status: CreditStatus,

    /// Current recoverable value
    pub credit_amount: Decimal,

    /// Nominal value at origination, before monetary correction
    pub original_amount: Decimal,

    #[serde(with = "crate::core::dates::br_date")]
    pub period_start: NaiveDate,

    #[serde(with = "crate::core::dates::br_date")]
    pub period_end: NaiveDate,

    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for POST /credits; dates accept `DD/MM/YYYY` or ISO
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCreditRequest {
    pub client_id: String,
    pub credit_type: CreditType,
    pub credit_amount: Decimal,
    pub original_amount: Decimal,
    pub period_start: String,
    pub period_end: String,
    pub notes: Option<String>,
}

/// Payload for PUT /credits/{id}; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCreditRequest {
    pub credit_type: Option<CreditType>,
    pub credit_amount: Option<Decimal>,
    pub original_amount: Option<Decimal>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub notes: Option<String>,
}

impl TaxCredit {
    /// Create a new credit with validation, copying the client's name and
    /// CNPJ onto the record.
    pub fn new(request: CreateCreditRequest, client: &Client) -> Result<Self> {
        Self::validate_amount("Valor do crédito", request.credit_amount)?;
        Self::validate_amount("Valor original", request.original_amount)?;

        let period_start = parse_flexible(&request.period_start)?;
        let period_end = parse_flexible(&request.period_end)?;
        Self::validate_period(period_start, period_end)?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            document_number: client.document.clone(),
            credit_type: request.credit_type,
            status: CreditStatus::default(),
            credit_amount: request.credit_amount,
            original_amount: request.original_amount,
            period_start,
            period_end,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, revalidating the touched fields.
    pub fn apply_update(&mut self, request: UpdateCreditRequest) -> Result<()> {
        if let Some(credit_type) = request.credit_type {
            self.credit_type = credit_type;
        }
        if let Some(amount) = request.credit_amount {
            Self::validate_amount("Valor do crédito", amount)?;
            self.credit_amount = amount;
        }
        if let Some(amount) = request.original_amount {
            Self::validate_amount("Valor original", amount)?;
            self.original_amount = amount;
        }
        if let Some(raw) = request.period_start {
            self.period_start = parse_flexible(&raw)?;
        }
        if let Some(raw) = request.period_end {
            self.period_end = parse_flexible(&raw)?;
        }
        Self::validate_period(self.period_start, self.period_end)?;

        if let Some(notes) = request.notes {
            self.notes = Some(notes);
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    /// Direct status assignment; returns the previous status.
    pub fn set_status(&mut self, new_status: CreditStatus) -> CreditStatus {
        let previous = self.status;
        self.status = new_status;
        self.updated_at = Utc::now();
        previous
    }

    fn validate_amount(label: &str, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "{} deve ser maior que zero",
                label
            )));
        }

        Ok(())
    }

    fn validate_period(start: NaiveDate, end: NaiveDate) -> Result<()> {
        if start > end {
            return Err(AppError::validation(
                "Período inválido: data inicial posterior à final",
            ));
        }

        Ok(())
    }
}

/// Dashboard counters derived from a credit collection.
///
/// Built in a single pass; an empty collection yields all zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditSummary {
    pub total: usize,
    pub pending: usize,
    pub analyzing: usize,
    pub approved: usize,
    pub rejected: usize,
    pub recovered: usize,

    /// Sum of credit_amount where status = approved
    pub approved_amount: Decimal,

    /// Sum of credit_amount over the whole collection
    pub total_amount: Decimal,
}

impl CreditSummary {
    pub fn zero() -> Self {
        Self {
            total: 0,
            pending: 0,
            analyzing: 0,
            approved: 0,
            rejected: 0,
            recovered: 0,
            approved_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
        }
    }

    pub fn from_credits<'a, I>(credits: I) -> Self
    where
        I: IntoIterator<Item = &'a TaxCredit>,
    {
        let mut summary = Self::zero();

        for credit in credits {
            summary.total += 1;
            match credit.status {
                CreditStatus::Pending => summary.pending += 1,
                CreditStatus::Analyzing => summary.analyzing += 1,
                CreditStatus::Approved => summary.approved += 1,
                CreditStatus::Rejected => summary.rejected += 1,
                CreditStatus::Recovered => summary.recovered += 1,
            }

            summary.total_amount += credit.credit_amount;
            if credit.status == CreditStatus::Approved {
                summary.approved_amount += credit.credit_amount;
            }
        }

        summary
    }

    /// Sum of the per-status counters; always equals `total`.
    pub fn status_count_total(&self) -> usize {
        self.pending + self.analyzing + self.approved + self.rejected + self.recovered
    }
}
