// Client entity: the companies whose tax credits the back office recovers.
//
// The CNPJ is stored digit-normalized and rendered in the standard
// `00.000.000/0000-00` shape on the way out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Client lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    #[serde(rename = "ativo")]
    Ativo,

    #[serde(rename = "inativo")]
    Inativo,

    #[serde(rename = "pendente")]
    Pendente,
}

impl Default for ClientStatus {
    fn default() -> Self {
        ClientStatus::Ativo
    }
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientStatus::Ativo => write!(f, "ativo"),
            ClientStatus::Inativo => write!(f, "inativo"),
            ClientStatus::Pendente => write!(f, "pendente"),
        }
    }
}

impl std::str::FromStr for ClientStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ativo" => Ok(ClientStatus::Ativo),
            "inativo" => Ok(ClientStatus::Inativo),
            "pendente" => Ok(ClientStatus::Pendente),
            _ => Err(format!("Invalid client status: {}", s)),
        }
    }
}

/// Public-sector or private-sector entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientType {
    #[serde(rename = "publico")]
    Publico,

    #[serde(rename = "privado")]
    Privado,
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientType::Publico => write!(f, "publico"),
            ClientType::Privado => write!(f, "privado"),
        }
    }
}

/// Strips punctuation and validates the 14-digit CNPJ shape.
pub fn normalize_cnpj(input: &str) -> Result<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 14 {
        return Err(AppError::validation(format!(
            "CNPJ deve conter 14 dígitos: '{}'",
            input
        )));
    }

    Ok(digits)
}

/// Renders normalized CNPJ digits as `00.000.000/0000-00`.
pub fn format_cnpj(digits: &str) -> String {
    if digits.len() != 14 {
        return digits.to_string();
    }

    format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    )
}

/// Serde helper so responses always carry the formatted CNPJ.
pub fn serialize_cnpj<S>(digits: &str, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_cnpj(digits))
}

/// A client company
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    pub id: String,
    pub name: String,

    /// CNPJ, stored as 14 digits
    #[serde(serialize_with = "serialize_cnpj")]
    pub document: String,

    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: ClientStatus,
    pub client_type: ClientType,
    pub segment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for POST /clients
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub document: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub status: ClientStatus,
    pub client_type: ClientType,
    pub segment: Option<String>,
}

/// Payload for PUT /clients/{id}; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub document: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<ClientStatus>,
    pub client_type: Option<ClientType>,
    pub segment: Option<String>,
}

impl Client {
    /// Create a new client with validation
    pub fn new(request: CreateClientRequest) -> Result<Self> {
        let name = Self::validate_name(&request.name)?;
        let document = normalize_cnpj(&request.document)?;
        let email = Self::validate_email(request.email)?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            document,
            email,
            phone: request.phone,
            status: request.status,
            client_type: request.client_type,
            segment: request.segment,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, revalidating the touched fields.
    pub fn apply_update(&mut self, request: UpdateClientRequest) -> Result<()> {
        if let Some(name) = request.name {
            self.name = Self::validate_name(&name)?;
        }
        if let Some(document) = request.document {
            self.document = normalize_cnpj(&document)?;
        }
        if let Some(email) = request.email {
            self.email = Self::validate_email(Some(email))?;
        }
        if let Some(phone) = request.phone {
            self.phone = Some(phone);
        }
        if let Some(status) = request.status {
            self.status = status;
        }
        if let Some(client_type) = request.client_type {
            self.client_type = client_type;
        }
        if let Some(segment) = request.segment {
            self.segment = Some(segment);
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    fn validate_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Nome do cliente é obrigatório"));
        }

        Ok(trimmed.to_string())
    }

    fn validate_email(email: Option<String>) -> Result<Option<String>> {
        match email {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                if !trimmed.contains('@') {
                    return Err(AppError::validation(format!(
                        "E-mail inválido: '{}'",
                        trimmed
                    )));
                }
                Ok(Some(trimmed.to_string()))
            }
            None => Ok(None),
        }
    }
}
