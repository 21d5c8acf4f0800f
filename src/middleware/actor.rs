use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// Fallback identity when the frontend sends no user headers.
pub const SYSTEM_ACTOR: &str = "sistema";

/// Identity attributed to mutating operations on the audit trail.
///
/// Populated from the `X-User` / `X-User-Role` headers sent by the back-office
/// frontend. Authentication itself happens upstream; this extractor only
/// carries the identity through to the audit records.
#[derive(Debug, Clone)]
pub struct Actor {
    pub name: String,
    pub role: String,
    pub ip: Option<String>,
}

impl Actor {
    pub fn system() -> Self {
        Self {
            name: SYSTEM_ACTOR.to_string(),
            role: SYSTEM_ACTOR.to_string(),
            ip: None,
        }
    }
}

impl FromRequest for Actor {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        ready(Ok(Actor {
            name: header("X-User").unwrap_or_else(|| SYSTEM_ACTOR.to_string()),
            role: header("X-User-Role").unwrap_or_else(|| SYSTEM_ACTOR.to_string()),
            ip: req.peer_addr().map(|addr| addr.ip().to_string()),
        }))
    }
}
