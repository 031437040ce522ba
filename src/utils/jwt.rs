// src/utils/jwt.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError};

/// JWT Claims structure, as minted by the identity provider.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// Subject - the signed-in student's email.
    pub sub: String,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
}

/// Request-scoped caller identity.
/// `email` is `None` when the request carried no valid token.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub email: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }

    /// The caller's email, or `Unauthorized`.
    pub fn require_email(&self) -> Result<&str, AppError> {
        self.email
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))
    }
}

/// Signs a session token for the given email.
///
/// This service only verifies tokens. The signer is public for whatever
/// issues sessions with the shared `JWT_SECRET` (the identity provider side,
/// seeding scripts, integration tests).
pub fn sign_jwt(email: &str, secret: &str, expiration_seconds: u64) -> Result<String, AppError> {
    let expiration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .as_secs() as usize
        + expiration_seconds as usize;

    let claims = Claims {
        sub: email.to_owned(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Verifies and decodes a JWT string.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

    Ok(token_data.claims)
}

/// Axum Middleware: Session resolution.
///
/// Reads the 'Authorization: Bearer <token>' header and injects a `Session`
/// into the request extensions. Requests without a valid token still pass
/// through, with an anonymous session; the handlers decide what that means.
pub async fn session_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let session = match token {
        Some(token) => match verify_jwt(token, &config.jwt_secret) {
            Ok(claims) => Session::for_email(claims.sub),
            Err(_) => {
                tracing::debug!("Rejected bearer token");
                Session::anonymous()
            }
        },
        None => Session::anonymous(),
    };

    req.extensions_mut().insert(session);
    next.run(req).await
}
