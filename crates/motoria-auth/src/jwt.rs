use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Claims carried by a Motoria access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Username of the authenticated account.
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
}

/// Issue an HS256 access token for a username.
pub fn issue_access_token(
    secret: &[u8],
    username: &str,
    ttl_minutes: u64,
) -> Result<String, AuthError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let claims = AccessClaims {
        sub: username.to_string(),
        iat: now,
        exp: now + ttl_minutes * 60,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )?;
    Ok(token)
}

/// Validate an access token and return its claims.
///
/// Expiry is validated; an expired token is reported distinctly so the API
/// can tell clients to re-authenticate rather than reject outright.
pub fn verify_access_token(secret: &[u8], token: &str) -> Result<AccessClaims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<AccessClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken(e.to_string()),
        })?;

    Ok(token_data.claims)
}
