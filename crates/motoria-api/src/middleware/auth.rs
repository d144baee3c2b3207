use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use motoria_auth::jwt;

use crate::state::AppState;

/// Bearer-token validation middleware for the doctor-facing routes.
///
/// Extracts the `Authorization: Bearer <token>` header, validates the HS256
/// signature and expiry, and inserts [`AuthUser`] into request extensions
/// for handlers to resolve against the user store.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let username = {
        let auth_header = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let claims = jwt::verify_access_token(state.jwt_secret.as_bytes(), token)
            .map_err(|e| {
                tracing::debug!("rejected bearer token: {e}");
                StatusCode::UNAUTHORIZED
            })?;

        claims.sub
    };

    req.extensions_mut().insert(AuthUser { username });

    Ok(next.run(req).await)
}

/// Authenticated account extracted from the token claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}
