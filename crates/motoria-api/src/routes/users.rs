use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use motoria_auth::{jwt, password};
use motoria_core::models::user::User;
use motoria_core::store_keys;
use motoria_storage::error::StorageError;
use motoria_storage::objects;
use motoria_storage::state as store;

use crate::error::ApiError;
use crate::state::AppState;

use super::MessageResponse;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Usernames become store keys, so the charset is restricted up front.
fn valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 64
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !valid_username(&req.username) {
        return Err(ApiError::BadRequest(
            "username must be 1-64 ascii letters, digits, '.', '_' or '-'".to_string(),
        ));
    }
    if req.password.is_empty() {
        return Err(ApiError::BadRequest("password must not be empty".to_string()));
    }

    let key = store_keys::user(&req.username);
    match objects::get_object(&state.s3, &state.bucket, &key).await {
        Ok(_) => {
            return Err(ApiError::BadRequest(
                "username already registered".to_string(),
            ));
        }
        Err(StorageError::NotFound { .. }) => {}
        Err(e) => return Err(e.into()),
    }

    let credentials = password::hash_password(&req.password);
    let user = User {
        id: Uuid::new_v4(),
        username: req.username,
        password_salt: credentials.salt,
        password_hash: credentials.hash,
        name: req.name,
        role: req.role,
        created_at: jiff::Timestamp::now(),
    };

    store::save_state(&state.s3, &state.bucket, &key, &user).await?;

    info!(username = %user.username, role = %user.role, "registered user");

    Ok(Json(MessageResponse {
        message: "user created successfully".to_string(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let key = store_keys::user(&req.username);
    let user: User = match store::load_state(&state.s3, &state.bucket, &key).await {
        Ok((user, _)) => user,
        // Indistinguishable from a wrong password on purpose.
        Err(StorageError::NotFound { .. }) => {
            return Err(ApiError::Unauthorized(
                "incorrect username or password".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    if !password::verify_password(&req.password, &user.password_salt, &user.password_hash)? {
        return Err(ApiError::Unauthorized(
            "incorrect username or password".to_string(),
        ));
    }

    let access_token = jwt::issue_access_token(
        state.jwt_secret.as_bytes(),
        &user.username,
        state.token_ttl_minutes,
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!(username = %user.username, "issued access token");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
