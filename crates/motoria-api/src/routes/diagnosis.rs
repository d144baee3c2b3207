use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::{MessageResponse, current_user, update_session};

#[derive(Deserialize)]
pub struct DiagnosisRequest {
    pub diagnosis: String,
}

#[derive(Deserialize)]
pub struct DegreeRequest {
    pub degree: String,
}

/// Unconditional diagnosis write, at any point in the session lifecycle.
pub async fn set_diagnosis(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<DiagnosisRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    current_user(&state, &auth).await?;

    update_session(&state, id, |session| {
        session.diagnosis = Some(req.diagnosis.clone());
        Ok(())
    })
    .await?;

    info!(session_id = %id, "diagnosis updated");

    Ok(Json(MessageResponse {
        message: "diagnosis updated successfully".to_string(),
    }))
}

/// Unconditional degree write, same contract as the diagnosis.
pub async fn set_degree(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<DegreeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    current_user(&state, &auth).await?;

    update_session(&state, id, |session| {
        session.degree = Some(req.degree.clone());
        Ok(())
    })
    .await?;

    info!(session_id = %id, "degree updated");

    Ok(Json(MessageResponse {
        message: "degree updated successfully".to_string(),
    }))
}
