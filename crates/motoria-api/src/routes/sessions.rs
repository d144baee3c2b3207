use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use motoria_core::models::session::{TestSession, TestStatus};
use motoria_core::store_keys;
use motoria_storage::objects;
use motoria_storage::state as store;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::{MessageResponse, current_user, load_session};

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub patient_name: String,
    pub patient_birth_date: jiff::civil::Date,
    pub patient_phone_number: String,
}

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub patient_name: String,
    pub created_at: jiff::Timestamp,
    pub status: TestStatus,
}

/// Doctor-facing: open a new test attempt for a patient.
pub async fn create_session(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, ApiError> {
    let user = current_user(&state, &auth).await?;

    let session = TestSession::create(
        user.id,
        req.patient_name,
        req.patient_birth_date,
        req.patient_phone_number,
    );
    let key = store_keys::session(session.id);
    store::save_state(&state.s3, &state.bucket, &key, &session).await?;

    info!(session_id = %session.id, doctor = %user.username, "created test session");

    Ok(Json(CreateSessionResponse {
        session_id: session.id,
    }))
}

/// Doctor-facing: every session owned by the current user.
/// Answers 404 when the doctor has none.
pub async fn list_sessions(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let user = current_user(&state, &auth).await?;

    let keys =
        objects::list_objects(&state.s3, &state.bucket, store_keys::SESSIONS_PREFIX).await?;

    let mut sessions = Vec::new();
    for key in &keys {
        let output = objects::get_object(&state.s3, &state.bucket, key).await?;
        let session: TestSession = serde_json::from_slice(&output.body)?;
        if session.user_id == user.id {
            sessions.push(SessionSummary {
                id: session.id,
                patient_name: session.patient_name,
                created_at: session.created_at,
                status: session.status,
            });
        }
    }

    if sessions.is_empty() {
        return Err(ApiError::NotFound(
            "no test sessions found for the current user".to_string(),
        ));
    }

    Ok(Json(sessions))
}

/// Doctor-facing: the full record of an owned session, or a minimal
/// indicator while the test is still in progress.
pub async fn get_session_for_doctor(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let user = current_user(&state, &auth).await?;
    let (session, _) = load_session(&state, id).await?;

    // Not owned reads the same as not existing.
    if session.user_id != user.id {
        return Err(ApiError::NotFound(format!("test session not found: {id}")));
    }

    if session.status == TestStatus::Created {
        return Ok(Json(MessageResponse {
            message: "test is not complete".to_string(),
        })
        .into_response());
    }

    Ok(Json(session).into_response())
}

/// Patient-facing: a minimal indicator while the session is in progress,
/// the patient projection once complete.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let (session, _) = load_session(&state, id).await?;

    match session.status {
        TestStatus::Created => Ok(Json(MessageResponse {
            message: "created".to_string(),
        })
        .into_response()),
        TestStatus::Complete => Ok(Json(session.patient_view()).into_response()),
    }
}
