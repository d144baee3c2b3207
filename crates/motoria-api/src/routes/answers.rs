use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use motoria_core::models::answer::AnswerSummary;
use motoria_scoring::{answers, catalog};

use crate::error::ApiError;
use crate::state::AppState;

use super::{load_session, update_session};

#[derive(Deserialize)]
pub struct SubmitAnswersRequest {
    pub selected_answer_ids: Vec<i64>,
    pub height: f64,
    pub weight: f64,
}

/// Submit the questionnaire: aggregate the selected catalog answers, merge
/// them onto the session and mark it complete. One-shot — a second
/// submission answers 409.
pub async fn submit_answers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Result<Json<AnswerSummary>, ApiError> {
    // Early guard so a re-submission reads as "already submitted" even when
    // its answer selection is bogus; apply_answers re-checks under CAS.
    let (session, _) = load_session(&state, id).await?;
    if session.answers_submitted() {
        return Err(ApiError::Conflict(
            "test result already submitted".to_string(),
        ));
    }

    let selected = catalog::answers_by_ids(&req.selected_answer_ids);
    let summary = answers::aggregate(&selected)?;

    update_session(&state, id, |session| {
        session
            .apply_answers(summary.clone(), req.height, req.weight)
            .map_err(ApiError::from)
    })
    .await?;

    info!(
        session_id = %id,
        answers = selected.len(),
        symptoms_points = summary.symptoms_points,
        "questionnaire submitted"
    );

    Ok(Json(summary))
}
