use std::fmt::Display;
use std::str::FromStr;

use axum::Json;
use axum::extract::multipart::{Field, Multipart};
use axum::extract::{Path, State};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use motoria_classifier::classify::{GestureImage, classify_batch};
use motoria_core::models::session::SubtestSlot;
use motoria_scoring::gestures;

use crate::error::ApiError;
use crate::state::AppState;

use super::update_session;

#[derive(Serialize)]
pub struct SubtestResponse {
    pub result: i64,
    pub test_number: u8,
}

/// Score one gesture sub-test from a multipart upload.
///
/// Fields: `strict` (1 or 0), `group_size`, `test_number` (1–4),
/// `gesture_names` (comma-separated expected sequence) and one `images`
/// part per captured frame, in capture order. The whole batch is classified
/// in a single model call, scored against the expected sequence, and the
/// sub-score written into the slot named by `test_number`.
pub async fn score_subtest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SubtestResponse>, ApiError> {
    let mut strict: Option<bool> = None;
    let mut group_size: Option<usize> = None;
    let mut test_number: Option<u8> = None;
    let mut gesture_names: Option<String> = None;
    let mut images: Vec<GestureImage> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "strict" => strict = Some(parse_field::<i64>(field, "strict").await? == 1),
            "group_size" => group_size = Some(parse_field(field, "group_size").await?),
            "test_number" => test_number = Some(parse_field(field, "test_number").await?),
            "gesture_names" => {
                gesture_names = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                );
            }
            "images" => {
                let filename = field.file_name().unwrap_or("frame").to_string();
                let content_type = field.content_type().map(|s| s.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("failed to read image data: {e}")))?;
                images.push(GestureImage {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let strict = strict.ok_or_else(|| missing("strict"))?;
    let group_size = group_size.ok_or_else(|| missing("group_size"))?;
    let test_number = test_number.ok_or_else(|| missing("test_number"))?;
    let gesture_names = gesture_names.ok_or_else(|| missing("gesture_names"))?;

    if group_size == 0 {
        return Err(ApiError::BadRequest(
            "group_size must be at least 1".to_string(),
        ));
    }
    let slot = SubtestSlot::from_number(test_number).ok_or_else(|| {
        ApiError::BadRequest(format!("test_number must be 1-4, got {test_number}"))
    })?;

    let expected: Vec<String> = gesture_names.split(',').map(str::to_string).collect();

    let labels = classify_batch(&state.sdk_config, &state.classifier_model_id, &images).await?;
    let result = gestures::score(&expected, &labels, group_size, strict) as i64;

    update_session(&state, id, |session| {
        session.record_subtest(slot, result);
        Ok(())
    })
    .await?;

    info!(
        session_id = %id,
        test_number,
        frames = images.len(),
        result,
        "recorded gesture sub-test"
    );

    Ok(Json(SubtestResponse {
        result,
        test_number,
    }))
}

fn missing(name: &str) -> ApiError {
    ApiError::BadRequest(format!("missing multipart field '{name}'"))
}

async fn parse_field<T>(field: Field<'_>, name: &str) -> Result<T, ApiError>
where
    T: FromStr,
    T::Err: Display,
{
    let text = field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("failed to read field '{name}': {e}")))?;
    text.trim()
        .parse()
        .map_err(|e| ApiError::BadRequest(format!("field '{name}' is not a valid number: {e}")))
}
