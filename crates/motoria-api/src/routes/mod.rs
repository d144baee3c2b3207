pub mod answers;
pub mod diagnosis;
pub mod gestures;
pub mod health;
pub mod questionnaire;
pub mod sessions;
pub mod users;

use serde::Serialize;
use uuid::Uuid;

use motoria_core::models::session::TestSession;
use motoria_core::models::user::User;
use motoria_core::store_keys;
use motoria_storage::error::StorageError;
use motoria_storage::state as store;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Attempts for a read-apply-write cycle before giving up with a conflict.
const CAS_ATTEMPTS: usize = 3;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Load a session record with its ETag, mapping a missing key to a
/// domain-level 404.
pub(crate) async fn load_session(
    state: &AppState,
    id: Uuid,
) -> Result<(TestSession, String), ApiError> {
    let key = store_keys::session(id);
    match store::load_state::<TestSession>(&state.s3, &state.bucket, &key).await {
        Ok(loaded) => Ok(loaded),
        Err(StorageError::NotFound { .. }) => {
            Err(ApiError::NotFound(format!("test session not found: {id}")))
        }
        Err(e) => Err(e.into()),
    }
}

/// Read-apply-write a session with ETag compare-and-swap.
///
/// Re-loads and re-applies the mutation a bounded number of times when a
/// concurrent writer wins the conditional put, so a slot-4 total never sums
/// stale sibling slots. Returns the session as written.
pub(crate) async fn update_session<F>(
    state: &AppState,
    id: Uuid,
    mut apply: F,
) -> Result<TestSession, ApiError>
where
    F: FnMut(&mut TestSession) -> Result<(), ApiError>,
{
    let key = store_keys::session(id);

    for _ in 0..CAS_ATTEMPTS {
        let (mut session, etag) = load_session(state, id).await?;
        apply(&mut session)?;

        match store::save_state_if_match(&state.s3, &state.bucket, &key, &session, &etag).await {
            Ok(_) => return Ok(session),
            Err(StorageError::PreconditionFailed { .. }) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(ApiError::Conflict(
        "session was modified concurrently, retry".to_string(),
    ))
}

/// Resolve the authenticated account to its stored user record.
pub(crate) async fn current_user(state: &AppState, auth: &AuthUser) -> Result<User, ApiError> {
    let key = store_keys::user(&auth.username);
    match store::load_state::<User>(&state.s3, &state.bucket, &key).await {
        Ok((user, _)) => Ok(user),
        Err(StorageError::NotFound { .. }) => {
            Err(ApiError::Unauthorized("user not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
