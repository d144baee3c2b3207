use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account (doctors and test administrators).
///
/// Storage-only record, never returned to clients and not TS-exported.
/// `password_salt` and `password_hash` are base64-encoded PBKDF2 material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_salt: String,
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub created_at: jiff::Timestamp,
}
