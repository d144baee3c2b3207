//! Store key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the Motoria bucket.

use uuid::Uuid;

pub fn session(id: Uuid) -> String {
    format!("sessions/{id}.json")
}

pub const SESSIONS_PREFIX: &str = "sessions/";

pub fn user(username: &str) -> String {
    format!("users/{username}.json")
}

pub const USERS_PREFIX: &str = "users/";
