use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::AuthError;

pub const PBKDF2_ITERATIONS: u32 = 600_000;
const HASH_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;

/// Salt and derived hash for a password, base64-encoded for storage on the
/// user record.
#[derive(Debug, Clone)]
pub struct PasswordRecord {
    pub salt: String,
    pub hash: String,
}

/// Derive a storable hash from a password with a fresh random salt.
pub fn hash_password(password: &str) -> PasswordRecord {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut hash = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut hash);

    PasswordRecord {
        salt: BASE64.encode(salt),
        hash: BASE64.encode(hash),
    }
}

/// Check a password against stored salt + hash material.
///
/// The comparison is constant-time; a mismatched hash length compares
/// unequal rather than erroring.
pub fn verify_password(password: &str, salt: &str, hash: &str) -> Result<bool, AuthError> {
    let salt = BASE64
        .decode(salt)
        .map_err(|e| AuthError::CorruptPasswordRecord(e.to_string()))?;
    let stored = BASE64
        .decode(hash)
        .map_err(|e| AuthError::CorruptPasswordRecord(e.to_string()))?;

    let mut derived = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut derived);

    Ok(derived.as_slice().ct_eq(stored.as_slice()).into())
}
