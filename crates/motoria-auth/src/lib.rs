//! motoria-auth
//!
//! Self-contained authentication: HS256 access tokens and PBKDF2 password
//! hashing. User records themselves live in the store; this crate only
//! handles the credential material.

pub mod error;
pub mod jwt;
pub mod password;
