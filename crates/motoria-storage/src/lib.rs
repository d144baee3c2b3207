//! motoria-storage
//!
//! The persistent store: JSON records in S3, one object per session or user,
//! with ETag-conditional writes for read-modify-write cycles. Thin wrapper
//! around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod objects;
pub mod state;
