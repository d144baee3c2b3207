//! motoria-classifier
//!
//! The gesture image classifier behind the scoring pipeline: an opaque
//! multimodal model invoked through the Bedrock Converse API, one whole
//! batch per call, answering one vocabulary label per image.

pub mod classify;
pub mod error;
