use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("label outside the gesture vocabulary: {0}")]
    UnknownLabel(String),

    #[error("unsupported image format: {0}")]
    UnsupportedImageFormat(String),
}
