use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("answers already submitted for this session")]
    AlreadySubmitted,

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
