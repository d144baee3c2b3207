use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("no answers found for the provided ids")]
    NoAnswersSelected,
}
