use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("invalid transition: expected stage '{expected}', got '{got}'")]
    InvalidTransition { expected: String, got: String },

    #[error("session already terminated")]
    SessionAlreadyTerminated,
}
