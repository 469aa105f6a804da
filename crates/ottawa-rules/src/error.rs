use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("session {session_id} is still in progress and cannot be evaluated")]
    EvaluationPrecondition { session_id: Uuid },
}
