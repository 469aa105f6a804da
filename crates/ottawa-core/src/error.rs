use thiserror::Error;

use crate::models::guidance::ProtocolKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("reference content is not a JSON object")]
    NotAnObject,

    #[error("content_version must be a non-negative integer, got {0}")]
    InvalidVersion(String),

    #[error("content_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("duplicate palpation zone id: {0}")]
    DuplicateZone(String),

    #[error("{0} protocol has no steps")]
    EmptyProtocol(ProtocolKind),

    #[error("{slot} slot holds a {found} protocol")]
    ProtocolKindMismatch {
        slot: ProtocolKind,
        found: ProtocolKind,
    },

    #[error("step target must be at least 1")]
    InvalidStepTarget,
}
