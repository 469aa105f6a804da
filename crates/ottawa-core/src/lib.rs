//! ottawa-core
//!
//! Shared vocabulary of the ankle assessment: stages, palpation zones,
//! guidance protocols, and the versioned reference content that supplies
//! them. Pure data, no I/O.

pub mod content;
pub mod error;
pub mod models;

pub use content::ReferenceContent;
pub use error::CoreError;
pub use models::guidance::{GuidanceProtocol, GuidanceStep, ProtocolKind};
pub use models::stage::Stage;
pub use models::zone::{PalpationZone, ZoneDirectory};
