//! ottawa-flow
//!
//! The assessment flow controller. Sequences one weight-bearing check and
//! then each palpation zone in canonical order, recording a boolean per
//! stage and stopping early when weight bearing fails.

pub mod controller;
pub mod error;
pub mod events;
pub mod session;
pub mod step_test;

pub use controller::FlowController;
pub use error::FlowError;
pub use events::{FlowEvent, TerminationReason};
pub use session::{AssessmentSession, SessionState};
pub use step_test::{StepOutcome, StepTest};
