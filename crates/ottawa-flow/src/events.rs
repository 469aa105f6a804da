use serde::Serialize;
use ts_rs::TS;

use ottawa_core::Stage;

/// Why a session stopped accepting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TerminationReason {
    /// The patient could not bear weight; palpation was skipped.
    WeightBearingFailed,
    AllZonesAssessed,
}

/// Notification queued by the controller for the host to react to
/// (haptics, transitions). No timing is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FlowEvent {
    StageChanged { from: Stage, to: Stage },
    SessionTerminated { reason: TerminationReason },
    SessionReset,
}
