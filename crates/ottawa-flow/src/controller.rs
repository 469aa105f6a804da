use tracing::{info, warn};

use ottawa_core::models::stage::WEIGHT_BEARING_ID;
use ottawa_core::{ReferenceContent, Stage, ZoneDirectory};

use crate::error::FlowError;
use crate::events::{FlowEvent, TerminationReason};
use crate::session::{AssessmentSession, SessionState};
use crate::step_test::StepOutcome;

/// Drives one assessment session through its stages.
///
/// ```text
/// AwaitingWeightBearing ──pass──▶ AwaitingPalpation(0) ─▶ … ─▶ AwaitingPalpation(N-1) ─▶ Terminated
///          └──────────fail──────────────────────────────────────────────────────────────▶ Terminated
/// ```
///
/// Rejected calls never touch the session.
#[derive(Debug, Clone)]
pub struct FlowController {
    zones: ZoneDirectory,
    session: AssessmentSession,
    events: Vec<FlowEvent>,
}

impl FlowController {
    pub fn new(zones: ZoneDirectory) -> Self {
        let session = AssessmentSession::new();
        info!(session_id = %session.id(), zones = zones.len(), "assessment session started");
        Self {
            zones,
            session,
            events: Vec::new(),
        }
    }

    pub fn from_content(content: &ReferenceContent) -> Self {
        Self::new(content.zones.clone())
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    /// Hand the session over for evaluation.
    pub fn into_session(self) -> AssessmentSession {
        self.session
    }

    pub fn zones(&self) -> &ZoneDirectory {
        &self.zones
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// The stage awaiting input, or `None` once terminated.
    pub fn current_stage(&self) -> Option<Stage> {
        self.stage_for(self.state())
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_terminated()
    }

    pub fn record_weight_bearing(&mut self, passed: bool) -> Result<&AssessmentSession, FlowError> {
        match self.state() {
            SessionState::Terminated => return Err(self.reject(FlowError::SessionAlreadyTerminated)),
            SessionState::AwaitingPalpation { zone_index } => {
                let expected = self.expected_zone_id(zone_index);
                return Err(self.reject(FlowError::InvalidTransition {
                    expected,
                    got: WEIGHT_BEARING_ID.to_string(),
                }));
            }
            SessionState::AwaitingWeightBearing => {}
        }

        self.session.set_weight_bearing(passed);
        info!(session_id = %self.session.id(), passed, "weight bearing recorded");

        if !passed {
            self.finish(TerminationReason::WeightBearingFailed);
        } else {
            self.advance_from(Stage::WeightBearing);
        }
        Ok(&self.session)
    }

    pub fn record_palpation(
        &mut self,
        zone_id: &str,
        has_pain: bool,
    ) -> Result<&AssessmentSession, FlowError> {
        let zone = match self.state() {
            SessionState::Terminated => return Err(self.reject(FlowError::SessionAlreadyTerminated)),
            SessionState::AwaitingWeightBearing => {
                return Err(self.reject(FlowError::InvalidTransition {
                    expected: WEIGHT_BEARING_ID.to_string(),
                    got: zone_id.to_string(),
                }));
            }
            SessionState::AwaitingPalpation { zone_index } => match self.zones.get(zone_index) {
                Some(zone) if zone.id == zone_id => zone.clone(),
                _ => {
                    let expected = self.expected_zone_id(zone_index);
                    return Err(self.reject(FlowError::InvalidTransition {
                        expected,
                        got: zone_id.to_string(),
                    }));
                }
            },
        };

        self.session.insert_palpation(&zone.id, has_pain);
        info!(session_id = %self.session.id(), zone = %zone.id, has_pain, "palpation recorded");

        self.advance_from(Stage::Palpation { zone });
        Ok(&self.session)
    }

    /// Feed a finished step test into the weight-bearing stage. A test
    /// that is still counting records nothing and returns `Ok(None)`.
    pub fn apply_step_outcome(
        &mut self,
        outcome: StepOutcome,
    ) -> Result<Option<&AssessmentSession>, FlowError> {
        match outcome {
            StepOutcome::Counting { .. } => Ok(None),
            StepOutcome::Passed => self.record_weight_bearing(true).map(Some),
            StepOutcome::Failed => self.record_weight_bearing(false).map(Some),
        }
    }

    /// Discard the current session and start a fresh one. Undrained events
    /// from the old session are dropped; the queue then holds only
    /// `SessionReset`.
    pub fn reset(&mut self) -> &AssessmentSession {
        let previous = self.session.id();
        self.session = AssessmentSession::new();
        self.events.clear();
        self.events.push(FlowEvent::SessionReset);
        info!(previous = %previous, session_id = %self.session.id(), "assessment session reset");
        &self.session
    }

    /// Take all notifications queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<FlowEvent> {
        std::mem::take(&mut self.events)
    }

    fn advance_from(&mut self, from: Stage) {
        self.session.advance();
        match self.stage_for(self.session.state()) {
            Some(to) => self.events.push(FlowEvent::StageChanged { from, to }),
            None => self.finish(TerminationReason::AllZonesAssessed),
        }
    }

    fn finish(&mut self, reason: TerminationReason) {
        self.session.terminate();
        self.events.push(FlowEvent::SessionTerminated { reason });
        info!(session_id = %self.session.id(), ?reason, "assessment session terminated");
    }

    /// `AwaitingPalpation` past the end of the directory means every zone
    /// has been recorded; callers terminate on `None`.
    fn stage_for(&self, state: SessionState) -> Option<Stage> {
        match state {
            SessionState::AwaitingWeightBearing => Some(Stage::WeightBearing),
            SessionState::AwaitingPalpation { zone_index } => self
                .zones
                .get(zone_index)
                .map(|zone| Stage::Palpation { zone: zone.clone() }),
            SessionState::Terminated => None,
        }
    }

    fn expected_zone_id(&self, zone_index: usize) -> String {
        self.zones
            .get(zone_index)
            .map(|z| z.id.clone())
            .unwrap_or_default()
    }

    fn reject(&self, error: FlowError) -> FlowError {
        warn!(session_id = %self.session.id(), %error, "rejected assessment input");
        error
    }
}
