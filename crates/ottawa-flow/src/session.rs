use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

/// Where a session sits in the assessment state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum SessionState {
    AwaitingWeightBearing,
    AwaitingPalpation { zone_index: usize },
    Terminated,
}

/// Inputs captured during one assessment run.
///
/// Only [`FlowController`](crate::FlowController) mutates a session, so
/// the fields are read through accessors. Once terminated the inputs are
/// frozen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AssessmentSession {
    id: Uuid,
    can_bear_weight: Option<bool>,
    /// Zone id → pain reported. A zone is absent until assessed.
    palpation_results: BTreeMap<String, bool>,
    /// 0 is the weight-bearing stage; `k + 1` is palpation zone `k`.
    current_stage_index: usize,
    is_terminated: bool,
}

impl AssessmentSession {
    pub(crate) fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            can_bear_weight: None,
            palpation_results: BTreeMap::new(),
            current_stage_index: 0,
            is_terminated: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn can_bear_weight(&self) -> Option<bool> {
        self.can_bear_weight
    }

    pub fn palpation_results(&self) -> &BTreeMap<String, bool> {
        &self.palpation_results
    }

    /// Pain reported for `zone_id`, or `None` if it was never assessed.
    pub fn palpation(&self, zone_id: &str) -> Option<bool> {
        self.palpation_results.get(zone_id).copied()
    }

    pub fn current_stage_index(&self) -> usize {
        self.current_stage_index
    }

    pub fn is_terminated(&self) -> bool {
        self.is_terminated
    }

    pub fn state(&self) -> SessionState {
        match (self.is_terminated, self.current_stage_index) {
            (true, _) => SessionState::Terminated,
            (false, 0) => SessionState::AwaitingWeightBearing,
            (false, index) => SessionState::AwaitingPalpation {
                zone_index: index - 1,
            },
        }
    }

    pub(crate) fn set_weight_bearing(&mut self, passed: bool) {
        self.can_bear_weight = Some(passed);
    }

    pub(crate) fn insert_palpation(&mut self, zone_id: &str, has_pain: bool) {
        self.palpation_results.insert(zone_id.to_string(), has_pain);
    }

    pub(crate) fn advance(&mut self) {
        self.current_stage_index += 1;
    }

    pub(crate) fn terminate(&mut self) {
        self.is_terminated = true;
    }
}
