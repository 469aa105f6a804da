use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatusSeverity {
    Low,
    Elevated,
}

impl StatusSeverity {
    pub fn from_flag(elevated: bool) -> Self {
        if elevated {
            StatusSeverity::Elevated
        } else {
            StatusSeverity::Low
        }
    }
}

/// Outcome of the Ottawa Ankle Rules for one terminated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    /// Zones where pain was reported. Zero when palpation was skipped.
    pub pain_zone_count: usize,
    pub requires_x_ray: bool,
    pub status_severity: StatusSeverity,
    pub can_bear_weight: bool,
    /// False when weight bearing failed before any zone was reached, so a
    /// zero `pain_zone_count` means "not assessed" rather than "no pain".
    pub palpation_assessed: bool,
}
