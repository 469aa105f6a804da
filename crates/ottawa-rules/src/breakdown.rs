use serde::Serialize;
use ts_rs::TS;

use ottawa_core::ZoneDirectory;
use ottawa_flow::AssessmentSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Badge {
    Pass,
    Fail,
    Clear,
    Pain,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Pass => "PASS",
            Badge::Fail => "FAIL",
            Badge::Clear => "CLEAR",
            Badge::Pain => "PAIN",
        }
    }
}

/// One assessed dimension, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct BreakdownRow {
    pub label: String,
    pub subtitle: String,
    pub passed: bool,
    pub badge: Badge,
}

/// Rows for everything actually assessed: weight bearing first, then each
/// recorded zone in directory order. Zones never reached are left out.
pub fn build_breakdown(session: &AssessmentSession, zones: &ZoneDirectory) -> Vec<BreakdownRow> {
    let mut rows = Vec::with_capacity(zones.len() + 1);

    if let Some(passed) = session.can_bear_weight() {
        rows.push(BreakdownRow {
            label: "Weight Bearing".to_string(),
            subtitle: if passed {
                "Able to bear weight".to_string()
            } else {
                "Unable to bear weight".to_string()
            },
            passed,
            badge: if passed { Badge::Pass } else { Badge::Fail },
        });
    }

    for zone in zones {
        if let Some(has_pain) = session.palpation(&zone.id) {
            rows.push(BreakdownRow {
                label: zone.name.clone(),
                subtitle: zone.anatomy_note.clone(),
                passed: !has_pain,
                badge: if has_pain { Badge::Pain } else { Badge::Clear },
            });
        }
    }

    rows
}
