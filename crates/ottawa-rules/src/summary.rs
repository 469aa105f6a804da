use serde::Serialize;
use ts_rs::TS;

use ottawa_core::{GuidanceProtocol, ReferenceContent, ZoneDirectory};
use ottawa_flow::AssessmentSession;

use crate::breakdown::{BreakdownRow, build_breakdown};
use crate::error::RuleError;
use crate::result::{AssessmentResult, StatusSeverity};
use crate::{evaluate, select_guidance_protocol};

/// A headline figure on the result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct StatCell {
    pub label: String,
    pub value: String,
    pub severity: StatusSeverity,
}

/// Everything the host renders once a session has terminated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ResultSummary {
    pub result: AssessmentResult,
    pub headline: String,
    pub stats: Vec<StatCell>,
    pub breakdown: Vec<BreakdownRow>,
    pub protocol: GuidanceProtocol,
    pub disclaimer: String,
}

/// `zones` must be the directory the session was recorded against
/// (`FlowController::zones`); `content` supplies protocols and wording.
pub fn summarize(
    session: &AssessmentSession,
    zones: &ZoneDirectory,
    content: &ReferenceContent,
) -> Result<ResultSummary, RuleError> {
    let result = evaluate(session)?;

    let headline = if result.requires_x_ray {
        "X-Ray Recommended"
    } else {
        "Low Fracture Risk"
    };

    Ok(ResultSummary {
        result,
        headline: headline.to_string(),
        stats: stat_cells(&result),
        breakdown: build_breakdown(session, zones),
        protocol: select_guidance_protocol(&result, content).clone(),
        disclaimer: content.disclaimer.clone(),
    })
}

fn stat_cells(result: &AssessmentResult) -> Vec<StatCell> {
    let yes_no = |flag: bool| (if flag { "Yes" } else { "No" }).to_string();

    vec![
        StatCell {
            label: "Pain Zones".to_string(),
            value: result.pain_zone_count.to_string(),
            severity: StatusSeverity::from_flag(result.pain_zone_count > 0),
        },
        StatCell {
            label: "Weight Bear".to_string(),
            value: yes_no(result.can_bear_weight),
            severity: StatusSeverity::from_flag(!result.can_bear_weight),
        },
        StatCell {
            label: "X-Ray".to_string(),
            value: yes_no(result.requires_x_ray),
            severity: result.status_severity,
        },
    ]
}
