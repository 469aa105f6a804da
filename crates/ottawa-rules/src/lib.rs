//! ottawa-rules
//!
//! The decision engine. Pure functions over a terminated
//! [`AssessmentSession`]: the Ottawa Ankle Rules verdict, the guidance
//! protocol it selects, and the rows and figures a host renders.
//!
//! | weight bearing | any zone painful | X-ray | protocol  |
//! |----------------|------------------|-------|-----------|
//! | failed         | (not assessed)   | yes   | first aid |
//! | passed         | yes              | yes   | first aid |
//! | passed         | no               | no    | recovery  |

pub mod breakdown;
pub mod error;
pub mod result;
pub mod summary;

use tracing::info;

use ottawa_core::{GuidanceProtocol, ProtocolKind, ReferenceContent};
use ottawa_flow::AssessmentSession;

pub use breakdown::{Badge, BreakdownRow, build_breakdown};
pub use error::RuleError;
pub use result::{AssessmentResult, StatusSeverity};
pub use summary::{ResultSummary, StatCell, summarize};

/// Apply the rule to a terminated session.
pub fn evaluate(session: &AssessmentSession) -> Result<AssessmentResult, RuleError> {
    if !session.is_terminated() {
        return Err(RuleError::EvaluationPrecondition {
            session_id: session.id(),
        });
    }

    let results = session.palpation_results();
    let pain_zone_count = results.values().filter(|has_pain| **has_pain).count();
    let failed_weight_bearing = session.can_bear_weight() == Some(false);
    let requires_x_ray = pain_zone_count > 0 || failed_weight_bearing;

    let result = AssessmentResult {
        pain_zone_count,
        requires_x_ray,
        status_severity: StatusSeverity::from_flag(requires_x_ray),
        can_bear_weight: session.can_bear_weight() == Some(true),
        palpation_assessed: !results.is_empty(),
    };

    info!(
        session_id = %session.id(),
        pain_zone_count,
        requires_x_ray,
        palpation_assessed = result.palpation_assessed,
        "assessment evaluated"
    );
    Ok(result)
}

pub fn protocol_kind(result: &AssessmentResult) -> ProtocolKind {
    if result.requires_x_ray {
        ProtocolKind::FirstAid
    } else {
        ProtocolKind::Recovery
    }
}

/// First aid while awaiting care when an X-ray is recommended, otherwise
/// the recovery protocol.
pub fn select_guidance_protocol<'a>(
    result: &AssessmentResult,
    content: &'a ReferenceContent,
) -> &'a GuidanceProtocol {
    content.protocol(protocol_kind(result))
}
