use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::zone::PalpationZone;

/// Identifier used for the weight-bearing stage wherever a stage id is needed.
pub const WEIGHT_BEARING_ID: &str = "weight_bearing";

/// One step of the assessment: the weight-bearing check, or palpation of a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Stage {
    WeightBearing,
    Palpation { zone: PalpationZone },
}

impl Stage {
    pub fn id(&self) -> &str {
        match self {
            Stage::WeightBearing => WEIGHT_BEARING_ID,
            Stage::Palpation { zone } => &zone.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Stage::WeightBearing => "Weight Bearing",
            Stage::Palpation { zone } => &zone.name,
        }
    }
}
