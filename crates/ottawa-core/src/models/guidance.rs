use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which guidance protocol applies to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProtocolKind {
    /// Care while waiting to be seen, when an X-ray is recommended.
    FirstAid,
    /// Self-care when fracture risk is low.
    Recovery,
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolKind::FirstAid => f.write_str("first-aid"),
            ProtocolKind::Recovery => f.write_str("recovery"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuidanceStep {
    pub letter: String,
    pub title: String,
    /// Icon key resolved by the host (an SF Symbol name in the mobile app).
    pub icon: String,
    pub subtitle: String,
    pub detail: String,
}

/// An ordered list of care steps shown alongside a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuidanceProtocol {
    pub kind: ProtocolKind,
    pub title: String,
    pub steps: Vec<GuidanceStep>,
}

impl GuidanceProtocol {
    pub fn first_aid() -> Self {
        Self {
            kind: ProtocolKind::FirstAid,
            title: "First Aid (While waiting)".to_string(),
            steps: rice_steps(),
        }
    }

    pub fn recovery() -> Self {
        Self {
            kind: ProtocolKind::Recovery,
            title: "Recovery Protocol".to_string(),
            steps: rice_steps(),
        }
    }
}

fn rice_steps() -> Vec<GuidanceStep> {
    let steps = [
        ("R", "Rest", "moon.zzz.fill", "Avoid weight bearing", "Stop activity immediately."),
        ("I", "Ice", "snowflake", "20 min on, 20 min off", "Apply ice to reduce swelling."),
        ("C", "Compression", "bandage.fill", "Wrap snugly", "Use an elastic bandage."),
        ("E", "Elevation", "arrow.up.heart.fill", "Above heart level", "Prop ankle up on pillows."),
    ];

    steps
        .iter()
        .map(|(letter, title, icon, subtitle, detail)| GuidanceStep {
            letter: letter.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            subtitle: subtitle.to_string(),
            detail: detail.to_string(),
        })
        .collect()
}
