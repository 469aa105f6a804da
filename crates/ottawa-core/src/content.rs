use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::guidance::{GuidanceProtocol, ProtocolKind};
use crate::models::zone::ZoneDirectory;

/// Current content version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Steps a patient must walk unaided to pass the weight-bearing check.
pub const DEFAULT_STEP_TARGET: u32 = 4;

const DEFAULT_DISCLAIMER: &str = "This result is based on the Ottawa Ankle Rules. \
It is not a medical diagnosis. If pain persists, consult a doctor.";

/// Static reference tables the assessment runs against.
///
/// Supplied by the host as JSON so wording and zone lists can change
/// without touching the decision rule. Any field left out of the JSON
/// takes its built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ReferenceContent {
    /// Schema version. Missing or 0 = pre-versioned content.
    pub content_version: u32,
    pub zones: ZoneDirectory,
    pub first_aid: GuidanceProtocol,
    pub recovery: GuidanceProtocol,
    /// Added in v1.
    pub step_target: u32,
    pub disclaimer: String,
}

impl Default for ReferenceContent {
    fn default() -> Self {
        Self {
            content_version: CURRENT_VERSION,
            zones: ZoneDirectory::default(),
            first_aid: GuidanceProtocol::first_aid(),
            recovery: GuidanceProtocol::recovery(),
            step_target: DEFAULT_STEP_TARGET,
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
        }
    }
}

impl ReferenceContent {
    /// Parse, migrate, and validate reference content.
    pub fn from_json(contents: &str) -> Result<Self, CoreError> {
        // Parse as raw JSON so we can run migrations before deserializing.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = content_version(&json)?;

        let migrated = migrate(json, on_disk_version)?;
        let content: ReferenceContent = serde_json::from_value(migrated)?;
        content.validate()?;
        Ok(content)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(id) = self.zones.duplicate_id() {
            return Err(CoreError::DuplicateZone(id.to_string()));
        }
        if self.step_target == 0 {
            return Err(CoreError::InvalidStepTarget);
        }

        for (slot, protocol) in [
            (ProtocolKind::FirstAid, &self.first_aid),
            (ProtocolKind::Recovery, &self.recovery),
        ] {
            if protocol.kind != slot {
                return Err(CoreError::ProtocolKindMismatch {
                    slot,
                    found: protocol.kind,
                });
            }
            if protocol.steps.is_empty() {
                return Err(CoreError::EmptyProtocol(slot));
            }
        }
        Ok(())
    }

    pub fn protocol(&self, kind: ProtocolKind) -> &GuidanceProtocol {
        match kind {
            ProtocolKind::FirstAid => &self.first_aid,
            ProtocolKind::Recovery => &self.recovery,
        }
    }
}

/// Version recorded in the raw JSON. Missing = 0; anything other than an
/// integer that fits in `u32` is rejected rather than read as 0.
fn content_version(json: &serde_json::Value) -> Result<u32, CoreError> {
    let Some(value) = json.get("content_version") else {
        return Ok(0);
    };
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| CoreError::InvalidVersion(value.to_string()))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, CoreError> {
    if from_version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add step_target
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(CoreError::NotAnObject)?;
        obj.entry("step_target")
            .or_insert(serde_json::Value::Number(DEFAULT_STEP_TARGET.into()));
        obj.insert(
            "content_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated reference content v0 → v1 (added step_target)");
    }

    Ok(json)
}
