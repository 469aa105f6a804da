use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An anatomical site palpated for bony tenderness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PalpationZone {
    /// Stable identifier (e.g., "fibula", "metatarsal_5").
    pub id: String,
    /// Display name (e.g., "Posterior Edge (Fibula)").
    pub name: String,
    /// Where to press (e.g., "Lateral Malleolus (6cm)").
    pub anatomy_note: String,
}

impl PalpationZone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        anatomy_note: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            anatomy_note: anatomy_note.into(),
        }
    }
}

/// The palpation zones in the canonical order they are assessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ZoneDirectory(Vec<PalpationZone>);

impl ZoneDirectory {
    pub fn new(zones: Vec<PalpationZone>) -> Self {
        Self(zones)
    }

    pub fn zones(&self) -> &[PalpationZone] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PalpationZone> {
        self.0.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&PalpationZone> {
        self.0.iter().find(|z| z.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|z| z.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PalpationZone> {
        self.0.iter()
    }

    /// First id that appears more than once, if any.
    pub fn duplicate_id(&self) -> Option<&str> {
        self.0.iter().enumerate().find_map(|(i, zone)| {
            self.0[..i]
                .iter()
                .any(|earlier| earlier.id == zone.id)
                .then_some(zone.id.as_str())
        })
    }
}

/// The four Ottawa ankle and foot palpation sites.
impl Default for ZoneDirectory {
    fn default() -> Self {
        let zones = [
            ("fibula", "Posterior Edge (Fibula)", "Lateral Malleolus (6cm)"),
            ("tibia", "Posterior Edge (Tibia)", "Medial Malleolus (6cm)"),
            ("metatarsal_5", "Base of 5th Metatarsal", "Lateral Foot"),
            ("navicular", "Navicular", "Medial Foot"),
        ];

        Self(
            zones
                .iter()
                .map(|(id, name, note)| PalpationZone::new(*id, *name, *note))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a ZoneDirectory {
    type Item = &'a PalpationZone;
    type IntoIter = std::slice::Iter<'a, PalpationZone>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
