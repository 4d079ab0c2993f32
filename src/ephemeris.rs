//! Ephemeris correction records.
//!
//! The network collaborator fetches a JSON snapshot keyed by body name
//! and hands it over as an [`EphemerisSet`]; the system re-anchors every
//! matching body from it. Coordinates are in astronomical units in the
//! ecliptic (z-up) frame and get scaled to scene units on application.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::system::BodyId;
use crate::{vec3, Num, Vec3, AU};

/// One absolute position, in AU, ecliptic frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EphemerisEntry {
    pub x: Num,
    pub y: Num,
    pub z: Num,
}

impl EphemerisEntry {
    pub fn new(x: Num, y: Num, z: Num) -> Self {
        Self { x, y, z }
    }

    /// A non-finite coordinate means the feed handed us garbage; the
    /// entry is rejected rather than guessed at.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// The fix scaled to scene length units, still z-up.
    pub fn to_scene(&self) -> Vec3 {
        vec3(self.x, self.y, self.z) * AU
    }
}

/// A correction snapshot. Partial sets are fine; bodies without an
/// entry keep their previous anchor.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EphemerisSet {
    entries: BTreeMap<BodyId, EphemerisEntry>,
}

impl EphemerisSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: BodyId, entry: EphemerisEntry) {
        self.entries.insert(id, entry);
    }

    pub fn get(&self, id: BodyId) -> Option<&EphemerisEntry> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, BodyId, EphemerisEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(BodyId, EphemerisEntry)> for EphemerisSet {
    fn from_iter<T: IntoIterator<Item = (BodyId, EphemerisEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_entries_are_flagged() {
        assert!(EphemerisEntry::new(1.0, 2.0, 3.0).is_finite());
        assert!(!EphemerisEntry::new(Num::NAN, 2.0, 3.0).is_finite());
        assert!(!EphemerisEntry::new(1.0, Num::INFINITY, 3.0).is_finite());
    }

    #[test]
    fn to_scene_scales_by_au() {
        let entry = EphemerisEntry::new(1.0, 0.0, -2.0);
        let v = entry.to_scene();

        assert_eq!(v, vec3(AU, 0.0, -2.0 * AU));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_the_network_shape() {
        let set: EphemerisSet = serde_json::from_str(
            r#"{
                "sun": { "x": -4.0, "y": 0.1, "z": -2.9 },
                "io": { "x": 2.9e-4, "y": -2.8e-3, "z": -9.5e-5 }
            }"#,
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(BodyId::Sun).unwrap().x, -4.0);
        assert!(set.get(BodyId::Europa).is_none());
    }
}
