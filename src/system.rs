use std::fmt;

use tracing::warn;

use crate::body::{Frame, OrbitalBody};
use crate::config::{MoonConfig, SystemConfig};
use crate::constants::{EARTH_COLOR, SUN_COLOR};
use crate::ephemeris::EphemerisSet;
use crate::error::Error;
use crate::{vec3, Num, Vec3, AU};

/// Identity of a tracked body.
///
/// `Jupiter` is the system's reference body and sits at the origin of
/// the jovicentric frame; it never appears in the body collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BodyId {
    Jupiter,
    Io,
    Europa,
    Ganymede,
    Callisto,
    Earth,
    Sun,
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyId::Jupiter => "jupiter",
            BodyId::Io => "io",
            BodyId::Europa => "europa",
            BodyId::Ganymede => "ganymede",
            BodyId::Callisto => "callisto",
            BodyId::Earth => "earth",
            BodyId::Sun => "sun",
        };

        f.write_str(name)
    }
}

/// An ordered collection of orbital bodies sharing one time cursor.
///
/// Insertion order is satellite discovery order (innermost to
/// outermost) by convention; it only affects draw and trace order,
/// never the physics. `update(t)` is a pure recomputation, so calling
/// it with the same `t` twice, or with non-monotonic or negative times,
/// always yields the same positions.
#[derive(Debug, Clone, Default)]
pub struct OrbitalSystem {
    bodies: Vec<(BodyId, OrbitalBody)>,
}

impl OrbitalSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the reference system: the four Galilean moons seeded from
    /// their bundled ephemeris fixes, Earth, and the Sun placeholder.
    pub fn galilean(config: &SystemConfig) -> Result<Self, Error> {
        let mut system = Self::new();

        system.add_moon(BodyId::Io, &config.io)?;
        system.add_moon(BodyId::Europa, &config.europa)?;
        system.add_moon(BodyId::Ganymede, &config.ganymede)?;
        system.add_moon(BodyId::Callisto, &config.callisto)?;

        let mut earth = OrbitalBody::new(
            config.earth_orbit_radius,
            config.earth_period,
            0.0,
            EARTH_COLOR,
        )?
        .with_radius(config.earth_radius)
        .with_frame(Frame::Heliocentric);
        earth.establish_phase(vec3(config.earth_orbit_radius, 0.0, 0.0));
        system.add_body(BodyId::Earth, earth);

        let mut sun = OrbitalBody::new(
            config.sun_distance,
            config.sun_period,
            config.sun_tilt,
            SUN_COLOR,
        )?
        .with_frame(Frame::Heliocentric);
        sun.establish_phase(config.sun_fix * AU);
        system.add_body(BodyId::Sun, sun);

        Ok(system)
    }

    fn add_moon(&mut self, id: BodyId, config: &MoonConfig) -> Result<(), Error> {
        let mut moon = OrbitalBody::new(
            config.orbit_radius,
            config.period,
            config.inclination,
            config.color,
        )?
        .with_radius(config.radius);

        moon.establish_phase(config.fix * AU);
        self.add_body(id, moon);

        Ok(())
    }

    pub fn add_body(&mut self, id: BodyId, body: OrbitalBody) {
        self.bodies.push((id, body));
    }

    pub fn contains(&self, id: BodyId) -> bool {
        id == BodyId::Jupiter || self.bodies.iter().any(|(b, _)| *b == id)
    }

    pub fn body(&self, id: BodyId) -> Option<&OrbitalBody> {
        self.bodies
            .iter()
            .find(|(b, _)| *b == id)
            .map(|(_, body)| body)
    }

    fn body_mut(&mut self, id: BodyId) -> Option<&mut OrbitalBody> {
        self.bodies
            .iter_mut()
            .find(|(b, _)| *b == id)
            .map(|(_, body)| body)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &OrbitalBody)> {
        self.bodies.iter().map(|(id, body)| (*id, body))
    }

    /// Advances every body to elapsed time `t`, in insertion order.
    pub fn update(&mut self, t: Num) {
        for (_, body) in self.bodies.iter_mut() {
            body.update(t);
        }
    }

    /// Re-anchors every body named in `set` from its absolute position.
    ///
    /// Entries for untracked bodies are ignored, and a malformed entry
    /// only loses the correction for that body; both leave the rest of
    /// the batch applied. Returns the rejected entries.
    pub fn apply_ephemeris_correction(
        &mut self,
        set: &EphemerisSet,
    ) -> Vec<(BodyId, Error)> {
        let mut rejected = Vec::new();

        for (&id, entry) in set.iter() {
            let Some(body) = self.body_mut(id) else {
                continue;
            };

            if !entry.is_finite() {
                warn!(body = %id, "rejecting malformed ephemeris entry");
                rejected.push((id, Error::MalformedEphemeris(id)));
                continue;
            }

            body.reanchor_from_absolute(entry.to_scene());
        }

        rejected
    }

    /// Current position of `id`, for camera-lock and render queries.
    /// The reference body is always at the origin.
    pub fn camera_anchor_position(&self, id: BodyId) -> Result<Vec3, Error> {
        self.position(id)
    }

    pub fn position(&self, id: BodyId) -> Result<Vec3, Error> {
        if id == BodyId::Jupiter {
            return Ok(Vec3::ZERO);
        }

        self.body(id)
            .map(|body| body.position())
            .ok_or(Error::UnknownBody(id))
    }
}
