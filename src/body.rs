use crate::error::Error;
use crate::utils::zup2yup;
use crate::{vec3, Mat3, Num, Vec3, TWO_PI};

/// Which center a body's circle is drawn around.
///
/// The kinematics are identical either way; the tag exists so the
/// rendering collaborator can parent jovicentric bodies to Jupiter and
/// heliocentric ones (Earth, the Sun placeholder) to the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Jovicentric,
    Heliocentric,
}

/// One body on an idealized circular orbit.
///
/// Orbital parameters are fixed at construction. The phase offset is
/// derived once from an absolute position fix via `atan2(y, x)` and the
/// cached position is recomputed from scratch on every [`update`] call,
/// so the same elapsed time always yields the same position.
///
/// [`update`]: OrbitalBody::update
#[derive(Debug, Clone)]
pub struct OrbitalBody {
    /// Display radius hint for the renderer, inert in the kinematics
    pub radius: Num,
    /// Color tag forwarded to the renderer
    pub color: u32,
    pub frame: Frame,

    // validated at construction, so not freely mutable
    orbit_radius: Num,
    period: Num,
    inclination: Num,

    phase_offset: Num,
    position: Vec3,
}

impl OrbitalBody {
    pub fn new(
        orbit_radius: Num,
        period: Num,
        inclination: Num,
        color: u32,
    ) -> Result<Self, Error> {
        if period <= 0.0 {
            return Err(Error::DegenerateOrbit);
        }

        Ok(Self {
            radius: 0.0,
            color,
            frame: Frame::Jovicentric,
            orbit_radius,
            period,
            inclination,
            phase_offset: 0.0,
            position: Vec3::ZERO,
        })
    }

    pub fn with_radius(mut self, radius: Num) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    /// Derives the phase offset from an absolute position fix.
    ///
    /// `fix` is an ecliptic (z-up) vector in scene length units, e.g. an
    /// ephemeris state vector already converted from AU. The in-plane
    /// components fix the angle; the out-of-plane component is dropped,
    /// since the idealized circle carries its own inclination.
    pub fn establish_phase(&mut self, fix: Vec3) {
        self.phase_offset = fix.y.atan2(fix.x);
        self.position = self.tilt() * zup2yup(vec3(fix.x, fix.y, 0.0));
    }

    /// Re-anchors the circle to an authoritative absolute position,
    /// discarding the phase derived from any earlier fix.
    ///
    /// Subsequent updates are still the idealized circular approximation
    /// going forward from the new anchor, so accuracy decays with
    /// elapsed time since the last correction.
    pub fn reanchor_from_absolute(&mut self, fix: Vec3) {
        self.establish_phase(fix);
    }

    /// Computes the position at elapsed time `t`.
    ///
    /// Pure in `t` and the stored parameters; the only effect is
    /// refreshing the cached position. Negative `t` is valid and walks
    /// the orbit backwards.
    pub fn update(&mut self, t: Num) -> Vec3 {
        let angle = self.phase_offset + (t / self.period) * TWO_PI;

        let flat = vec3(
            self.orbit_radius * angle.cos(),
            0.0,
            self.orbit_radius * angle.sin(),
        );

        self.position = self.tilt() * flat;
        self.position
    }

    /// Position cached by the last `update` or phase fix.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn phase_offset(&self) -> Num {
        self.phase_offset
    }

    pub fn orbit_radius(&self) -> Num {
        self.orbit_radius
    }

    pub fn period(&self) -> Num {
        self.period
    }

    pub fn inclination(&self) -> Num {
        self.inclination
    }

    fn tilt(&self) -> Mat3 {
        Mat3::from_rotation_z(-self.inclination)
    }
}
