//! Circular-orbit kinematics for Jupiter's Galilean moons.
//!
//! The crate models each body as a circle of fixed radius, period and
//! inclination, seeded from an absolute ephemeris fix. [`OrbitalSystem`]
//! advances every body to a shared elapsed-time value and
//! [`TraceSampler`] scans a time window to build per-body polylines of
//! past motion. Rendering, networking and UI live in the embedding
//! application; this crate only turns time into positions.

pub mod constants;
pub mod ephemeris;
pub mod utils;

mod body;
mod config;
mod error;
mod system;
mod trace;

pub use body::{Frame, OrbitalBody};
pub use config::{MoonConfig, SystemConfig};
pub use constants::{AU, PI, TWO_PI};
pub use ephemeris::{EphemerisEntry, EphemerisSet};
pub use error::Error;
pub use system::{BodyId, OrbitalSystem};
pub use trace::TraceSampler;

#[cfg(feature = "f32")]
pub type Num = f32;
#[cfg(feature = "f32")]
pub use glam::{vec3, Mat3, Vec3};

#[cfg(feature = "f64")]
pub type Num = f64;
#[cfg(feature = "f64")]
pub use glam::{dvec3 as vec3, DMat3 as Mat3, DVec3 as Vec3};
