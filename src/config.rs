use crate::constants::*;
use crate::{vec3, Num, Vec3};

/// Orbital parameters for a single moon, plus the absolute ephemeris
/// fix (ecliptic frame, AU) that seeds its phase.
#[derive(Debug, Clone, Copy)]
pub struct MoonConfig {
    pub radius: Num,
    pub orbit_radius: Num,
    /// Days per revolution
    pub period: Num,
    /// Radians
    pub inclination: Num,
    pub color: u32,
    /// Jovicentric position in AU at elapsed time zero
    pub fix: Vec3,
}

/// Explicit per-body configuration for the reference system.
///
/// Defaults carry the published orbital constants and the JPL HORIZONS
/// state vectors the original data set was anchored to.
#[derive(Debug, Clone, Copy)]
pub struct SystemConfig {
    pub io: MoonConfig,
    pub europa: MoonConfig,
    pub ganymede: MoonConfig,
    pub callisto: MoonConfig,

    pub earth_radius: Num,
    pub earth_orbit_radius: Num,
    pub earth_period: Num,

    /// Sun placeholder: distance and period of Jupiter's heliocentric
    /// orbit, seen from the jovicentric frame
    pub sun_distance: Num,
    pub sun_period: Num,
    pub sun_tilt: Num,
    /// Heliocentric position of the Sun placeholder in AU
    pub sun_fix: Vec3,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            io: MoonConfig {
                radius: IO_RADIUS,
                orbit_radius: IO_ORBIT_RADIUS,
                period: IO_PERIOD,
                inclination: IO_INCLINATION,
                color: IO_COLOR,
                fix: vec3(
                    2.994_183_236_154_027e-4,
                    -2.809_389_273_056_349e-3,
                    -9.525_760_463_609_053e-5,
                ),
            },
            europa: MoonConfig {
                radius: EUROPA_RADIUS,
                orbit_radius: EUROPA_ORBIT_RADIUS,
                period: EUROPA_PERIOD,
                inclination: EUROPA_INCLINATION,
                color: EUROPA_COLOR,
                fix: vec3(
                    -4.225_204_973_454_476e-3,
                    1.455_042_185_336_467e-3,
                    -2.034_089_333_849_075e-5,
                ),
            },
            ganymede: MoonConfig {
                radius: GANYMEDE_RADIUS,
                orbit_radius: GANYMEDE_ORBIT_RADIUS,
                period: GANYMEDE_PERIOD,
                inclination: GANYMEDE_INCLINATION,
                color: GANYMEDE_COLOR,
                fix: vec3(
                    -6.923_432_356_916_074e-3,
                    -1.815_842_447_905_196e-3,
                    -1.446_996_387_050_033e-4,
                ),
            },
            callisto: MoonConfig {
                radius: CALLISTO_RADIUS,
                orbit_radius: CALLISTO_ORBIT_RADIUS,
                period: CALLISTO_PERIOD,
                inclination: CALLISTO_INCLINATION,
                color: CALLISTO_COLOR,
                fix: vec3(
                    4.451_900_573_111_861e-3,
                    1.173_723_889_040_994e-2,
                    4.419_630_575_197_735e-4,
                ),
            },

            earth_radius: EARTH_RADIUS,
            earth_orbit_radius: EARTH_ORBIT_RADIUS,
            earth_period: EARTH_PERIOD,

            sun_distance: SUN_JUPITER_DISTANCE,
            sun_period: JUPITER_PERIOD,
            sun_tilt: SUN_TILT,
            sun_fix: vec3(
                -4.003_460_455_018_916,
                1.018_232_818_636_885e-1,
                -2.935_353_231_225_851,
            ),
        }
    }
}
