use crate::Num;

#[cfg(feature = "f32")]
pub use std::f32::consts::PI;
#[cfg(feature = "f64")]
pub use std::f64::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;

/// Scene length units per kilometer
pub const UNIT: Num = 1.0 / 18216.0;

/// Astronomical unit in km
pub const AU_KM: Num = 149_597_870.7;

/// Astronomical unit in scene length units
pub const AU: Num = AU_KM * UNIT;

pub const JUPITER_RADIUS: Num = 69_911.0 * UNIT;

/// Jupiter's heliocentric orbital period in days
pub const JUPITER_PERIOD: Num = 4_332.589;

pub const IO_RADIUS: Num = 1_821.3 * UNIT;
pub const IO_ORBIT_RADIUS: Num = 421_769.0 * UNIT;
/// Orbital period in days
pub const IO_PERIOD: Num = 1.769_138;
pub const IO_INCLINATION: Num = 0.036 * PI / 180.0;
pub const IO_COLOR: u32 = 0xFFFF00;

pub const EUROPA_RADIUS: Num = 1_565.0 * UNIT;
pub const EUROPA_ORBIT_RADIUS: Num = 671_079.0 * UNIT;
pub const EUROPA_PERIOD: Num = 3.551_810;
pub const EUROPA_INCLINATION: Num = 0.464 * PI / 180.0;
pub const EUROPA_COLOR: u32 = 0xFFFFFF;

pub const GANYMEDE_RADIUS: Num = 2_634.0 * UNIT;
pub const GANYMEDE_ORBIT_RADIUS: Num = 1_070_042.0 * UNIT;
pub const GANYMEDE_PERIOD: Num = 7.154_553;
pub const GANYMEDE_INCLINATION: Num = 0.186 * PI / 180.0;
pub const GANYMEDE_COLOR: u32 = 0x00FF00;

pub const CALLISTO_RADIUS: Num = 2_403.0 * UNIT;
pub const CALLISTO_ORBIT_RADIUS: Num = 1_883_000.0 * UNIT;
pub const CALLISTO_PERIOD: Num = 16.689_018;
pub const CALLISTO_INCLINATION: Num = 0.281 * PI / 180.0;
pub const CALLISTO_COLOR: u32 = 0xFF00FF;

pub const EARTH_RADIUS: Num = 6_371.0 * UNIT;
pub const EARTH_ORBIT_RADIUS: Num = AU;
/// Sidereal year in days
pub const EARTH_PERIOD: Num = 365.256_36;
pub const EARTH_COLOR: u32 = 0x0000FF;

/// Mean Sun-Jupiter distance in scene length units
pub const SUN_JUPITER_DISTANCE: Num = 5.3 * AU;

/// Tilt of Jupiter's orbital plane seen from the jovicentric frame
pub const SUN_TILT: Num = -6.09 * PI / 180.0;
pub const SUN_COLOR: u32 = 0xFFFFFF;
