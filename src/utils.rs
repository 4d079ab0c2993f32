use crate::Vec3;

/// Converts an ecliptic (z-up) vector, as ephemeris feeds supply them,
/// into the scene's y-up convention.
pub fn zup2yup(Vec3 { x, y, z }: Vec3) -> Vec3 {
    Vec3 { x, y: z, z: y }
}
