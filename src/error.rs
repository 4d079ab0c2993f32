use crate::BodyId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A zero or negative orbital period makes the angular rate undefined.
    #[error("orbital period must be positive")]
    DegenerateOrbit,

    /// Trace sampling requires a positive step size.
    #[error("trace step must be positive")]
    InvalidStep,

    /// The queried body is not tracked by the system.
    #[error("unknown body: {0}")]
    UnknownBody(BodyId),

    /// An ephemeris entry carried a non-finite coordinate.
    #[error("malformed ephemeris entry for {0}")]
    MalformedEphemeris(BodyId),
}
