use tracing::debug;

use crate::error::Error;
use crate::system::{BodyId, OrbitalSystem};
use crate::{Num, Vec3};

/// Builds per-body polylines of past motion by scanning a time window.
///
/// The sampler drives [`OrbitalSystem::update`] across the window
/// independently of the live display time; a full build finishes by
/// restoring the system to the window's center so the live state is
/// never left at the last sample.
#[derive(Debug, Clone, Default)]
pub struct TraceSampler {
    traces: Vec<(BodyId, Vec<Vec3>)>,
}

impl TraceSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a body for tracing. Registration order is polyline
    /// order; registering a body twice is a no-op.
    pub fn trace_body(&mut self, id: BodyId) {
        if !self.traces.iter().any(|(b, _)| *b == id) {
            self.traces.push((id, Vec::new()));
        }
    }

    /// Drops all recorded polylines, keeping the registrations.
    pub fn clear_trace(&mut self) {
        for (_, line) in self.traces.iter_mut() {
            line.clear();
        }
    }

    /// Rebuilds every registered polyline from scratch over
    /// `[center_t - half_window, center_t + half_window]`.
    ///
    /// Samples land at `start, start + step, ..` and the count is
    /// `floor((end - start) / step) + 1`, with a one-ulp-scale guard so
    /// an exact-multiple window keeps its endpoint despite float drift.
    /// Afterwards the system is restored to `center_t`.
    pub fn build_trace(
        &mut self,
        system: &mut OrbitalSystem,
        center_t: Num,
        half_window: Num,
        step: Num,
    ) -> Result<(), Error> {
        // written this way round so NaN fails too
        if !(step > 0.0) {
            return Err(Error::InvalidStep);
        }

        self.clear_trace();
        self.scan(system, center_t - half_window, center_t + half_window, step)?;

        // leave the live state at the window center, not the last sample
        system.update(center_t);

        Ok(())
    }

    /// Appends samples over `[from_t, to_t]` without clearing.
    ///
    /// Unlike a full build this leaves the system at the last sampled
    /// time; the caller owns the live cursor when extending.
    pub fn extend_trace(
        &mut self,
        system: &mut OrbitalSystem,
        from_t: Num,
        to_t: Num,
        step: Num,
    ) -> Result<(), Error> {
        if !(step > 0.0) {
            return Err(Error::InvalidStep);
        }

        self.scan(system, from_t, to_t, step)
    }

    fn scan(
        &mut self,
        system: &mut OrbitalSystem,
        start: Num,
        end: Num,
        step: Num,
    ) -> Result<(), Error> {
        for (id, _) in self.traces.iter() {
            if !system.contains(*id) {
                return Err(Error::UnknownBody(*id));
            }
        }

        let ratio = (end - start) / step;
        let steps = (ratio * (1.0 + Num::EPSILON * 8.0)).max(0.0).floor() as usize;

        for i in 0..=steps {
            let t = start + i as Num * step;
            system.update(t);

            for (id, line) in self.traces.iter_mut() {
                line.push(system.position(*id)?);
            }
        }

        debug!(samples = steps + 1, start, end, "sampled trace window");

        Ok(())
    }

    /// The recorded polyline for `id`, in chronological order.
    pub fn polyline(&self, id: BodyId) -> Result<&[Vec3], Error> {
        self.traces
            .iter()
            .find(|(b, _)| *b == id)
            .map(|(_, line)| line.as_slice())
            .ok_or(Error::UnknownBody(id))
    }

    pub fn traced(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.traces.iter().map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OrbitalBody, SystemConfig};

    fn traced_system() -> (OrbitalSystem, TraceSampler) {
        let system = OrbitalSystem::galilean(&SystemConfig::default()).unwrap();

        let mut sampler = TraceSampler::new();
        for id in [BodyId::Io, BodyId::Europa, BodyId::Ganymede, BodyId::Callisto] {
            sampler.trace_body(id);
        }

        (system, sampler)
    }

    #[test]
    fn sample_count_matches_the_window() {
        let (mut system, mut sampler) = traced_system();

        sampler.build_trace(&mut system, 0.0, 5.0, 0.025).unwrap();

        // floor(10 / 0.025) + 1
        for id in sampler.traced().collect::<Vec<_>>() {
            assert_eq!(sampler.polyline(id).unwrap().len(), 401);
        }
    }

    #[test]
    fn rebuild_is_idempotent() {
        let (mut system, mut sampler) = traced_system();

        sampler.build_trace(&mut system, 2.0, 3.0, 0.25).unwrap();
        let first = sampler.polyline(BodyId::Io).unwrap().to_vec();

        sampler.build_trace(&mut system, 2.0, 3.0, 0.25).unwrap();
        let second = sampler.polyline(BodyId::Io).unwrap().to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn build_restores_the_center_time() {
        let (mut system, mut sampler) = traced_system();

        system.update(1.5);
        let at_center: Vec<_> = system.bodies().map(|(_, b)| b.position()).collect();

        sampler.build_trace(&mut system, 1.5, 4.0, 0.5).unwrap();
        let restored: Vec<_> = system.bodies().map(|(_, b)| b.position()).collect();

        assert_eq!(at_center, restored);
    }

    #[test]
    fn samples_are_chronological() {
        let (mut system, mut sampler) = traced_system();

        sampler.build_trace(&mut system, 0.0, 1.0, 0.5).unwrap();
        let line = sampler.polyline(BodyId::Io).unwrap();

        assert_eq!(line.len(), 5);

        // first sample is the position at the window start
        system.update(-1.0);
        assert_eq!(line[0], system.position(BodyId::Io).unwrap());

        system.update(1.0);
        assert_eq!(line[4], system.position(BodyId::Io).unwrap());
    }

    #[test]
    fn extend_appends_to_existing_polylines() {
        let (mut system, mut sampler) = traced_system();

        sampler.build_trace(&mut system, 0.0, 1.0, 0.5).unwrap();
        sampler.extend_trace(&mut system, 1.5, 2.5, 0.5).unwrap();

        assert_eq!(sampler.polyline(BodyId::Io).unwrap().len(), 8);
    }

    #[test]
    fn clear_drops_the_polylines() {
        let (mut system, mut sampler) = traced_system();

        sampler.build_trace(&mut system, 0.0, 1.0, 0.5).unwrap();
        sampler.clear_trace();

        assert!(sampler.polyline(BodyId::Io).unwrap().is_empty());
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let (mut system, mut sampler) = traced_system();

        assert_eq!(
            sampler.build_trace(&mut system, 0.0, 5.0, 0.0).unwrap_err(),
            Error::InvalidStep
        );
        assert_eq!(
            sampler
                .extend_trace(&mut system, 0.0, 5.0, -0.1)
                .unwrap_err(),
            Error::InvalidStep
        );
    }

    #[test]
    fn nan_step_is_rejected() {
        let (mut system, mut sampler) = traced_system();

        assert_eq!(
            sampler
                .build_trace(&mut system, 0.0, 5.0, Num::NAN)
                .unwrap_err(),
            Error::InvalidStep
        );
        assert_eq!(
            sampler
                .extend_trace(&mut system, 0.0, 5.0, Num::NAN)
                .unwrap_err(),
            Error::InvalidStep
        );

        // a failed build records nothing
        assert!(sampler.polyline(BodyId::Io).unwrap().is_empty());
    }

    #[test]
    fn tracing_an_untracked_body_fails() {
        let mut system = OrbitalSystem::new();
        system.add_body(
            BodyId::Io,
            OrbitalBody::new(1.0, 1.769, 0.0, 0xFFFF00).unwrap(),
        );

        let mut sampler = TraceSampler::new();
        sampler.trace_body(BodyId::Europa);

        assert_eq!(
            sampler.build_trace(&mut system, 0.0, 1.0, 0.5).unwrap_err(),
            Error::UnknownBody(BodyId::Europa)
        );
    }
}
