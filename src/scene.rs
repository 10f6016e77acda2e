//! Scene builder and stepping loop.
//!
//! A [`Scene`] owns the sources and lights of one simulation and
//! advances them frame by frame. Configure with method chaining, then
//! either call [`Scene::step`] yourself (real-time style) or let
//! [`Scene::trace`] run the whole thing to quiescence (full-path
//! style).
//!
//! # Example
//!
//! ```
//! use gravlens::{Light, Scene, Source, Vec2};
//!
//! let mut scene = Scene::new()
//!     .with_source(Source::gravity(3000.0, Vec2::new(400.0, 300.0)))
//!     .with_light(Light::new(Vec2::new(200.0, 400.0), Vec2::new(1.0, 0.0)))
//!     .with_time_step(0.1)
//!     .with_stop_distance(3.0)
//!     .with_max_frames(2000);
//!
//! let frames = scene.trace();
//! assert!(frames > 0);
//! ```

use crate::light::Light;
use crate::source::{net_pull, Source};
use crate::vector::Vector;

/// How the source pull moves a light each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Propagation {
    /// The pull is a velocity increment applied straight to the
    /// position each frame, and the heading bends by the raw pull
    /// (fall / drift / bend). This is the classic behavior.
    #[default]
    Direct,
    /// The pull accelerates a per-light velocity
    /// (`velocity += pull * force_scale * dt`), and the position
    /// integrates that velocity plus a constant drift along the
    /// heading. The heading itself never changes.
    Kinetic,
}

/// A configured simulation: sources, lights, and stepping parameters.
#[derive(Clone, Debug)]
pub struct Scene<V: Vector> {
    sources: Vec<Source<V>>,
    lights: Vec<Light<V>>,
    /// Per-light velocity, used only in kinetic propagation.
    velocities: Vec<V>,
    time_step: f32,
    stop_distance: f32,
    max_frames: u32,
    force_scale: f32,
    propagation: Propagation,
    frame: u32,
}

impl<V: Vector> Scene<V> {
    /// An empty scene with the classic defaults: time step 0.1,
    /// stopping distance 3, frame cap 2000, force scale 0.01.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            lights: Vec::new(),
            velocities: Vec::new(),
            time_step: 0.1,
            stop_distance: 3.0,
            max_frames: 2000,
            force_scale: 0.01,
            propagation: Propagation::Direct,
            frame: 0,
        }
    }

    /// Add one source.
    pub fn with_source(mut self, source: Source<V>) -> Self {
        self.sources.push(source);
        self
    }

    /// Add several sources.
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = Source<V>>) -> Self {
        self.sources.extend(sources);
        self
    }

    /// Add one light.
    pub fn with_light(mut self, light: Light<V>) -> Self {
        self.lights.push(light);
        self.velocities.push(V::ZERO);
        self
    }

    /// Add several lights.
    pub fn with_lights(mut self, lights: impl IntoIterator<Item = Light<V>>) -> Self {
        for light in lights {
            self.lights.push(light);
            self.velocities.push(V::ZERO);
        }
        self
    }

    /// Set the integration time step (seconds per frame).
    pub fn with_time_step(mut self, time_step: f32) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the distance below which a light freezes near a source.
    pub fn with_stop_distance(mut self, stop_distance: f32) -> Self {
        self.stop_distance = stop_distance;
        self
    }

    /// Cap the number of frames [`Scene::trace`] may run.
    pub fn with_max_frames(mut self, max_frames: u32) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Set the acceleration multiplier for kinetic propagation.
    pub fn with_force_scale(mut self, force_scale: f32) -> Self {
        self.force_scale = force_scale;
        self
    }

    /// Choose how the pull moves lights (direct or kinetic).
    pub fn with_propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    /// The sources in this scene.
    pub fn sources(&self) -> &[Source<V>] {
        &self.sources
    }

    /// The lights in this scene, with their accumulated paths.
    pub fn lights(&self) -> &[Light<V>] {
        &self.lights
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Number of lights still moving.
    pub fn active(&self) -> usize {
        self.lights.iter().filter(|light| !light.stopped()).count()
    }

    /// Advance every moving light by one frame.
    ///
    /// Returns the number of lights still moving afterwards.
    pub fn step(&mut self) -> usize {
        match self.propagation {
            Propagation::Direct => {
                for light in &mut self.lights {
                    light.step(&self.sources, self.time_step, self.stop_distance);
                }
            }
            Propagation::Kinetic => {
                for (light, velocity) in self.lights.iter_mut().zip(&mut self.velocities) {
                    if light.stopped() {
                        continue;
                    }
                    let pull = net_pull(&self.sources, light.position);
                    *velocity += pull * (self.force_scale * self.time_step);
                    let offset = (*velocity + light.direction) * self.time_step;
                    light.advance(offset, &self.sources, self.stop_distance);
                }
            }
        }
        self.frame += 1;
        self.active()
    }

    /// Run until every light has frozen or the frame cap is reached.
    ///
    /// Returns the number of frames executed by this call.
    pub fn trace(&mut self) -> u32 {
        let start = self.frame;
        let mut active = self.active();
        while active > 0 && self.frame < self.max_frames {
            let remaining = self.step();
            if remaining < active {
                log::debug!(
                    "{} light(s) froze at frame {}",
                    active - remaining,
                    self.frame
                );
            }
            active = remaining;
        }
        let frames = self.frame - start;
        log::debug!(
            "trace finished: {} frames, {}/{} lights still moving",
            frames,
            active,
            self.lights.len()
        );
        frames
    }
}

impl<V: Vector> Default for Scene<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_empty_scene_traces_zero_frames() {
        let mut scene: Scene<Vec2> = Scene::new();
        assert_eq!(scene.trace(), 0);
        assert_eq!(scene.frame(), 0);
    }

    #[test]
    fn test_zero_frame_cap_never_steps() {
        let mut scene = Scene::new()
            .with_source(Source::gravity(1000.0, Vec2::ZERO))
            .with_light(Light::new(Vec2::new(100.0, 0.0), Vec2::new(1.0, 0.0)))
            .with_max_frames(0);
        assert_eq!(scene.trace(), 0);
    }

    #[test]
    fn test_trace_respects_frame_cap() {
        // A light drifting away from a weak source never freezes.
        let mut scene = Scene::new()
            .with_source(Source::gravity(1.0, Vec2::ZERO))
            .with_light(Light::new(Vec2::new(100.0, 0.0), Vec2::new(10.0, 0.0)))
            .with_max_frames(25);

        assert_eq!(scene.trace(), 25);
        assert_eq!(scene.active(), 1);
        // A second call is a no-op: the cap was already reached.
        assert_eq!(scene.trace(), 0);
    }

    #[test]
    fn test_trace_stops_when_all_lights_freeze() {
        let mut scene = Scene::new()
            .with_source(Source::gravity(1e6, Vec2::new(50.0, 0.0)))
            .with_light(Light::new(Vec2::ZERO, Vec2::new(1.0, 0.0)))
            .with_stop_distance(10.0)
            .with_max_frames(2000);

        let frames = scene.trace();
        assert!(frames < 2000);
        assert_eq!(scene.active(), 0);
    }

    #[test]
    fn test_kinetic_with_zero_force_scale_is_uniform_drift() {
        let mut scene = Scene::new()
            .with_source(Source::gravity(5000.0, Vec2::new(0.0, 500.0)))
            .with_light(Light::new(Vec2::ZERO, Vec2::new(2.0, 0.0)))
            .with_propagation(Propagation::Kinetic)
            .with_force_scale(0.0)
            .with_time_step(0.5);

        for _ in 0..4 {
            scene.step();
        }
        let light = &scene.lights()[0];
        assert!((light.position - Vec2::new(4.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_kinetic_velocity_curves_toward_gravity() {
        // Drifting along +x past a source above: the accumulated
        // velocity must have pulled the light upward.
        let mut scene = Scene::new()
            .with_source(Source::gravity(50_000.0, Vec2::new(10.0, 40.0)))
            .with_light(Light::new(Vec2::ZERO, Vec2::new(1.0, 0.0)))
            .with_propagation(Propagation::Kinetic)
            .with_force_scale(1.0)
            .with_stop_distance(1.0);

        for _ in 0..20 {
            scene.step();
        }
        assert!(scene.lights()[0].position.y > 0.0);
    }

    #[test]
    fn test_direct_mode_bends_heading() {
        let mut scene = Scene::new()
            .with_source(Source::gravity(10_000.0, Vec2::new(50.0, 50.0)))
            .with_light(Light::new(Vec2::ZERO, Vec2::new(1.0, 0.0)))
            .with_stop_distance(1.0);

        scene.step();
        // After one frame the heading has absorbed the pull.
        assert!(scene.lights()[0].direction.y > 0.0);
    }

    #[test]
    fn test_step_counts_frames() {
        let mut scene = Scene::new()
            .with_light(Light::new(Vec2::ZERO, Vec2::new(1.0, 0.0)));
        scene.step();
        scene.step();
        assert_eq!(scene.frame(), 2);
    }
}
