//! The simulated light particle.
//!
//! A [`Light`] carries a position, a heading, and the full history of
//! positions it has visited. Each frame it undergoes three phases, in
//! order:
//!
//! 1. **fall** - the net source pull displaces the position directly
//!    (`position += pull * dt`), and the particle freezes if it is now
//!    within the stopping distance of any source;
//! 2. **drift** - the heading displaces the position
//!    (`position += direction * dt`);
//! 3. **bend** - the net pull is folded into the heading
//!    (`direction += pull`, no time step), so the ray curves on later
//!    frames.
//!
//! Once frozen, a light never moves again: all three phases become
//! no-ops and the path stops growing.

use crate::source::{net_pull, Source};
use crate::vector::Vector;

/// A light particle being deflected by point sources.
#[derive(Clone, Debug)]
pub struct Light<V> {
    /// Current position.
    pub position: V,
    /// Current heading. Mutated by [`Light::bend`].
    pub direction: V,
    stopped: bool,
    path: Vec<V>,
}

impl<V: Vector> Light<V> {
    /// A light at `position` heading along `direction`.
    ///
    /// The path history starts with the initial position.
    pub fn new(position: V, direction: V) -> Self {
        Self {
            position,
            direction,
            stopped: false,
            path: vec![position],
        }
    }

    /// Whether this light has frozen near a source.
    #[inline]
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Every position this light has occupied, in visit order.
    #[inline]
    pub fn path(&self) -> &[V] {
        &self.path
    }

    /// Displace the position by the net source pull over one time step.
    ///
    /// The pull is evaluated at the pre-step position. If the new
    /// position is within `stop_distance` of any source, the light
    /// freezes and subsequent phases do nothing.
    pub fn fall(&mut self, sources: &[Source<V>], time_step: f32, stop_distance: f32) {
        if self.stopped {
            return;
        }
        let pull = net_pull(sources, self.position);
        self.position += pull * time_step;
        self.path.push(self.position);

        if sources
            .iter()
            .any(|source| source.distance_from(self.position) <= stop_distance)
        {
            self.stopped = true;
        }
    }

    /// Displace the position along the heading over one time step.
    pub fn drift(&mut self, time_step: f32) {
        if self.stopped {
            return;
        }
        self.position += self.direction * time_step;
        self.path.push(self.position);
    }

    /// Fold the net source pull into the heading.
    ///
    /// The raw pull is accumulated without a time step factor; this is
    /// what makes the trajectory curve rather than merely displace.
    pub fn bend(&mut self, sources: &[Source<V>]) {
        if self.stopped {
            return;
        }
        self.direction += net_pull(sources, self.position);
    }

    /// One full frame: fall, then drift, then bend.
    pub fn step(&mut self, sources: &[Source<V>], time_step: f32, stop_distance: f32) {
        self.fall(sources, time_step, stop_distance);
        self.drift(time_step);
        self.bend(sources);
    }

    /// Displace by an externally computed offset, with the stop check.
    ///
    /// Used by the kinetic propagation mode, where the scene integrates
    /// a per-light velocity instead of applying the pull directly.
    pub(crate) fn advance(&mut self, offset: V, sources: &[Source<V>], stop_distance: f32) {
        if self.stopped {
            return;
        }
        self.position += offset;
        self.path.push(self.position);

        if sources
            .iter()
            .any(|source| source.distance_from(self.position) <= stop_distance)
        {
            self.stopped = true;
        }
    }
}
