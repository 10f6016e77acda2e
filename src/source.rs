//! Gravity and anti-gravity point sources.
//!
//! A source is a point mass exerting an inverse-square force on light
//! particles: `|pull| = mass / distance²`, directed toward the source
//! (gravity) or away from it (anti-gravity). Sources are pure data;
//! they never mutate the particles themselves.
//!
//! # Example
//!
//! ```
//! use gravlens::{Source, Vec2};
//!
//! let well = Source::gravity(1000.0, Vec2::new(400.0, 300.0));
//! let pull = well.pull(Vec2::new(200.0, 400.0));
//! assert!(pull.x > 0.0); // points toward the source
//! ```

use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// Whether a source pulls particles in or pushes them out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Inverse-square attraction toward the source (gravity).
    #[default]
    Attract,
    /// Inverse-square repulsion away from the source (anti-gravity).
    Repel,
}

/// A point mass deflecting light.
///
/// The exerted force follows the inverse-square law with no softening:
/// the magnitude at distance `d` is exactly `mass / d²`. The only guard
/// is at `d == 0`, where the pull is the zero vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Source<V> {
    /// Point mass. Larger masses bend light harder.
    pub mass: f32,
    /// World position of the source.
    pub position: V,
    /// Attract (gravity) or repel (anti-gravity).
    pub polarity: Polarity,
}

impl<V: Vector> Source<V> {
    /// A gravity source: pulls light toward `position`.
    pub fn gravity(mass: f32, position: V) -> Self {
        Self {
            mass,
            position,
            polarity: Polarity::Attract,
        }
    }

    /// An anti-gravity source: pushes light away from `position`.
    pub fn antigravity(mass: f32, position: V) -> Self {
        Self {
            mass,
            position,
            polarity: Polarity::Repel,
        }
    }

    /// Instantaneous pull vector exerted on a particle at `at`.
    ///
    /// Magnitude is `mass / d²` where `d` is the distance to the source.
    /// Returns the zero vector when `at` coincides with the source
    /// position, rather than dividing by zero.
    pub fn pull(&self, at: V) -> V {
        let offset = self.position - at;
        let dist = offset.length();
        if dist == 0.0 {
            return V::ZERO;
        }
        let strength = self.mass / (dist * dist);
        let toward = offset * (1.0 / dist);
        match self.polarity {
            Polarity::Attract => toward * strength,
            Polarity::Repel => toward * (-strength),
        }
    }

    /// Distance from `at` to this source's position.
    pub fn distance_from(&self, at: V) -> f32 {
        self.position.distance(at)
    }
}

/// Combined pull of several sources at a point, by direct summation.
///
/// Superposition over mixed gravity/anti-gravity sources has no closed
/// shortcut; each contribution is evaluated and accumulated.
pub fn net_pull<V: Vector>(sources: &[Source<V>], at: V) -> V {
    sources
        .iter()
        .fold(V::ZERO, |acc, source| acc + source.pull(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    #[test]
    fn test_gravity_pull_points_toward_source() {
        let source = Source::gravity(1000.0, Vec2::new(400.0, 300.0));
        let at = Vec2::new(200.0, 400.0);
        let pull = source.pull(at);

        let toward = (source.position - at).normalize();
        let along = pull.normalize().dot(toward);
        assert!((along - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_antigravity_pull_points_away_from_source() {
        let source = Source::antigravity(1000.0, Vec2::new(400.0, 300.0));
        let at = Vec2::new(200.0, 400.0);
        let pull = source.pull(at);

        let away = (at - source.position).normalize();
        let along = pull.normalize().dot(away);
        assert!((along - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pull_magnitude_is_inverse_square() {
        let source = Source::gravity(1000.0, Vec2::new(400.0, 300.0));
        let at = Vec2::new(200.0, 400.0);
        let d = at.distance(source.position);

        let pull = source.pull(at);
        assert!((pull.length() - 1000.0 / (d * d)).abs() < 1e-6);
    }

    #[test]
    fn test_pull_at_source_position_is_zero() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let gravity = Source::gravity(3000.0, position);
        let antigravity = Source::antigravity(3000.0, position);

        assert_eq!(gravity.pull(position), Vec3::ZERO);
        assert_eq!(antigravity.pull(position), Vec3::ZERO);
    }

    #[test]
    fn test_net_pull_is_direct_sum() {
        let sources = [
            Source::gravity(1000.0, Vec2::new(100.0, 0.0)),
            Source::antigravity(500.0, Vec2::new(-50.0, 20.0)),
            Source::gravity(3000.0, Vec2::new(0.0, -80.0)),
        ];
        let at = Vec2::new(10.0, 10.0);

        let expected = sources[0].pull(at) + sources[1].pull(at) + sources[2].pull(at);
        let total = net_pull(&sources, at);
        assert!((total - expected).length() < 1e-6);
    }

    #[test]
    fn test_opposed_equal_sources_cancel_at_midpoint() {
        // A gravity source and an anti-gravity source at the same spot
        // cancel exactly; collinear equidistant gravity sources cancel
        // at the midpoint.
        let pair = [
            Source::gravity(2000.0, Vec2::new(-100.0, 0.0)),
            Source::gravity(2000.0, Vec2::new(100.0, 0.0)),
        ];
        let total = net_pull(&pair, Vec2::ZERO);
        assert!(total.length() < 1e-4);
    }

    #[test]
    fn test_net_pull_with_no_sources_is_zero() {
        let sources: [Source<Vec2>; 0] = [];
        assert_eq!(net_pull(&sources, Vec2::new(5.0, 5.0)), Vec2::ZERO);
    }
}
