//! Ray fans: many lights sharing an origin.
//!
//! A scatter spreads lights from one point across a set of polar
//! angles, all at the same speed. Use explicit angles, an evenly
//! spaced arc, or a random spread:
//!
//! ```
//! use gravlens::{Scatter, Vec2};
//!
//! // Eight rays covering a quarter turn, speed 5.
//! let lights = Scatter::new(Vec2::new(50.0, 100.0), 5.0)
//!     .arc(0.0, 90.0, 8)
//!     .lights();
//! assert_eq!(lights.len(), 8);
//! ```

use crate::light::Light;
use glam::Vec2;
use rand::Rng;

/// Heading at `angle_deg` degrees with magnitude `speed`.
///
/// Angles follow the usual convention: 0° along +x, growing
/// counterclockwise.
pub fn polar_to_cartesian(speed: f32, angle_deg: f32) -> Vec2 {
    let theta = angle_deg.to_radians();
    Vec2::new(speed * theta.cos(), speed * theta.sin())
}

/// A fan of lights emitted from a single origin.
#[derive(Clone, Debug)]
pub struct Scatter {
    /// Shared origin of every ray.
    pub origin: Vec2,
    /// Heading magnitude of every ray.
    pub speed: f32,
    angles_deg: Vec<f32>,
}

impl Scatter {
    /// An empty scatter at `origin` with ray speed `speed`.
    pub fn new(origin: Vec2, speed: f32) -> Self {
        Self {
            origin,
            speed,
            angles_deg: Vec::new(),
        }
    }

    /// Add explicit ray angles, in degrees.
    pub fn with_angles(mut self, angles_deg: impl IntoIterator<Item = f32>) -> Self {
        self.angles_deg.extend(angles_deg);
        self
    }

    /// Add `count` rays evenly spaced from `start_deg` to `end_deg`
    /// inclusive.
    pub fn arc(mut self, start_deg: f32, end_deg: f32, count: u32) -> Self {
        match count {
            0 => {}
            1 => self.angles_deg.push((start_deg + end_deg) * 0.5),
            _ => {
                let span = end_deg - start_deg;
                for i in 0..count {
                    let t = i as f32 / (count - 1) as f32;
                    self.angles_deg.push(start_deg + span * t);
                }
            }
        }
        self
    }

    /// Add `count` rays at random angles within `spread_deg` of
    /// `center_deg`.
    pub fn random_arc(
        mut self,
        center_deg: f32,
        spread_deg: f32,
        count: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let half = spread_deg * 0.5;
        for _ in 0..count {
            self.angles_deg
                .push(center_deg + rng.gen_range(-half..=half));
        }
        self
    }

    /// The configured angles, in degrees.
    pub fn angles(&self) -> &[f32] {
        &self.angles_deg
    }

    /// Build one light per configured angle.
    pub fn lights(&self) -> Vec<Light<Vec2>> {
        self.angles_deg
            .iter()
            .map(|&angle| Light::new(self.origin, polar_to_cartesian(self.speed, angle)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_polar_to_cartesian_axes() {
        assert!((polar_to_cartesian(5.0, 0.0) - Vec2::new(5.0, 0.0)).length() < 1e-5);
        assert!((polar_to_cartesian(5.0, 90.0) - Vec2::new(0.0, 5.0)).length() < 1e-5);
        assert!((polar_to_cartesian(5.0, 180.0) - Vec2::new(-5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_fan_headings_have_requested_speed() {
        let lights = Scatter::new(Vec2::new(50.0, 100.0), 3.0)
            .with_angles([0.0, 45.0, 90.0, 135.0])
            .lights();

        assert_eq!(lights.len(), 4);
        for light in &lights {
            assert_eq!(light.position, Vec2::new(50.0, 100.0));
            assert!((light.direction.length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_arc_is_evenly_spaced_inclusive() {
        let scatter = Scatter::new(Vec2::ZERO, 1.0).arc(0.0, 90.0, 4);
        let angles = scatter.angles();
        assert_eq!(angles.len(), 4);
        assert!((angles[0] - 0.0).abs() < 1e-5);
        assert!((angles[1] - 30.0).abs() < 1e-5);
        assert!((angles[2] - 60.0).abs() < 1e-5);
        assert!((angles[3] - 90.0).abs() < 1e-5);
    }

    #[test]
    fn test_arc_single_ray_is_centered() {
        let scatter = Scatter::new(Vec2::ZERO, 1.0).arc(10.0, 30.0, 1);
        assert_eq!(scatter.angles(), &[20.0]);
    }

    #[test]
    fn test_random_arc_stays_within_spread() {
        let mut rng = SmallRng::seed_from_u64(7);
        let scatter = Scatter::new(Vec2::ZERO, 1.0).random_arc(90.0, 40.0, 64, &mut rng);
        assert_eq!(scatter.angles().len(), 64);
        for &angle in scatter.angles() {
            assert!((70.0..=110.0).contains(&angle));
        }
    }
}
