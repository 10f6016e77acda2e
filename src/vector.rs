//! Vector abstraction shared by the 2D and 3D simulations.
//!
//! The deflection physics needs only a handful of operations: zero,
//! length, distance, dot product, and safe normalization. This trait
//! exposes exactly those, implemented for [`glam::Vec2`] and
//! [`glam::Vec3`], so sources, lights, and scenes are written once and
//! instantiated per dimension.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Operations the deflection physics requires of a position/direction type.
///
/// Implemented for [`glam::Vec2`] (flat scenes) and [`glam::Vec3`]
/// (spatial scenes). Downstream types like [`Source`](crate::Source)
/// and [`Light`](crate::Light) are generic over this trait.
pub trait Vector:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + Mul<f32, Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The zero vector.
    const ZERO: Self;

    /// Euclidean length.
    fn length(self) -> f32;

    /// Squared length (avoids the square root when only comparing).
    fn length_squared(self) -> f32;

    /// Euclidean distance to `other`.
    fn distance(self, other: Self) -> f32;

    /// Dot product with `other`.
    fn dot(self, other: Self) -> f32;

    /// Unit vector, or zero when the length is zero.
    fn normalize_or_zero(self) -> Self;
}

impl Vector for glam::Vec2 {
    const ZERO: Self = glam::Vec2::ZERO;

    #[inline]
    fn length(self) -> f32 {
        glam::Vec2::length(self)
    }

    #[inline]
    fn length_squared(self) -> f32 {
        glam::Vec2::length_squared(self)
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        glam::Vec2::distance(self, other)
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        glam::Vec2::dot(self, other)
    }

    #[inline]
    fn normalize_or_zero(self) -> Self {
        glam::Vec2::normalize_or_zero(self)
    }
}

impl Vector for glam::Vec3 {
    const ZERO: Self = glam::Vec3::ZERO;

    #[inline]
    fn length(self) -> f32 {
        glam::Vec3::length(self)
    }

    #[inline]
    fn length_squared(self) -> f32 {
        glam::Vec3::length_squared(self)
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        glam::Vec3::distance(self, other)
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        glam::Vec3::dot(self, other)
    }

    #[inline]
    fn normalize_or_zero(self) -> Self {
        glam::Vec3::normalize_or_zero(self)
    }
}
