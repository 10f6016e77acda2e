//! # Gravlens - light deflection around point masses
//!
//! Toy lensing simulations with a simple, declarative API.
//!
//! Gravlens traces light particles past "gravity" and "anti-gravity"
//! point sources. Each source exerts an inverse-square pull or push
//! (`mass / distance²`), particles integrate with a plain Euler step,
//! and a particle freezes once it comes within a stopping distance of
//! a source. Traced paths can be rasterized to PNG.
//!
//! ## Quick Start
//!
//! ```
//! use gravlens::{Light, Scene, Source, Vec2};
//!
//! let mut scene = Scene::new()
//!     .with_source(Source::gravity(3000.0, Vec2::new(400.0, 300.0)))
//!     .with_source(Source::antigravity(1000.0, Vec2::new(550.0, 350.0)))
//!     .with_light(Light::new(Vec2::new(200.0, 400.0), Vec2::new(1.0, 0.0)))
//!     .with_time_step(0.1)
//!     .with_stop_distance(3.0)
//!     .with_max_frames(500);
//!
//! scene.trace();
//! let path = scene.lights()[0].path();
//! assert!(path.len() > 1);
//! ```
//!
//! ## Core Concepts
//!
//! ### Sources
//!
//! A [`Source`] is a point mass with a [`Polarity`]: `Attract` pulls
//! light toward it, `Repel` pushes it away. Magnitude follows the
//! inverse-square law with a zero-vector guard when a particle sits
//! exactly on the source.
//!
//! ### Lights
//!
//! A [`Light`] carries a position, a heading, and its full path
//! history. Every frame it falls toward the sources, drifts along its
//! heading, and bends the heading by the accumulated pull. See the
//! [`Light`] docs for the exact phase ordering.
//!
//! ### Scenes
//!
//! A [`Scene`] owns sources and lights and steps them together, in
//! either of two propagation modes:
//!
//! | Mode | Behavior |
//! |------|----------|
//! | [`Propagation::Direct`] | pull displaces position, heading bends |
//! | [`Propagation::Kinetic`] | pull accelerates a velocity, heading is a constant drift |
//!
//! ### Everything else
//!
//! - [`Scatter`] builds fans of rays from one origin.
//! - [`Canvas`] rasterizes a traced scene to PNG.
//! - [`SimConfig`] describes a whole scene as JSON.
//! - [`FrameClock`] times real-time stepping loops.
//! - [`lensing`] is a standalone RK4 experiment in physical units;
//!   it shares nothing with [`Scene`] on purpose.

mod clock;
pub mod config;
mod error;
pub mod lensing;
mod light;
mod render;
mod scatter;
mod scene;
mod source;
mod vector;

pub use clock::FrameClock;
pub use config::{
    LightConfig, PropagationConfig, RenderConfig, ScatterConfig, SimConfig, SourceConfig,
};
pub use error::{ConfigError, RenderError};
pub use glam::{Vec2, Vec3};
pub use light::Light;
pub use render::Canvas;
pub use scatter::{polar_to_cartesian, Scatter};
pub use scene::{Propagation, Scene};
pub use source::{net_pull, Polarity, Source};
pub use vector::Vector;

/// Convenient re-exports for common usage.
///
/// ```
/// use gravlens::prelude::*;
///
/// let source = Source::gravity(1000.0, Vec2::new(400.0, 300.0));
/// assert_eq!(source.pull(source.position), Vec2::ZERO);
/// ```
pub mod prelude {
    pub use crate::clock::FrameClock;
    pub use crate::config::{RenderConfig, SimConfig};
    pub use crate::light::Light;
    pub use crate::render::Canvas;
    pub use crate::scatter::Scatter;
    pub use crate::scene::{Propagation, Scene};
    pub use crate::source::{net_pull, Polarity, Source};
    pub use crate::vector::Vector;
    pub use crate::{Vec2, Vec3};
}
