//! Scene configuration files.
//!
//! A [`SimConfig`] is the JSON equivalent of the original control
//! panel: stepping parameters, a scene description (sources, lights,
//! ray fans), and render styling. Every field has a default, so a
//! config file only needs to name what it changes.
//!
//! ```json
//! {
//!   "name": "flyby",
//!   "sources": [
//!     { "mass": 3000.0, "position": [400.0, 300.0] },
//!     { "mass": 1000.0, "position": [550.0, 300.0], "polarity": "repel" }
//!   ],
//!   "lights": [
//!     { "position": [200.0, 400.0], "direction": [1.0, 0.0] }
//!   ]
//! }
//! ```

use crate::error::ConfigError;
use crate::light::Light;
use crate::scatter::Scatter;
use crate::scene::{Propagation, Scene};
use crate::source::{Polarity, Source};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_name() -> String {
    "untitled".into()
}

fn default_time_step() -> f32 {
    0.1
}

fn default_stop_distance() -> f32 {
    3.0
}

fn default_max_frames() -> u32 {
    2000
}

fn default_force_scale() -> f32 {
    0.01
}

/// Complete simulation configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Integration time step per frame.
    #[serde(default = "default_time_step")]
    pub time_step: f32,
    /// Distance below which a light freezes near a source.
    #[serde(default = "default_stop_distance")]
    pub stop_distance: f32,
    /// Frame cap for tracing.
    #[serde(default = "default_max_frames")]
    pub max_frames: u32,
    /// Acceleration multiplier, used by kinetic propagation only.
    #[serde(default = "default_force_scale")]
    pub force_scale: f32,
    #[serde(default)]
    pub propagation: PropagationConfig,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub lights: Vec<LightConfig>,
    #[serde(default)]
    pub scatters: Vec<ScatterConfig>,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for SimConfig {
    /// The classic single-source scene: mass 3000 at the center of an
    /// 800x600 frame, one light launched from the left heading right.
    fn default() -> Self {
        Self {
            name: "classic".into(),
            time_step: default_time_step(),
            stop_distance: default_stop_distance(),
            max_frames: default_max_frames(),
            force_scale: default_force_scale(),
            propagation: PropagationConfig::Direct,
            sources: vec![SourceConfig {
                mass: 3000.0,
                position: [400.0, 300.0],
                polarity: Polarity::Attract,
            }],
            lights: vec![LightConfig {
                position: [200.0, 400.0],
                direction: [1.0, 0.0],
            }],
            scatters: Vec::new(),
            render: RenderConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Save this configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Build the described [`Scene`].
    ///
    /// Scatter fans are expanded into individual lights, appended
    /// after the explicitly listed ones.
    pub fn scene(&self) -> Scene<Vec2> {
        let mut scene = Scene::new()
            .with_time_step(self.time_step)
            .with_stop_distance(self.stop_distance)
            .with_max_frames(self.max_frames)
            .with_force_scale(self.force_scale)
            .with_propagation(self.propagation.into())
            .with_sources(self.sources.iter().map(SourceConfig::source))
            .with_lights(self.lights.iter().map(LightConfig::light));
        for scatter in &self.scatters {
            scene = scene.with_lights(scatter.scatter().lights());
        }
        scene
    }
}

/// Serialized form of [`Propagation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationConfig {
    #[default]
    Direct,
    Kinetic,
}

impl From<PropagationConfig> for Propagation {
    fn from(config: PropagationConfig) -> Self {
        match config {
            PropagationConfig::Direct => Propagation::Direct,
            PropagationConfig::Kinetic => Propagation::Kinetic,
        }
    }
}

/// One point source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub mass: f32,
    pub position: [f32; 2],
    #[serde(default)]
    pub polarity: Polarity,
}

impl SourceConfig {
    fn source(&self) -> Source<Vec2> {
        Source {
            mass: self.mass,
            position: Vec2::from_array(self.position),
            polarity: self.polarity,
        }
    }
}

/// One light particle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    pub position: [f32; 2],
    pub direction: [f32; 2],
}

impl LightConfig {
    fn light(&self) -> Light<Vec2> {
        Light::new(
            Vec2::from_array(self.position),
            Vec2::from_array(self.direction),
        )
    }
}

/// One ray fan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScatterConfig {
    pub origin: [f32; 2],
    pub speed: f32,
    /// Ray angles in degrees.
    pub angles: Vec<f32>,
}

impl ScatterConfig {
    fn scatter(&self) -> Scatter {
        Scatter::new(Vec2::from_array(self.origin), self.speed)
            .with_angles(self.angles.iter().copied())
    }
}

/// Render styling: canvas geometry and the color palette.
///
/// Defaults reproduce the original palette: black background, red
/// gravity sources, blue anti-gravity sources, green lights, cyan
/// paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
    pub gravity_color: [u8; 3],
    pub antigravity_color: [u8; 3],
    pub light_color: [u8; 3],
    pub path_color: [u8; 3],
    /// Source disk radius in world units.
    pub source_radius: f32,
    /// Light dot radius in world units.
    pub light_radius: f32,
    /// Path stroke width in world units.
    pub path_width: f32,
    /// View zoom factor.
    pub zoom: f32,
    /// View pan offset, added to world positions before zooming.
    pub offset: [f32; 2],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: [0, 0, 0],
            gravity_color: [255, 0, 0],
            antigravity_color: [0, 0, 255],
            light_color: [0, 255, 0],
            path_color: [0, 255, 255],
            source_radius: 10.0,
            light_radius: 10.0,
            path_width: 2.0,
            zoom: 1.0,
            offset: [0.0, 0.0],
        }
    }
}
