//! Static trajectory plots.
//!
//! A [`Canvas`] rasterizes a traced 2D scene to a PNG: source disks,
//! light dots, and the accumulated paths as polylines. Coordinates are
//! screen-like (origin top-left, y down), matching the scene setups
//! that describe positions in window pixels, with an optional pan
//! offset and zoom applied before rasterizing.
//!
//! # Example
//!
//! ```
//! use gravlens::{Canvas, RenderConfig, Scene, SimConfig};
//!
//! let config = SimConfig::default();
//! let mut scene = config.scene();
//! scene.trace();
//!
//! let mut canvas = Canvas::from_config(&config.render);
//! canvas.draw_scene(&scene, &config.render);
//! # let _ = canvas.image();
//! ```

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::scene::Scene;
use crate::source::Polarity;
use glam::Vec2;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// A raster target with a world-to-pixel view transform.
pub struct Canvas {
    image: RgbImage,
    offset: Vec2,
    zoom: f32,
}

impl Canvas {
    /// A canvas of the given size filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, background),
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// A canvas sized and colored per a [`RenderConfig`], with its pan
    /// and zoom applied.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.width, config.height, Rgb(config.background))
            .with_view(Vec2::from_array(config.offset), config.zoom)
    }

    /// Set the view transform: `pixel = (world + offset) * zoom`.
    pub fn with_view(mut self, offset: Vec2, zoom: f32) -> Self {
        self.offset = offset;
        self.zoom = zoom;
        self
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The rendered image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// World position to continuous pixel coordinates.
    fn to_pixel(&self, world: Vec2) -> Vec2 {
        (world + self.offset) * self.zoom
    }

    /// Set one pixel; out-of-frame coordinates are ignored.
    fn plot(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64 {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Stamp a filled disk centered at pixel coordinates.
    fn stamp_disk(&mut self, center: Vec2, radius_px: f32, color: Rgb<u8>) {
        let r = radius_px.max(0.5);
        let min_x = (center.x - r).floor() as i64;
        let max_x = (center.x + r).ceil() as i64;
        let min_y = (center.y - r).floor() as i64;
        let max_y = (center.y + r).ceil() as i64;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r * r {
                    self.plot(x, y, color);
                }
            }
        }
    }

    /// Draw a filled disk at a world position; the radius is in world
    /// units and scales with the zoom.
    pub fn draw_disk(&mut self, center: Vec2, radius: f32, color: Rgb<u8>) {
        let px = self.to_pixel(center);
        self.stamp_disk(px, radius * self.zoom, color);
    }

    /// Draw a line segment between two world positions with the given
    /// stroke width in world units.
    pub fn draw_segment(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgb<u8>) {
        let from = self.to_pixel(a);
        let to = self.to_pixel(b);
        let radius = (width * self.zoom * 0.5).max(0.5);

        // Stamp along the segment at half-pixel intervals.
        let length = from.distance(to);
        let steps = (length * 2.0).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disk(from + (to - from) * t, radius, color);
        }
    }

    /// Draw a polyline through the given world positions.
    pub fn draw_path(&mut self, path: &[Vec2], width: f32, color: Rgb<u8>) {
        for pair in path.windows(2) {
            self.draw_segment(pair[0], pair[1], width, color);
        }
    }

    /// Draw a whole scene: source disks, then the light paths, then
    /// the light dots on top.
    pub fn draw_scene(&mut self, scene: &Scene<Vec2>, style: &RenderConfig) {
        for source in scene.sources() {
            let color = match source.polarity {
                Polarity::Attract => Rgb(style.gravity_color),
                Polarity::Repel => Rgb(style.antigravity_color),
            };
            self.draw_disk(source.position, style.source_radius, color);
        }
        for light in scene.lights() {
            self.draw_path(light.path(), style.path_width, Rgb(style.path_color));
        }
        for light in scene.lights() {
            self.draw_disk(light.position, style.light_radius, Rgb(style.light_color));
        }
    }

    /// Write the canvas to a PNG file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        self.image.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn test_canvas_starts_as_background() {
        let canvas = Canvas::new(16, 8, Rgb([10, 20, 30]));
        assert_eq!(canvas.width(), 16);
        assert_eq!(canvas.height(), 8);
        assert_eq!(*canvas.image().get_pixel(0, 0), Rgb([10, 20, 30]));
        assert_eq!(*canvas.image().get_pixel(15, 7), Rgb([10, 20, 30]));
    }

    #[test]
    fn test_disk_paints_center() {
        let mut canvas = Canvas::new(32, 32, BLACK);
        canvas.draw_disk(Vec2::new(16.0, 16.0), 3.0, WHITE);
        assert_eq!(*canvas.image().get_pixel(16, 16), WHITE);
        // Well outside the disk stays background.
        assert_eq!(*canvas.image().get_pixel(2, 2), BLACK);
    }

    #[test]
    fn test_out_of_frame_drawing_is_ignored() {
        let mut canvas = Canvas::new(16, 16, BLACK);
        canvas.draw_disk(Vec2::new(-100.0, -100.0), 5.0, WHITE);
        canvas.draw_segment(
            Vec2::new(-50.0, 200.0),
            Vec2::new(300.0, 200.0),
            2.0,
            WHITE,
        );
        for pixel in canvas.image().pixels() {
            assert_eq!(*pixel, BLACK);
        }
    }

    #[test]
    fn test_segment_connects_endpoints() {
        let mut canvas = Canvas::new(32, 32, BLACK);
        canvas.draw_segment(Vec2::new(4.0, 16.0), Vec2::new(28.0, 16.0), 2.0, WHITE);
        for x in 5..27 {
            assert_eq!(*canvas.image().get_pixel(x, 16), WHITE);
        }
    }

    #[test]
    fn test_view_transform_pans_and_zooms() {
        let mut canvas = Canvas::new(64, 64, BLACK).with_view(Vec2::new(10.0, 10.0), 2.0);
        // World (5, 5) -> pixel ((5+10)*2, (5+10)*2) = (30, 30).
        canvas.draw_disk(Vec2::new(5.0, 5.0), 1.0, WHITE);
        assert_eq!(*canvas.image().get_pixel(30, 30), WHITE);
    }

    #[test]
    fn test_draw_scene_paints_sources_and_light() {
        let config = SimConfig::default();
        let scene = config.scene();

        let mut canvas = Canvas::from_config(&config.render);
        canvas.draw_scene(&scene, &config.render);

        // The gravity source disk sits at (400, 300), the untraced
        // light dot at its launch point (200, 400).
        assert_eq!(
            *canvas.image().get_pixel(400, 300),
            Rgb(config.render.gravity_color)
        );
        assert_eq!(
            *canvas.image().get_pixel(200, 400),
            Rgb(config.render.light_color)
        );
    }

    #[test]
    fn test_draw_scene_paints_traced_path() {
        use crate::light::Light;

        // Drift-only scene: the path is a straight line along y = 300.
        let mut scene: Scene<Vec2> = Scene::new()
            .with_light(Light::new(Vec2::new(100.0, 300.0), Vec2::new(1.0, 0.0)))
            .with_time_step(1.0)
            .with_max_frames(50);
        scene.trace();

        let config = SimConfig::default();
        let mut canvas = Canvas::from_config(&config.render);
        canvas.draw_scene(&scene, &config.render);

        assert_eq!(
            *canvas.image().get_pixel(120, 300),
            Rgb(config.render.path_color)
        );
    }
}
