//! # Lensing Fan
//!
//! The standalone RK4 experiment: a fan of light rays in physical
//! units passing a heavy lens mass on the way to an observer plane.
//! Paths are projected onto the z/y plane and written as a PNG, with
//! the arrival offsets logged per ray.
//!
//! Run with: `cargo run --example lensing_fan`

use glam::DVec3;
use gravlens::lensing::{ray_fan, trace_ray, LensMass, TraceParams};
use gravlens::{Canvas, Vec2};
use image::Rgb;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let masses = [LensMass::new(1e26, DVec3::ZERO)];
    let source = DVec3::new(0.0, -100.0, -500.0);
    let observer = DVec3::new(0.0, 0.0, 500.0);
    let params = TraceParams {
        time_step: 1e-8,
        max_steps: 10_000,
        observer_z: observer.z,
    };

    // Canvas shows z left-to-right and y top-to-bottom.
    let mut canvas = Canvas::new(800, 480, Rgb([0, 0, 0]))
        .with_view(Vec2::new(500.0, 300.0), 0.8);
    canvas.draw_disk(Vec2::ZERO, 12.0, Rgb([255, 255, 0]));
    canvas.draw_disk(Vec2::new(source.z as f32, source.y as f32), 8.0, Rgb([255, 0, 0]));
    canvas.draw_disk(Vec2::new(observer.z as f32, observer.y as f32), 8.0, Rgb([0, 255, 0]));

    for (i, ray) in ray_fan(source, observer, 5, 100.0).into_iter().enumerate() {
        let launch_y = ray.position.y;
        let path = trace_ray(ray, &masses, &params);
        let end = path.last().copied().unwrap_or_default();
        log::info!(
            "ray {}: launched y={:+.1} m, arrived y={:+.3} m after {} steps",
            i,
            launch_y,
            end.y,
            path.len() - 1
        );

        let projected: Vec<Vec2> = path
            .iter()
            .map(|p| Vec2::new(p.z as f32, p.y as f32))
            .collect();
        canvas.draw_path(&projected, 2.0, Rgb([0, 160, 255]));
    }

    canvas.save("lensing_fan.png")?;
    println!("wrote lensing_fan.png");

    Ok(())
}
