//! # Source Lattice
//!
//! Rows of alternating gravity and anti-gravity sources with fans of
//! rays falling through them from above. Adjacent rows are offset by
//! half a cell, so every ray threads a different sequence of pulls
//! and pushes.
//!
//! Run with: `cargo run --example lattice`

use gravlens::prelude::*;

const MASS: f32 = 1000.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut scene = Scene::new()
        .with_time_step(0.1)
        .with_stop_distance(3.0)
        .with_max_frames(2000);

    // Three rows; gravity on the grid points, anti-gravity offset by
    // half a cell, swapping roles row by row.
    for (row, y) in [300.0f32, 350.0, 400.0].into_iter().enumerate() {
        for i in 0..10 {
            let on_grid = Vec2::new(i as f32 * 100.0, y);
            let off_grid = Vec2::new(50.0 + i as f32 * 100.0, y);
            let (gravity_pos, anti_pos) = if row % 2 == 0 {
                (on_grid, off_grid)
            } else {
                (off_grid, on_grid)
            };
            scene = scene
                .with_source(Source::gravity(MASS, gravity_pos))
                .with_source(Source::antigravity(MASS, anti_pos));
        }
    }

    // Eight fans raining rays down onto the lattice.
    for i in 0..8 {
        let origin = Vec2::new(50.0 + i as f32 * 100.0, 100.0);
        let fan = Scatter::new(origin, 5.0).arc(60.0, 120.0, 7);
        scene = scene.with_lights(fan.lights());
    }

    let frames = scene.trace();
    log::info!(
        "traced {} frame(s); {} of {} rays still moving",
        frames,
        scene.active(),
        scene.lights().len()
    );

    let style = RenderConfig {
        width: 1000,
        height: 700,
        source_radius: 6.0,
        light_radius: 3.0,
        ..RenderConfig::default()
    };
    let mut canvas = Canvas::from_config(&style);
    canvas.draw_scene(&scene, &style);
    canvas.save("lattice.png")?;
    println!("wrote lattice.png");

    Ok(())
}
