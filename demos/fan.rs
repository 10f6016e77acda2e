//! # Ray Fan
//!
//! A cone of light rays sweeping past a gravity / anti-gravity pair.
//! The fan combines an evenly spaced arc with a handful of randomly
//! jittered rays; the traced paths show rays curving into the gravity
//! well while the anti-gravity source carves a gap below it.
//!
//! Run with: `cargo run --example fan`

use gravlens::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let fan = Scatter::new(Vec2::new(100.0, 300.0), 5.0)
        .arc(-30.0, 30.0, 12)
        .random_arc(0.0, 20.0, 8, &mut rand::thread_rng());

    let mut scene = Scene::new()
        .with_source(Source::gravity(3000.0, Vec2::new(450.0, 250.0)))
        .with_source(Source::antigravity(3000.0, Vec2::new(450.0, 380.0)))
        .with_lights(fan.lights())
        .with_time_step(0.1)
        .with_stop_distance(3.0)
        .with_max_frames(2000);

    let frames = scene.trace();
    log::info!(
        "traced {} frame(s); {} of {} rays still moving",
        frames,
        scene.active(),
        scene.lights().len()
    );

    let style = RenderConfig::default();
    let mut canvas = Canvas::from_config(&style);
    canvas.draw_scene(&scene, &style);
    canvas.save("fan.png")?;
    println!("wrote fan.png");

    Ok(())
}
