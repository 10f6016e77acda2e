//! Trace a configured scene and write the result as a PNG.
//!
//! Usage: `gravlens [config.json] [output.png]`
//!
//! With no arguments, runs the classic single-source scene and writes
//! `classic.png`.

use gravlens::{Canvas, FrameClock, SimConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load(&path)?,
        None => SimConfig::default(),
    };
    let output = args.next().unwrap_or_else(|| format!("{}.png", config.name));

    log::info!(
        "scene '{}': {} source(s), {} light(s), {} fan(s)",
        config.name,
        config.sources.len(),
        config.lights.len(),
        config.scatters.len()
    );

    let mut scene = config.scene();
    let mut clock = FrameClock::new();
    clock.set_fixed_delta(Some(config.time_step));

    let mut active = scene.active();
    while active > 0 && scene.frame() < config.max_frames {
        active = scene.step();
        clock.tick();
    }

    let elapsed = clock.elapsed().max(f32::EPSILON);
    log::info!(
        "traced {} frame(s) in {:.3}s ({:.0} frames/s), {} light(s) still moving",
        scene.frame(),
        elapsed,
        scene.frame() as f32 / elapsed,
        active
    );

    let mut canvas = Canvas::from_config(&config.render);
    canvas.draw_scene(&scene, &config.render);
    canvas.save(&output)?;
    log::info!("wrote {}", output);

    Ok(())
}
