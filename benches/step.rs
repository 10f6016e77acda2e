//! Benchmarks for scene stepping and the RK4 integrator.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use glam::DVec3;
use gravlens::lensing::{rk4_step, LensMass, Ray};
use gravlens::{net_pull, Light, Scatter, Scene, Source, Vec2};

fn lattice_scene() -> Scene<Vec2> {
    let mut scene = Scene::new().with_stop_distance(3.0);
    for row in 0..4 {
        for col in 0..16 {
            let position = Vec2::new(col as f32 * 60.0, 200.0 + row as f32 * 50.0);
            let source = if (row + col) % 2 == 0 {
                Source::gravity(1000.0, position)
            } else {
                Source::antigravity(1000.0, position)
            };
            scene = scene.with_source(source);
        }
    }
    for i in 0..8 {
        let fan = Scatter::new(Vec2::new(i as f32 * 120.0, 50.0), 5.0).arc(60.0, 120.0, 7);
        scene = scene.with_lights(fan.lights());
    }
    scene
}

fn bench_net_pull(c: &mut Criterion) {
    let sources: Vec<Source<Vec2>> = (0..64)
        .map(|i| Source::gravity(1000.0, Vec2::new(i as f32 * 10.0, (i % 8) as f32 * 25.0)))
        .collect();

    c.bench_function("net_pull_64_sources", |b| {
        b.iter(|| black_box(net_pull(&sources, black_box(Vec2::new(321.0, 99.0)))))
    });
}

fn bench_scene_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_step");

    group.bench_function("single_light", |b| {
        let scene = Scene::new()
            .with_source(Source::gravity(3000.0, Vec2::new(400.0, 300.0)))
            .with_light(Light::new(Vec2::new(200.0, 400.0), Vec2::new(1.0, 0.0)));
        b.iter_batched(
            || scene.clone(),
            |mut scene| {
                scene.step();
                black_box(scene.frame())
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("lattice_64_sources_56_rays", |b| {
        let scene = lattice_scene();
        b.iter_batched(
            || scene.clone(),
            |mut scene| {
                scene.step();
                black_box(scene.frame())
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_rk4(c: &mut Criterion) {
    let masses = [LensMass::new(1e16, DVec3::ZERO)];
    let ray = Ray::toward(DVec3::new(0.0, -100.0, -500.0), DVec3::new(0.0, 0.0, 500.0));

    c.bench_function("rk4_step_single_mass", |b| {
        b.iter(|| black_box(rk4_step(black_box(&ray), 1e-8, &masses)))
    });
}

criterion_group!(benches, bench_net_pull, bench_scene_step, bench_rk4);
criterion_main!(benches);
