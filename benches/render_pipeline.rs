//! Benchmarks for a full redraw of the default Julia scene.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use julia_explorer::{Complex, JuliaColourMapKinds, JuliaConfig, PixelRect, RecurrenceKind, Renderer};
use std::hint::black_box;

fn bench_full_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/full_redraw");
    let config = JuliaConfig::default();

    for (w, h) in [(140, 90), (350, 225), (700, 450)] {
        let pixel_rect = PixelRect::new(w, h).unwrap();
        let algorithm = config.build_algorithm(pixel_rect, config.region).unwrap();
        let colour_map = config.build_colour_map();
        let mut renderer = Renderer::new(pixel_rect);

        group.throughput(Throughput::Elements(pixel_rect.size()));
        group.bench_function(BenchmarkId::new("julia", format!("{w}x{h}")), |b| {
            b.iter(|| {
                renderer.draw(&algorithm, &colour_map).unwrap();
                black_box(renderer.framebuffer());
            })
        });
    }

    group.finish();
}

fn bench_recurrences(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/recurrence");
    let pixel_rect = PixelRect::new(200, 130).unwrap();
    group.throughput(Throughput::Elements(pixel_rect.size()));

    for &recurrence in RecurrenceKind::ALL {
        let config = JuliaConfig {
            recurrence,
            ..JuliaConfig::default()
        };
        let algorithm = config.build_algorithm(pixel_rect, config.region).unwrap();
        let colour_map = config.build_colour_map();
        let mut renderer = Renderer::new(pixel_rect);

        group.bench_function(BenchmarkId::new("draw", recurrence.display_name()), |b| {
            b.iter(|| {
                renderer.draw(&algorithm, &colour_map).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_palettes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/palette");
    let pixel_rect = PixelRect::new(200, 130).unwrap();
    group.throughput(Throughput::Elements(pixel_rect.size()));

    for &colour_map_kind in JuliaColourMapKinds::ALL {
        let config = JuliaConfig {
            colour_map_kind,
            constant: Complex::new(-0.8, 0.156),
            ..JuliaConfig::default()
        };
        let algorithm = config.build_algorithm(pixel_rect, config.region).unwrap();
        let colour_map = config.build_colour_map();
        let mut renderer = Renderer::new(pixel_rect);

        group.bench_function(BenchmarkId::new("draw", colour_map_kind.display_name()), |b| {
            b.iter(|| {
                renderer.draw(&algorithm, &colour_map).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_redraw, bench_recurrences, bench_palettes);
criterion_main!(benches);
