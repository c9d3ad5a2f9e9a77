use criterion::{Criterion, criterion_group, criterion_main};
use ruler_charts::api::{ChartConfig, DimensionConfig, RulerChartEngine, SeriesConfig, SeriesValue};
use ruler_charts::core::{LinearScale, PlotPoint, extrapolate_to_boundary, recenter_domain};
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0, 0.0, 1920.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(4_321.123).expect("to pixel");
            let _ = scale.pixel_to_domain(px).expect("from pixel");
        })
    });
}

fn bench_recenter_domain_clamped(c: &mut Criterion) {
    c.bench_function("recenter_domain_clamped", |b| {
        b.iter(|| {
            let _ = recenter_domain(
                black_box((0.0, 10.0)),
                black_box(2.0),
                black_box(Some(0.0)),
                black_box(1000.0),
            )
            .expect("recenter should succeed");
        })
    });
}

fn bench_engine_recenter_8_dimensions(c: &mut Criterion) {
    let dimensions: Vec<DimensionConfig> = (0..8)
        .map(|i| DimensionConfig {
            name: format!("dim{i}"),
            min: Some(0.0),
            max: Some(100.0),
            floor: Some(0.0),
            display_name: format!("Dimension {i}"),
        })
        .collect();
    let series: Vec<SeriesConfig> = (0..5)
        .map(|s| SeriesConfig {
            name: format!("series{s}"),
            data: (0..8)
                .map(|i| SeriesValue {
                    dimension_name: format!("dim{i}"),
                    value: (s * 13 + i * 7) as f64 % 100.0,
                })
                .collect(),
        })
        .collect();
    let config = ChartConfig {
        title: None,
        dimensions,
        series,
    };
    let mut engine = RulerChartEngine::new(config, 1600.0).expect("engine init");

    c.bench_function("engine_recenter_8_dimensions", |b| {
        b.iter(|| {
            engine
                .recenter_on_series(black_box(2))
                .expect("recenter should succeed");
        })
    });
}

fn bench_extrapolate_to_boundary(c: &mut Criterion) {
    c.bench_function("extrapolate_to_boundary", |b| {
        b.iter(|| {
            let _ = extrapolate_to_boundary(
                black_box(PlotPoint::new(0.0, 0.0)),
                black_box(PlotPoint::new(2.0, 4.0)),
                black_box((-5.0, 5.0)),
                black_box((-5.0, 5.0)),
            )
            .expect("extrapolation should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_recenter_domain_clamped,
    bench_engine_recenter_8_dimensions,
    bench_extrapolate_to_boundary
);
criterion_main!(benches);
