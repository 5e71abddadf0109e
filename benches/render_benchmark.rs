//! Rendering Benchmarks
//!
//! Benchmarks for the summary, correlation and dashboard views over
//! synthetic datasets of increasing size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use termlytics::render::{render_text, Renderer, ViewType};
use termlytics::{Dataset, Scalar};

/// Create a synthetic dataset with numeric and text columns
fn create_dataset(n_rows: usize, n_numeric: usize) -> Dataset {
    // Simple LCG random generator for reproducibility
    let mut rng_state: u64 = 42;
    let mut rand_f64 = || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (rng_state >> 33) as f64 / (u32::MAX as f64)
    };

    let mut columns: Vec<(String, Vec<Scalar>)> = (0..n_numeric)
        .map(|f| {
            let values = (0..n_rows).map(|_| Scalar::Float(rand_f64() * 100.0)).collect();
            (format!("metric_{}", f), values)
        })
        .collect();

    let regions = ["North", "South", "East", "West"];
    columns.push((
        "region".to_string(),
        (0..n_rows).map(|i| Scalar::from(regions[i % regions.len()])).collect(),
    ));

    Dataset::from_columns(columns).unwrap()
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("views");
    let renderer = Renderer::default();

    for &rows in &[100usize, 1_000, 10_000] {
        let dataset = create_dataset(rows, 4);

        for view in [ViewType::Summary, ViewType::Correlation, ViewType::Dashboard] {
            group.bench_with_input(BenchmarkId::new(view.as_str(), rows), &dataset, |b, ds| {
                b.iter(|| renderer.render(ds.clone(), view, "Bench").unwrap())
            });
        }
    }

    group.finish();
}

fn bench_text_output(c: &mut Criterion) {
    let renderer = Renderer::default();
    let artifact = renderer
        .render(create_dataset(1_000, 4), ViewType::Dashboard, "Bench")
        .unwrap();

    c.bench_function("dashboard_to_text", |b| {
        b.iter(|| render_text(&artifact, 160))
    });
}

criterion_group!(benches, bench_views, bench_text_output);
criterion_main!(benches);
