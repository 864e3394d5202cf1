//! Benchmark for the similarity engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use imparity_core::{Canvas, Comparator, FigureSnapshot, LineOptions};

fn build_figure(lines: usize, points: usize) -> FigureSnapshot {
    let canvas = Canvas::new();
    let axis = canvas.subplot();
    for index in 0..lines {
        let x: Vec<f64> = (0..points).map(|p| p as f64).collect();
        let y: Vec<f64> = (0..points).map(|p| (p * (index + 1)) as f64).collect();
        axis.plot_with(&x, &y, LineOptions::new().with_label(format!("series {index}")));
    }
    canvas.snapshot().expect("generated data is well formed")
}

fn bench_compare(c: &mut Criterion) {
    let reference = build_figure(50, 200);
    let candidate = build_figure(50, 200);
    let comparator = Comparator::new();

    c.bench_function("compare 50 lines x 200 points", |b| {
        b.iter(|| {
            comparator
                .compare(black_box(&reference), black_box(&candidate))
                .unwrap()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    c.bench_function("snapshot 50 lines x 200 points", |b| {
        b.iter(|| build_figure(black_box(50), black_box(200)))
    });
}

criterion_group!(benches, bench_compare, bench_snapshot);
criterion_main!(benches);
