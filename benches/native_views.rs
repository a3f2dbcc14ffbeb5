//! Benchmarks comparing zero-copy native views against converting copies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_typemap::convert::{as_native, to_native};
use sparse_typemap::{CssMkl, PardisoMkl};

/// Generate matrix values with specific patterns
fn generate_values(size: usize) -> Vec<f64> {
    (0..size).map(|i| (i as f64 * 0.1).sin() * 100.0).collect()
}

fn bench_real_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_values");

    for &size in &[1_000, 100_000, 1_000_000] {
        let values = generate_values(size);

        group.bench_with_input(BenchmarkId::new("view", size), &values, |b, values| {
            b.iter(|| as_native::<CssMkl, f64>(black_box(values)).map(|v| v.len()))
        });

        group.bench_with_input(BenchmarkId::new("copy", size), &values, |b, values| {
            b.iter(|| to_native::<CssMkl, f64>(black_box(values)))
        });
    }

    group.finish();
}

fn bench_index_widening(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_widening");

    for &size in &[1_000, 100_000] {
        let indices: Vec<i32> = (0..size as i32).collect();
        group.bench_with_input(BenchmarkId::new("i32", size), &indices, |b, indices| {
            b.iter(|| to_native::<PardisoMkl, i32>(black_box(indices)))
        });
    }

    group.finish();
}

#[cfg(feature = "complex")]
fn bench_complex_values(c: &mut Criterion) {
    use sparse_typemap::Complex;

    let mut group = c.benchmark_group("complex_values");
    let values: Vec<Complex<f64>> = generate_values(100_000)
        .chunks(2)
        .map(|p| Complex::new(p[0], p[1]))
        .collect();

    group.bench_function("view", |b| {
        b.iter(|| as_native::<CssMkl, Complex<f64>>(black_box(&values)).map(|v| v.len()))
    });
    group.bench_function("copy", |b| {
        b.iter(|| to_native::<CssMkl, Complex<f64>>(black_box(&values)))
    });

    group.finish();
}

#[cfg(not(feature = "complex"))]
fn bench_complex_values(_c: &mut Criterion) {}

criterion_group!(
    benches,
    bench_real_values,
    bench_index_widening,
    bench_complex_values
);
criterion_main!(benches);
