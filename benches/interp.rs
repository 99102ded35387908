use criterion::{criterion_group, criterion_main, Criterion};

use interpolant::{select_best, CubicSpline, FixedCubic, LagrangePoly, NewtonPoly};

// ---------------------------------------------------------------------------
// Helpers: deterministic smooth sample series
// ---------------------------------------------------------------------------

fn sample_series(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64 * 10.0 / (n - 1) as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| 20.0 + (0.6 * x).sin() - 0.3 * x).collect();
    (xs, ys)
}

// ---------------------------------------------------------------------------
// Fit
// ---------------------------------------------------------------------------

fn fit_16(c: &mut Criterion) {
    let mut g = c.benchmark_group("fit_16");
    let (xs, ys) = sample_series(16);

    g.bench_function("lagrange", |b| {
        b.iter(|| {
            LagrangePoly::new(
                std::hint::black_box(xs.clone()),
                std::hint::black_box(ys.clone()),
            )
            .unwrap()
        })
    });

    g.bench_function("newton", |b| {
        b.iter(|| {
            NewtonPoly::new(
                std::hint::black_box(xs.clone()),
                std::hint::black_box(ys.clone()),
            )
            .unwrap()
        })
    });

    g.bench_function("spline_natural", |b| {
        b.iter(|| {
            CubicSpline::natural(
                std::hint::black_box(xs.clone()),
                std::hint::black_box(ys.clone()),
            )
            .unwrap()
        })
    });

    g.finish();
}

fn fit_fixed_cubic(c: &mut Criterion) {
    let mut g = c.benchmark_group("fit_fixed_cubic");
    let (xs, ys) = sample_series(4);

    g.bench_function("vandermonde_4x4", |b| {
        b.iter(|| FixedCubic::new(std::hint::black_box(&xs), std::hint::black_box(&ys)).unwrap())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Eval
// ---------------------------------------------------------------------------

fn eval_16(c: &mut Criterion) {
    let mut g = c.benchmark_group("eval_16");
    let (xs, ys) = sample_series(16);

    let lagrange = LagrangePoly::new(xs.clone(), ys.clone()).unwrap();
    g.bench_function("lagrange", |b| {
        b.iter(|| lagrange.eval(std::hint::black_box(4.321)))
    });

    let newton = NewtonPoly::new(xs.clone(), ys.clone()).unwrap();
    g.bench_function("newton", |b| {
        b.iter(|| newton.eval(std::hint::black_box(4.321)))
    });

    let spline = CubicSpline::natural(xs, ys).unwrap();
    g.bench_function("spline_natural", |b| {
        b.iter(|| spline.eval(std::hint::black_box(4.321)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Incremental append vs rebuild
// ---------------------------------------------------------------------------

fn append_16th_point(c: &mut Criterion) {
    let mut g = c.benchmark_group("append_16th_point");
    let (xs, ys) = sample_series(16);

    let base = NewtonPoly::new(xs[..15].to_vec(), ys[..15].to_vec()).unwrap();
    g.bench_function("clone_and_push", |b| {
        b.iter(|| {
            let mut p = base.clone();
            p.push(std::hint::black_box(xs[15]), std::hint::black_box(ys[15]))
                .unwrap();
            p
        })
    });

    g.bench_function("rebuild", |b| {
        b.iter(|| {
            NewtonPoly::new(
                std::hint::black_box(xs.clone()),
                std::hint::black_box(ys.clone()),
            )
            .unwrap()
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Cross-validated selection
// ---------------------------------------------------------------------------

fn select_16(c: &mut Criterion) {
    let mut g = c.benchmark_group("select_16");
    let (xs, ys) = sample_series(16);

    g.bench_function("loocv", |b| {
        b.iter(|| select_best(std::hint::black_box(&xs), std::hint::black_box(&ys)).unwrap())
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    fit_16,
    fit_fixed_cubic,
    eval_16,
    append_16th_point,
    select_16,
);
criterion_main!(benches);
