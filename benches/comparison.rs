use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: well-conditioned matrices for inverse and solve
// ---------------------------------------------------------------------------

fn fixalg_dominant_4() -> fixalg::DMat4 {
    fixalg::DMat4::from_fn(|c, r| ((c + 1) * (r + 2)) as f64 + if c == r { 20.0 } else { 0.0 })
}

fn nalgebra_dominant_4() -> nalgebra::Matrix4<f64> {
    // nalgebra's `from_fn` is (row, col).
    nalgebra::Matrix4::from_fn(|r, c| ((c + 1) * (r + 2)) as f64 + if c == r { 20.0 } else { 0.0 })
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_3x3");

    g.bench_function("fixalg", |b| {
        let a = fixalg::DMat3::from_fn(|c, r| (c * 3 + r + 1) as f64);
        let m = fixalg::DMat3::from_fn(|c, r| (c + r + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix3::from_fn(|r, c| (c * 3 + r + 1) as f64);
        let m = nalgebra::Matrix3::from_fn(|r, c| (c + r + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

fn matmul_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_4x4");

    g.bench_function("fixalg", |b| {
        let a = fixalg::DMat4::from_fn(|c, r| (c * 4 + r + 1) as f64);
        let m = fixalg::DMat4::from_fn(|c, r| (c + r + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix4::from_fn(|r, c| (c * 4 + r + 1) as f64);
        let m = nalgebra::Matrix4::from_fn(|r, c| (c + r + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

fn matvec_4(c: &mut Criterion) {
    let mut g = c.benchmark_group("matvec_4");

    g.bench_function("fixalg", |b| {
        let a = fixalg_dominant_4();
        let v = fixalg::DVec4::new([1.0, -2.0, 3.0, -4.0]);
        b.iter(|| std::hint::black_box(a) * std::hint::black_box(v))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_dominant_4();
        let v = nalgebra::Vector4::new(1.0, -2.0, 3.0, -4.0);
        b.iter(|| std::hint::black_box(a) * std::hint::black_box(v))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Square-matrix algebra
// ---------------------------------------------------------------------------

fn inverse_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse_4x4");

    g.bench_function("fixalg", |b| {
        let a = fixalg_dominant_4();
        b.iter(|| std::hint::black_box(&a).inverse())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_dominant_4();
        b.iter(|| std::hint::black_box(&a).try_inverse())
    });

    g.finish();
}

fn determinant_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("determinant_4x4");

    g.bench_function("fixalg", |b| {
        let a = fixalg_dominant_4();
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_dominant_4();
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.finish();
}

fn solve_4(c: &mut Criterion) {
    let mut g = c.benchmark_group("solve_4");

    g.bench_function("fixalg", |b| {
        let a = fixalg_dominant_4();
        let rhs = fixalg::DVec4::new([1.0, 2.0, 3.0, 4.0]);
        b.iter(|| std::hint::black_box(&a).solve(std::hint::black_box(&rhs)))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_dominant_4();
        let rhs = nalgebra::Vector4::new(1.0, 2.0, 3.0, 4.0);
        b.iter(|| std::hint::black_box(a).lu().solve(std::hint::black_box(&rhs)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Vector operations
// ---------------------------------------------------------------------------

fn vector_ops_3(c: &mut Criterion) {
    let mut g = c.benchmark_group("vector_ops_3");

    g.bench_function("fixalg", |b| {
        let u = fixalg::DVec3::new([1.0, 2.0, 3.0]);
        let v = fixalg::DVec3::new([-0.5, 4.0, 0.25]);
        b.iter(|| {
            let (u, v) = (std::hint::black_box(u), std::hint::black_box(v));
            (u.cross(&v).normalized(), u.dot(&v), (u - v).length())
        })
    });

    g.bench_function("nalgebra", |b| {
        let u = nalgebra::Vector3::new(1.0, 2.0, 3.0);
        let v = nalgebra::Vector3::new(-0.5, 4.0, 0.25);
        b.iter(|| {
            let (u, v) = (std::hint::black_box(u), std::hint::black_box(v));
            (u.cross(&v).normalize(), u.dot(&v), (u - v).norm())
        })
    });

    g.finish();
}

fn elementwise_sin_4(c: &mut Criterion) {
    let mut g = c.benchmark_group("elementwise_sin_4");

    g.bench_function("fixalg", |b| {
        let v = fixalg::DVec4::new([0.1, 0.2, 0.3, 0.4]);
        b.iter(|| std::hint::black_box(v).sin())
    });

    g.bench_function("nalgebra", |b| {
        let v = nalgebra::Vector4::new(0.1_f64, 0.2, 0.3, 0.4);
        b.iter(|| std::hint::black_box(v).map(f64::sin))
    });

    g.finish();
}

criterion_group!(
    benches,
    matmul_3x3,
    matmul_4x4,
    matvec_4,
    inverse_4x4,
    determinant_4x4,
    solve_4,
    vector_ops_3,
    elementwise_sin_4,
);
criterion_main!(benches);
