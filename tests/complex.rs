#![cfg(feature = "complex")]

use fixalg::{CMat2, CVec2, CVec3, DVec2, Matrix, Vector};
use num_complex::Complex;

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-10;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

// ── Projections ──────────────────────────────────────────────────────

#[test]
fn conjugate_and_magnitude_of_real_components() {
    let v = CVec2::new([c(2.0, 0.0), c(3.0, 0.0)]);
    assert_eq!(v.conjugate(), CVec2::new([c(2.0, -0.0), c(3.0, -0.0)]));
    assert_eq!(v.magnitude(), DVec2::new([2.0, 3.0]));
}

#[test]
fn projections_have_real_shape() {
    let v = CVec3::new([c(1.0, -1.0), c(0.0, 2.0), c(-3.0, 0.0)]);
    let re: Vector<f64, 3> = v.real();
    let im: Vector<f64, 3> = v.imaginary();
    assert_eq!(re, Vector::new([1.0, 0.0, -3.0]));
    assert_eq!(im, Vector::new([-1.0, 2.0, 0.0]));
    assert_eq!(v.conjugate().imaginary(), -im);
}

// ── Arithmetic and norms ─────────────────────────────────────────────

#[test]
fn arithmetic_broadcasts_complex_scalars() {
    let v = CVec2::new([c(1.0, 1.0), c(2.0, -1.0)]);
    let i = Complex::i();
    assert_eq!(v * i, CVec2::new([c(-1.0, 1.0), c(1.0, 2.0)]));
    assert_eq!(i * v, v * i);
    assert_eq!(v + c(1.0, 0.0), CVec2::new([c(2.0, 1.0), c(3.0, -1.0)]));
}

#[test]
fn norms_are_real() {
    let v = CVec2::new([c(3.0, 4.0), c(0.0, -12.0)]);
    assert_eq!(v.norm1(), 17.0);
    assert_eq!(v.norm_max(), 12.0);
    assert!((v.length() - 13.0).abs() < TOL);
    assert!((v.norm_p(2.0) - v.norm2()).abs() < TOL);
}

#[test]
fn dot_does_not_conjugate() {
    let a = CVec2::new([c(0.0, 1.0), c(1.0, 0.0)]);
    // i * i + 1 * 1
    assert_complex_near(a.dot(&a), c(0.0, 0.0), TOL, "dot");
}

// ── Transcendental set ───────────────────────────────────────────────

#[test]
fn euler_identity() {
    let v = CVec2::new([c(0.0, core::f64::consts::PI), c(0.0, 0.0)]);
    let e = v.exp();
    assert_complex_near(e[0], c(-1.0, 0.0), TOL, "e^(i*pi)");
    assert_complex_near(e[1], c(1.0, 0.0), TOL, "e^0");
}

#[test]
fn inverse_functions_round_trip() {
    let v = CVec2::new([c(0.3, 0.2), c(0.5, 0.1)]);
    let checks = [
        (v.sin().asin(), "asin(sin)"),
        (v.cos().acos(), "acos(cos)"),
        (v.tan().atan(), "atan(tan)"),
        (v.exp().ln(), "ln(exp)"),
        (v.sqr().sqrt(), "sqrt(sqr)"),
        (v.reciprocal().reciprocal(), "1/(1/z)"),
    ];
    for (got, msg) in checks {
        for k in 0..2 {
            assert_complex_near(got[k], v[k], TOL, msg);
        }
    }
}

#[test]
fn hyperbolic_matches_trig_identity() {
    // cosh(z)^2 - sinh(z)^2 = 1
    let v = CVec2::new([c(0.7, -0.4), c(1.5, 2.0)]);
    let one = v.cosh().sqr() - v.sinh().sqr();
    for k in 0..2 {
        assert_complex_near(one[k], c(1.0, 0.0), 1e-9, "cosh^2 - sinh^2");
    }
    let t = v.tanh() - v.sinh().zip_map(v.cosh(), |s, c| s / c);
    assert!(t.norm_max() < TOL);
}

#[test]
fn power_operand_forms() {
    let v = CVec2::new([c(1.0, 1.0), c(-2.0, 0.0)]);

    let squared = CVec2::pow(v, c(2.0, 0.0));
    let real_squared = CVec2::pow_real(v, 2.0);
    for k in 0..2 {
        assert_complex_near(squared[k], v.sqr()[k], TOL, "pow complex");
        assert_complex_near(real_squared[k], v.sqr()[k], TOL, "pow real");
    }

    let per_component = CVec2::pow_real(v, DVec2::new([1.0, 3.0]));
    assert_complex_near(per_component[1], c(-8.0, 0.0), TOL, "(-2)^3");

    let base_two = CVec2::pow_real_base(2.0, CVec2::new([c(0.0, 0.0), c(10.0, 0.0)]));
    assert_complex_near(base_two[1], c(1024.0, 0.0), 1e-9, "2^10");
}

#[test]
fn logarithms_in_real_bases() {
    let v = CVec2::new([c(8.0, 0.0), c(0.0, 1.0)]);
    let l2 = v.log2();
    assert_complex_near(l2[0], c(3.0, 0.0), TOL, "log2(8)");
    let by_base = CVec2::log(v, DVec2::new([2.0, core::f64::consts::E]));
    assert_complex_near(by_base[1], c(0.0, core::f64::consts::FRAC_PI_2), TOL, "ln(i)");
}

#[test]
fn polar_coordinates() {
    let v = CVec2::from_polar_coordinates(DVec2::new([2.0, 1.0]), core::f64::consts::FRAC_PI_2);
    assert_complex_near(v[0], c(0.0, 2.0), TOL, "2∠90°");
    assert_complex_near(v[1], c(0.0, 1.0), TOL, "1∠90°");

    let back = CVec2::from_polar_coordinates(v.magnitude(), v.phase());
    for k in 0..2 {
        assert_complex_near(back[k], v[k], TOL, "round trip");
    }
}

#[test]
fn domain_edges_propagate() {
    let z = CVec2::zero();
    assert!(z.reciprocal()[0].re.is_nan());
    assert!(z.ln()[0].re.is_infinite());
}

// ── Matrices ─────────────────────────────────────────────────────────

#[test]
fn complex_solve() {
    let a = CMat2::new([[c(2.0, 1.0), c(1.0, 0.0)], [c(1.0, -1.0), c(3.0, 2.0)]]);
    let b = CVec2::new([c(5.0, 3.0), c(7.0, 4.0)]);

    let x = a.solve(&b).unwrap();
    let ax = a * x;
    for r in 0..2 {
        assert_complex_near(ax[r], b[r], TOL, &format!("row {}", r));
    }
}

#[test]
fn complex_determinant() {
    // Rows [1+i, i], [2, 1-i]: (1+i)(1-i) - 2i = 2 - 2i
    let a = CMat2::from_rows([
        CVec2::new([c(1.0, 1.0), c(0.0, 1.0)]),
        CVec2::new([c(2.0, 0.0), c(1.0, -1.0)]),
    ]);
    assert_complex_near(a.determinant(), c(2.0, -2.0), TOL, "det");
}

#[test]
fn complex_inverse() {
    let a = Matrix::<C, 3, 3>::new([
        [c(4.0, 1.0), c(1.0, 0.0), c(0.0, -1.0)],
        [c(1.0, 0.0), c(3.0, 0.0), c(1.0, 1.0)],
        [c(0.0, 2.0), c(1.0, -1.0), c(5.0, 0.0)],
    ]);
    let prod = a * a.inverse().unwrap();
    let id = Matrix::<C, 3, 3>::identity();
    for i in 0..9 {
        assert_complex_near(prod[i], id[i], TOL, &format!("field {}", i));
    }
}

#[test]
fn gram_matrix_is_hermitian() {
    let a = Matrix::<C, 2, 3>::new([
        [c(1.0, 2.0), c(0.0, -1.0), c(3.0, 0.0)],
        [c(-1.0, 1.0), c(2.0, 2.0), c(0.0, 1.0)],
    ]);
    let g = a.conjugate_transposed() * a;
    assert_eq!((g.ncols(), g.nrows()), (2, 2));
    for col in 0..2 {
        for row in 0..2 {
            assert_complex_near(g[(col, row)], g[(row, col)].conj(), TOL, "hermitian");
        }
        assert!(g[(col, col)].im.abs() < TOL);
    }
    assert!((g[(0, 0)].re - a.column(0).norm2().powi(2)).abs() < TOL);
}

#[test]
fn complex_matrix_projections() {
    let m = CMat2::new([[c(3.0, 4.0), c(0.0, 1.0)], [c(-1.0, 0.0), c(0.0, 0.0)]]);
    assert_eq!(m.magnitude(), Matrix::new([[5.0, 1.0], [1.0, 0.0]]));
    assert_eq!(m.conjugate()[(0, 0)], c(3.0, -4.0));
    assert_eq!(m.norm_max(), 5.0);
}
