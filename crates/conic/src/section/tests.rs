use super::*;
use nalgebra::{dmatrix, matrix, vector, DMatrix};
use proptest::prelude::*;

fn unit_circle() -> ConicSection {
    ConicSection::new(matrix![1.0, 0.0; 0.0, 1.0], vector![0.0, 0.0], -1.0).unwrap()
}

#[test]
fn unit_circle_views() {
    let cs = unit_circle();
    assert!(cs.is_proper());
    assert!(!cs.is_degenerate());
    assert!(cs.is_central());
    assert_eq!(cs.center().unwrap(), vector![0.0, 0.0]);
    assert_eq!(
        cs.coefficients().to_array(),
        [1.0, 0.0, 1.0, 0.0, 0.0, -1.0]
    );
    assert_eq!(cs.a33(), Matrix2::identity());
    assert_eq!(cs.v(), vector![0.0, 0.0]);
    assert_eq!(cs.f(), -1.0);
    assert_eq!(cs.conic_type(), Ok(ConicType::Circle));
}

#[test]
fn unit_circle_standard_form() {
    let cs = unit_circle();
    let ce = cs.centered_equation().unwrap();
    assert_eq!(ce.a33, Matrix2::identity());
    assert_eq!(ce.k, 1.0);
    let sf = cs.standard_form().unwrap();
    assert!((sf.a - 1.0).abs() < 1e-12);
    assert!((sf.b - 1.0).abs() < 1e-12);
    assert_eq!(sf.center, vector![0.0, 0.0]);
    // Any orthonormal basis diagonalizes the identity.
    assert!(((sf.rotation.transpose() * sf.rotation) - Matrix2::identity()).norm() < 1e-12);
    assert!((sf.rotation.determinant().abs() - 1.0).abs() < 1e-12);
}

#[test]
fn unit_circle_display() {
    assert_eq!(
        unit_circle().to_string(),
        "1 * x**2 + 0 * x * y + 1 * y**2 + 0 * x + 0 * y + -1 = 0"
    );
}

#[test]
fn hyperbola_example() {
    let cs = ConicSection::new(matrix![1.0, 0.0; 0.0, -1.0], vector![0.0, 0.0], -1.0).unwrap();
    assert!(cs.a33().determinant() < 0.0);
    assert_eq!(cs.conic_type(), Ok(ConicType::Hyperbola));
    assert!(cs.is_central());
    assert_eq!(cs.center().unwrap(), vector![0.0, 0.0]);
}

#[test]
fn parabola_example() {
    // x² − y = 0
    let cs = ConicSection::new(matrix![1.0, 0.0; 0.0, 0.0], vector![0.0, -1.0], 0.0).unwrap();
    assert!(!cs.is_central());
    assert_eq!(cs.conic_type(), Ok(ConicType::Parabola));
    assert!(matches!(cs.center(), Err(ConicError::NotCentral { .. })));
    assert!(matches!(
        cs.centered_equation(),
        Err(ConicError::NotCentral { .. })
    ));
    assert!(matches!(cs.standard_form(), Err(ConicError::NotCentral { .. })));
}

#[test]
fn asymmetric_quadratic_part_rejected() {
    let err = ConicSection::new(matrix![1.0, 2.0; 0.0, 1.0], vector![0.0, 0.0], 1.0).unwrap_err();
    assert_eq!(
        err,
        ConicError::NotSymmetric {
            upper: 2.0,
            lower: 0.0
        }
    );
    assert!(err.is_validation());
}

#[test]
fn dynamic_shapes_checked_in_order() {
    let a33 = dmatrix![1.0, 0.0; 0.0, 1.0];
    let v_col = dmatrix![0.0; 0.0];
    let f = dmatrix![-1.0];

    let ok = ConicSection::from_dynamic(&a33, &v_col, &f).unwrap();
    assert_eq!(ok, unit_circle());
    // A row vector is reshaped into a column.
    let v_row = dmatrix![3.0, 4.0];
    let from_row = ConicSection::from_dynamic(&a33, &v_row, &f).unwrap();
    assert_eq!(from_row.v(), vector![3.0, 4.0]);

    let bad_a33 = DMatrix::<f64>::identity(3, 3);
    let bad_v = dmatrix![1.0; 2.0; 3.0];
    let bad_f = dmatrix![1.0, 2.0];
    // All three shapes wrong: A33 is reported first.
    assert!(matches!(
        ConicSection::from_dynamic(&bad_a33, &bad_v, &bad_f),
        Err(ConicError::Shape { part: "A33", rows: 3, cols: 3, .. })
    ));
    assert!(matches!(
        ConicSection::from_dynamic(&a33, &bad_v, &bad_f),
        Err(ConicError::Shape { part: "v", rows: 3, cols: 1, .. })
    ));
    assert!(matches!(
        ConicSection::from_dynamic(&a33, &v_col, &bad_f),
        Err(ConicError::Shape { part: "F", rows: 1, cols: 2, .. })
    ));
    let skew = dmatrix![1.0, 1.0; -1.0, 1.0];
    assert!(matches!(
        ConicSection::from_dynamic(&skew, &v_col, &f),
        Err(ConicError::NotSymmetric { .. })
    ));
}

#[test]
fn homogeneous_constructor_checks_all_pairs() {
    let mut aq = unit_circle().aq();
    assert!(ConicSection::from_homogeneous(aq).is_ok());
    aq[(2, 0)] = 0.5;
    assert_eq!(
        ConicSection::from_homogeneous(aq),
        Err(ConicError::NotSymmetric {
            upper: 0.0,
            lower: 0.5
        })
    );
}

#[test]
fn eval_matches_polynomial() {
    let cs = ConicSection::from_coefficients(&Coefficients::new(1.0, -2.0, 3.0, 0.5, -1.5, 2.0));
    for p in [vector![0.0, 0.0], vector![1.0, -1.0], vector![2.5, 0.75]] {
        let (x, y) = (p.x, p.y);
        let expected = x * x - 2.0 * x * y + 3.0 * y * y + 0.5 * x - 1.5 * y + 2.0;
        assert!((cs.eval(p) - expected).abs() < 1e-12);
    }
}

fn coeff() -> impl Strategy<Value = f64> {
    -10.0..10.0f64
}

fn small_int() -> impl Strategy<Value = f64> {
    (-5i32..=5).prop_map(f64::from)
}

proptest! {
    #[test]
    fn construction_assembles_blocks(
        a in coeff(), b in coeff(), c in coeff(),
        vx in coeff(), vy in coeff(), f in coeff(),
    ) {
        let cs = ConicSection::new(matrix![a, b; b, c], vector![vx, vy], f).unwrap();
        let expected = matrix![a, b, vx; b, c, vy; vx, vy, f];
        prop_assert_eq!(cs.aq(), expected);
        prop_assert_eq!(cs.aq(), cs.aq().transpose());
    }

    #[test]
    fn asymmetric_always_rejected(a in coeff(), b in coeff(), c in coeff(), d in coeff()) {
        prop_assume!(b != c);
        let res = ConicSection::new(matrix![a, b; c, d], vector![0.0, 0.0], 1.0);
        let rejected = matches!(res, Err(ConicError::NotSymmetric { .. }));
        prop_assert!(rejected, "accepted asymmetric A33");
    }

    #[test]
    fn coefficients_round_trip(
        a in coeff(), b in coeff(), c in coeff(),
        d in coeff(), e in coeff(), f in coeff(),
    ) {
        let coeffs = Coefficients::new(a, b, c, d, e, f);
        let cs = ConicSection::from_coefficients(&coeffs);
        prop_assert_eq!(cs.coefficients(), coeffs);
        prop_assert_eq!(ConicSection::from_coefficients(&cs.coefficients()), cs);
    }

    #[test]
    fn proper_is_not_degenerate(
        a in coeff(), b in coeff(), c in coeff(),
        vx in coeff(), vy in coeff(), f in coeff(),
    ) {
        let cs = ConicSection::new(matrix![a, b; b, c], vector![vx, vy], f).unwrap();
        prop_assert_eq!(cs.is_proper(), !cs.is_degenerate());
        let snap = cs.classify();
        prop_assert_eq!(snap.proper, cs.is_proper());
        prop_assert_eq!(snap.central, cs.is_central());
    }

    #[test]
    fn central_center_solves_linear_system(
        a in coeff(), b in coeff(), c in coeff(),
        vx in coeff(), vy in coeff(), f in coeff(),
    ) {
        let a33 = matrix![a, b; b, c];
        prop_assume!(a33.determinant().abs() > 1e-2);
        let cs = ConicSection::new(a33, vector![vx, vy], f).unwrap();
        let t = cs.center().unwrap();
        let residual = (a33 * t + cs.v()).norm();
        prop_assert!(residual <= 1e-8 * (1.0 + cs.v().norm()), "residual {}", residual);
        prop_assert!(cs.centered_equation().is_ok());
        prop_assert!(cs.standard_form().is_ok());
    }

    #[test]
    fn rank_one_quadratic_part_is_not_central(
        m in small_int(), n in small_int(), s in small_int(),
        vx in coeff(), vy in coeff(), f in coeff(),
    ) {
        // s·u uᵀ with integer entries has an exactly zero determinant.
        let a33 = matrix![s * m * m, s * m * n; s * m * n, s * n * n];
        let cs = ConicSection::new(a33, vector![vx, vy], f).unwrap();
        prop_assert!(!cs.is_central());
        prop_assert!(cs.center().is_err());
        prop_assert!(cs.centered_equation().is_err());
        prop_assert!(cs.standard_form().is_err());
    }

    #[test]
    fn principal_axes_recovered_by_standard_form(
        a in 0.1..5.0f64, b in 0.1..5.0f64,
        angle in -3.0..3.0f64,
        tx in coeff(), ty in coeff(),
        theta in 0.0..std::f64::consts::TAU,
    ) {
        let cs = ConicSection::from_principal_axes(a, b, angle, vector![tx, ty]);
        let sf = cs.standard_form().unwrap();
        prop_assert!((sf.a - a.min(b)).abs() < 1e-6 * (1.0 + a.max(b)));
        prop_assert!((sf.b - a.max(b)).abs() < 1e-6 * (1.0 + a.max(b)));
        prop_assert!((sf.center - vector![tx, ty]).norm() < 1e-6 * (1.0 + sf.center.norm()));
        let q = vector![theta.cos() / sf.a.sqrt(), theta.sin() / sf.b.sqrt()];
        let p = sf.from_standard_frame(q);
        let scale = 1.0 + p.norm_squared() * a.max(b);
        prop_assert!(cs.eval(p).abs() < 1e-6 * scale, "eval {}", cs.eval(p));
    }
}
