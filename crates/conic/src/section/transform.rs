//! Center, centered equation and standard form of central conics.
//!
//! - `center`: solves `A33 x = −v` (gradient of the quadratic form vanishes).
//! - `centered_equation`: `x'ᵀ A33 x' = k` with `k = −det(AQ) / det(A33)`.
//! - `standard_form`: eigen-decomposition of `A33`, eigenpairs sorted ascending,
//!   coefficients `w / k`.
//!
//! All three require `det(A33) != 0` and error with `NotCentral` otherwise.

use nalgebra::{Matrix2, SymmetricEigen, Vector2};

use super::types::{CenteredEquation, StandardForm};
use super::ConicSection;
use crate::error::ConicError;

impl ConicSection {
    #[inline]
    fn require_central(&self) -> Result<f64, ConicError> {
        let det_a33 = self.a33().determinant();
        if det_a33 == 0.0 {
            return Err(ConicError::NotCentral { det_a33 });
        }
        Ok(det_a33)
    }

    /// Center `−A33⁻¹ v`; only central conics have one.
    pub fn center(&self) -> Result<Vector2<f64>, ConicError> {
        let det_a33 = self.require_central()?;
        let inv = self
            .a33()
            .try_inverse()
            .ok_or(ConicError::NotCentral { det_a33 })?;
        Ok(-(inv * self.v()))
    }

    /// Quadratic part and right-hand side after shifting the origin to the center.
    pub fn centered_equation(&self) -> Result<CenteredEquation, ConicError> {
        let det_a33 = self.require_central()?;
        let k = -self.aq.determinant() / det_a33;
        Ok(CenteredEquation { a33: self.a33(), k })
    }

    /// Standard form `a x'² + b y'² = 1`, `x' = Mᵀ (x − center)`.
    ///
    /// For degenerate central conics (`k == 0`: a point or two crossing lines)
    /// `a` and `b` come out non-finite.
    pub fn standard_form(&self) -> Result<StandardForm, ConicError> {
        let CenteredEquation { a33, k } = self.centered_equation()?;
        let center = self.center()?;
        let (w, rotation) = sorted_eigh(a33);
        Ok(StandardForm {
            a: w.x / k,
            b: w.y / k,
            center,
            rotation,
        })
    }
}

/// Iteration cap for the eigen-solver; NaN input never converges.
const MAX_EIGEN_ITERS: usize = 1000;

/// Symmetric eigen-decomposition with eigenvalues ascending and matching columns.
/// Returns NaNs if the solver does not converge.
fn sorted_eigh(m: Matrix2<f64>) -> (Vector2<f64>, Matrix2<f64>) {
    let Some(eig) = SymmetricEigen::try_new(m, f64::EPSILON, MAX_EIGEN_ITERS) else {
        return (Vector2::repeat(f64::NAN), Matrix2::repeat(f64::NAN));
    };
    let w = eig.eigenvalues;
    let q = eig.eigenvectors;
    if w[1] < w[0] {
        (
            Vector2::new(w[1], w[0]),
            Matrix2::from_columns(&[q.column(1).into_owned(), q.column(0).into_owned()]),
        )
    } else {
        (w, q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{matrix, vector};

    #[test]
    fn eigenpairs_sorted_ascending() {
        let (w, q) = sorted_eigh(matrix![3.0, 0.0; 0.0, -2.0]);
        assert!((w.x + 2.0).abs() < 1e-12 && (w.y - 3.0).abs() < 1e-12);
        // First column spans the y axis.
        assert!(q[(0, 0)].abs() < 1e-12 && (q[(1, 0)].abs() - 1.0).abs() < 1e-12);
        assert!(((q.transpose() * q) - Matrix2::identity()).norm() < 1e-12);
    }

    #[test]
    fn shifted_ellipse_center_and_k() {
        // (x − 1)²/4 + (y + 2)² = 1  ⇔  x²/4 + y² − x/2 + 4y + 4.25 − 1 = 0
        let c = ConicSection::new(matrix![0.25, 0.0; 0.0, 1.0], vector![-0.25, 2.0], 3.25)
            .unwrap();
        let t = c.center().unwrap();
        assert!((t - vector![1.0, -2.0]).norm() < 1e-12);
        let ce = c.centered_equation().unwrap();
        assert_eq!(ce.a33, c.a33());
        assert!((ce.k - 1.0).abs() < 1e-12);
        let sf = c.standard_form().unwrap();
        assert!((sf.a - 0.25).abs() < 1e-12);
        assert!((sf.b - 1.0).abs() < 1e-12);
        assert!((sf.center - t).norm() < 1e-12);
    }

    #[test]
    fn rotated_ellipse_maps_to_axes() {
        let th = std::f64::consts::FRAC_PI_6;
        let c = ConicSection::from_principal_axes(4.0, 0.5, th, vector![0.3, -1.2]);
        let sf = c.standard_form().unwrap();
        assert!((sf.a - 0.5).abs() < 1e-9);
        assert!((sf.b - 4.0).abs() < 1e-9);
        // Endpoint of the minor-curvature axis lies on the conic.
        let q = vector![1.0 / sf.a.sqrt(), 0.0];
        assert!(sf.eval(q).abs() < 1e-12);
        assert!(c.contains(sf.from_standard_frame(q), 1e-9));
        let back = sf.to_standard_frame(sf.from_standard_frame(q));
        assert!((back - q).norm() < 1e-12);
    }

    #[test]
    fn degenerate_central_conic_has_zero_k() {
        // x² − y² = 0: center exists, k = 0.
        let c = ConicSection::new(matrix![1.0, 0.0; 0.0, -1.0], vector![0.0, 0.0], 0.0).unwrap();
        assert_eq!(c.center().unwrap(), vector![0.0, 0.0]);
        assert_eq!(c.centered_equation().unwrap().k, 0.0);
        let sf = c.standard_form().unwrap();
        assert!(!sf.a.is_finite() && !sf.b.is_finite());
    }

    #[test]
    fn nan_quadratic_part_propagates() {
        let c = ConicSection::new(matrix![f64::NAN, 0.0; 0.0, 1.0], vector![0.0, 0.0], -1.0)
            .unwrap();
        let sf = c.standard_form().unwrap();
        assert!(sf.a.is_nan() && sf.b.is_nan());
    }

    #[test]
    fn non_central_errors_carry_det() {
        let c = ConicSection::new(matrix![1.0, 0.0; 0.0, 0.0], vector![0.0, -0.5], 0.0).unwrap();
        assert_eq!(c.center(), Err(ConicError::NotCentral { det_a33: 0.0 }));
        assert!(matches!(
            c.centered_equation(),
            Err(ConicError::NotCentral { .. })
        ));
        assert!(matches!(c.standard_form(), Err(ConicError::NotCentral { .. })));
    }
}
