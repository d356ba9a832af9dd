//! Conic sections in homogeneous matrix form.
//!
//! Purpose
//! - Hold a single symmetric 3×3 matrix `AQ` such that the conic is
//!   `{ (x, y) : [x y 1] AQ [x y 1]ᵀ = 0 }`, i.e.
//!   `xᵀ A33 x + 2 vᵀ x + F = 0` with `AQ = [[A33, v], [vᵀ, F]]`.
//! - Derive everything else on demand: coefficients, type, center, standard form.
//!
//! Conventions
//! - `AQ` is never mutated after construction; "transformed" conics are new values.
//! - Classification uses exact float comparisons against zero (no epsilons).
//!   Near-degenerate inputs can land on either side of a boundary.
//! - Symmetry is checked once, in the constructors, with exact equality.
//!
//! Code cross-refs: `classify` (type decision tree), `transform` (center, standard form).

mod classify;
mod transform;
mod types;

pub use classify::{Classification, ConicType};
pub use types::{CenteredEquation, Coefficients, StandardForm};

use std::fmt;

use nalgebra::{DMatrix, Matrix2, Matrix3, Vector2, Vector3};

use crate::error::ConicError;

/// A planar conic section stored as its homogeneous matrix `AQ`.
///
/// Invariants:
/// - `AQ` is symmetric (enforced by every constructor).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConicSection {
    aq: Matrix3<f64>,
}

impl ConicSection {
    /// Build from the quadratic part `a33`, linear part `v` and constant `f`.
    ///
    /// Errors with `NotSymmetric` if `a33[(0,1)] != a33[(1,0)]`.
    pub fn new(a33: Matrix2<f64>, v: Vector2<f64>, f: f64) -> Result<Self, ConicError> {
        let (upper, lower) = (a33[(0, 1)], a33[(1, 0)]);
        if upper != lower {
            return Err(ConicError::NotSymmetric { upper, lower });
        }
        Ok(Self::assemble(a33, v, f))
    }

    /// Build from runtime-shaped blocks (bindings, parsed input).
    ///
    /// Checks in order: `a33` is 2×2, `v` holds two entries (any 1×2/2×1 layout,
    /// read as a column), `f` is 1×1, `a33` is symmetric.
    pub fn from_dynamic(
        a33: &DMatrix<f64>,
        v: &DMatrix<f64>,
        f: &DMatrix<f64>,
    ) -> Result<Self, ConicError> {
        if a33.shape() != (2, 2) {
            return Err(ConicError::shape("A33", "a 2x2 matrix", a33.nrows(), a33.ncols()));
        }
        if v.len() != 2 {
            return Err(ConicError::shape("v", "a 2x1 matrix", v.len(), 1));
        }
        if f.shape() != (1, 1) {
            return Err(ConicError::shape(
                "F",
                "convertible to a 1x1 matrix",
                f.nrows(),
                f.ncols(),
            ));
        }
        let a33 = Matrix2::new(a33[(0, 0)], a33[(0, 1)], a33[(1, 0)], a33[(1, 1)]);
        // Linear (column-major) indexing reads a row or a column the same way.
        let v = Vector2::new(v[0], v[1]);
        Self::new(a33, v, f[(0, 0)])
    }

    /// Build from `A x² + B xy + C y² + D x + E y + F = 0`.
    pub fn from_coefficients(c: &Coefficients) -> Self {
        let a33 = Matrix2::new(c.a, 0.5 * c.b, 0.5 * c.b, c.c);
        let v = Vector2::new(0.5 * c.d, 0.5 * c.e);
        Self::assemble(a33, v, c.f)
    }

    /// Build from a full homogeneous matrix; every off-diagonal pair must match exactly.
    pub fn from_homogeneous(aq: Matrix3<f64>) -> Result<Self, ConicError> {
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            if aq[(i, j)] != aq[(j, i)] {
                return Err(ConicError::NotSymmetric {
                    upper: aq[(i, j)],
                    lower: aq[(j, i)],
                });
            }
        }
        Ok(Self { aq })
    }

    /// Conic `a x'² + b y'² = 1` in the frame rotated by `angle` and shifted to `center`.
    ///
    /// `A33 = R diag(a, b) Rᵀ`, `v = −A33 t`, `F = tᵀ A33 t − 1`. Entries of `A33`
    /// are written out so the off-diagonal pair is bit-identical.
    pub fn from_principal_axes(a: f64, b: f64, angle: f64, center: Vector2<f64>) -> Self {
        let (s, c) = angle.sin_cos();
        let a11 = a * c * c + b * s * s;
        let a22 = a * s * s + b * c * c;
        let a12 = (a - b) * c * s;
        let a33 = Matrix2::new(a11, a12, a12, a22);
        let v = -(a33 * center);
        let f = center.dot(&(a33 * center)) - 1.0;
        Self::assemble(a33, v, f)
    }

    #[inline]
    fn assemble(a33: Matrix2<f64>, v: Vector2<f64>, f: f64) -> Self {
        #[rustfmt::skip]
        let aq = Matrix3::new(
            a33[(0, 0)], a33[(0, 1)], v.x,
            a33[(1, 0)], a33[(1, 1)], v.y,
            v.x,         v.y,         f,
        );
        Self { aq }
    }

    /// Homogeneous matrix `AQ`.
    #[inline]
    pub fn aq(&self) -> Matrix3<f64> {
        self.aq
    }
    /// Quadratic part: top-left 2×2 block of `AQ`.
    #[inline]
    pub fn a33(&self) -> Matrix2<f64> {
        self.aq.fixed_view::<2, 2>(0, 0).into_owned()
    }
    /// Linear part: `AQ[0..2, 2]`.
    #[inline]
    pub fn v(&self) -> Vector2<f64> {
        Vector2::new(self.aq[(0, 2)], self.aq[(1, 2)])
    }
    /// Constant term `AQ[2, 2]`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.aq[(2, 2)]
    }

    /// Coefficients of `A x² + B xy + C y² + D x + E y + F = 0`.
    pub fn coefficients(&self) -> Coefficients {
        let aq = &self.aq;
        Coefficients {
            a: aq[(0, 0)],
            b: 2.0 * aq[(0, 1)],
            c: aq[(1, 1)],
            d: 2.0 * aq[(0, 2)],
            e: 2.0 * aq[(1, 2)],
            f: aq[(2, 2)],
        }
    }

    /// `[x y 1] AQ [x y 1]ᵀ`; zero exactly on the conic.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        let h = Vector3::new(p.x, p.y, 1.0);
        h.dot(&(self.aq * h))
    }

    /// `|eval(p)| <= eps`.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.eval(p).abs() <= eps
    }
}

impl fmt::Display for ConicSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coefficients();
        write!(
            f,
            "{} * x**2 + {} * x * y + {} * y**2 + {} * x + {} * y + {} = 0",
            c.a, c.b, c.c, c.d, c.e, c.f
        )
    }
}

#[cfg(test)]
mod tests;
