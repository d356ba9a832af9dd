//! Value types returned by `ConicSection` views.
//!
//! - `Coefficients`: the six scalars of `A x² + B xy + C y² + D x + E y + F = 0`.
//! - `CenteredEquation`: `x'ᵀ A33 x' = k` after moving the origin to the center.
//! - `StandardForm`: `a x'² + b y'² = 1` in the principal-axes frame.

use nalgebra::{Matrix2, Vector2};

/// Polynomial coefficients `A x² + B xy + C y² + D x + E y + F = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Coefficients {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }
    #[inline]
    pub fn to_array(self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

impl From<[f64; 6]> for Coefficients {
    #[inline]
    fn from(c: [f64; 6]) -> Self {
        Self::new(c[0], c[1], c[2], c[3], c[4], c[5])
    }
}

impl From<Coefficients> for [f64; 6] {
    #[inline]
    fn from(c: Coefficients) -> Self {
        c.to_array()
    }
}

/// Conic after translating the origin to its center: `x'ᵀ a33 x' = k`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenteredEquation {
    pub a33: Matrix2<f64>,
    pub k: f64,
}

/// Standard form `a x'² + b y'² = 1` with `x' = Mᵀ (x − t)`.
///
/// Invariants:
/// - `a <= b` when `k > 0` (eigenvalues are sorted ascending before dividing by `k`).
/// - `rotation` is orthonormal; its columns are the principal axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandardForm {
    pub a: f64,
    pub b: f64,
    /// Shift vector `t` (the conic's center).
    pub center: Vector2<f64>,
    /// Coordinate transformation `M` (eigenvectors as columns).
    pub rotation: Matrix2<f64>,
}

impl StandardForm {
    /// `x ↦ Mᵀ (x − t)`.
    #[inline]
    pub fn to_standard_frame(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.rotation.transpose() * (p - self.center)
    }
    /// `x' ↦ M x' + t`.
    #[inline]
    pub fn from_standard_frame(&self, q: Vector2<f64>) -> Vector2<f64> {
        self.rotation * q + self.center
    }
    /// Residual `a x'² + b y'² − 1` of a point given in the standard frame.
    #[inline]
    pub fn eval(&self, q: Vector2<f64>) -> f64 {
        self.a * q.x * q.x + self.b * q.y * q.y - 1.0
    }
    /// Angle of the first principal axis from +x, in radians (−π, π].
    #[inline]
    pub fn rotation_angle(&self) -> f64 {
        self.rotation[(1, 0)].atan2(self.rotation[(0, 0)])
    }
}
