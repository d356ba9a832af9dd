//! Errors surfaced by construction, classification and centering.

use std::fmt;

/// Errors surfaced by `ConicSection`.
#[derive(Clone, Debug, PartialEq)]
pub enum ConicError {
    /// An input block has the wrong dimensions (`part` is `"A33"`, `"v"` or `"F"`).
    Shape {
        part: &'static str,
        expected: &'static str,
        rows: usize,
        cols: usize,
    },
    /// The quadratic part is not symmetric (`upper` = `[0,1]`, `lower` = `[1,0]`).
    NotSymmetric { upper: f64, lower: f64 },
    /// Center, centered equation and standard form need `det(A33) != 0`.
    NotCentral { det_a33: f64 },
    /// Ellipse branch with `(A + C) * det(AQ)` neither negative nor positive.
    Unclassifiable { trace: f64, det_aq: f64 },
}

impl ConicError {
    /// True for errors raised while building a conic (bad shape or asymmetric input).
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Shape { .. } | Self::NotSymmetric { .. })
    }

    pub(crate) fn shape(part: &'static str, expected: &'static str, rows: usize, cols: usize) -> Self {
        Self::Shape {
            part,
            expected,
            rows,
            cols,
        }
    }
}

impl fmt::Display for ConicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape {
                part,
                expected,
                rows,
                cols,
            } => write!(f, "{part} has to be {expected} (got {rows}x{cols})"),
            Self::NotSymmetric { upper, lower } => write!(
                f,
                "A33 must be symmetric (A33[0,1] = {upper}, A33[1,0] = {lower})"
            ),
            Self::NotCentral { det_a33 } => write!(
                f,
                "only central conics have a center (det(A33) = {det_a33})"
            ),
            Self::Unclassifiable { trace, det_aq } => write!(
                f,
                "ellipse is neither real nor imaginary: (A + C) * det(AQ) = {trace} * {det_aq} is not signed"
            ),
        }
    }
}

impl std::error::Error for ConicError {}
