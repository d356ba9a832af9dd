//! Degeneracy and type classification from `det(AQ)`, `det(A33)` and coefficient signs.
//!
//! The decision tree is fixed; branch order matters because comparisons are exact.
//! NaN determinants fall through to the `== 0` branches (`parabola`, parallel lines).

use std::fmt;
use std::str::FromStr;

use super::ConicSection;
use crate::error::ConicError;

/// Geometric type of a conic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConicType {
    Hyperbola,
    Circle,
    RealEllipse,
    ImaginaryEllipse,
    Parabola,
    IntersectingLines,
    Point,
    DistinctRealParallelLines,
    DistinctImaginaryParallelLines,
    CoincidentLines,
}

impl ConicType {
    pub const ALL: [ConicType; 10] = [
        ConicType::Hyperbola,
        ConicType::Circle,
        ConicType::RealEllipse,
        ConicType::ImaginaryEllipse,
        ConicType::Parabola,
        ConicType::IntersectingLines,
        ConicType::Point,
        ConicType::DistinctRealParallelLines,
        ConicType::DistinctImaginaryParallelLines,
        ConicType::CoincidentLines,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConicType::Hyperbola => "hyperbola",
            ConicType::Circle => "circle",
            ConicType::RealEllipse => "real ellipse",
            ConicType::ImaginaryEllipse => "imaginary ellipse",
            ConicType::Parabola => "parabola",
            ConicType::IntersectingLines => "intersecting lines",
            ConicType::Point => "point",
            ConicType::DistinctRealParallelLines => "distinct real parallel lines",
            ConicType::DistinctImaginaryParallelLines => "distinct imaginary parallel lines",
            ConicType::CoincidentLines => "coincident lines",
        }
    }

    /// Labels produced only when `det(AQ) == 0`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            ConicType::IntersectingLines
                | ConicType::Point
                | ConicType::DistinctRealParallelLines
                | ConicType::DistinctImaginaryParallelLines
                | ConicType::CoincidentLines
        )
    }
}

impl fmt::Display for ConicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConicType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConicType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown conic type '{s}'"))
    }
}

/// Snapshot of the classifier inputs and outcome, for reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub det_aq: f64,
    pub det_a33: f64,
    pub proper: bool,
    pub central: bool,
    /// `None` only in the unsigned-ellipse gap (see `ConicError::Unclassifiable`).
    pub conic_type: Option<ConicType>,
}

impl ConicSection {
    /// `det(AQ) != 0`.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.aq.determinant() != 0.0
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.is_proper()
    }
    /// `det(A33) != 0`: a unique center exists (false for parabolas).
    #[inline]
    pub fn is_central(&self) -> bool {
        self.a33().determinant() != 0.0
    }

    /// Type of the conic.
    ///
    /// Errors with `Unclassifiable` when `det(A33) > 0`, the conic is not a circle,
    /// and `(A + C) * det(AQ)` is neither `< 0` nor `> 0` (underflow or NaN).
    pub fn conic_type(&self) -> Result<ConicType, ConicError> {
        let det_a33 = self.a33().determinant();
        let det_aq = self.aq.determinant();
        let c = self.coefficients();

        if det_aq != 0.0 {
            if det_a33 < 0.0 {
                Ok(ConicType::Hyperbola)
            } else if det_a33 > 0.0 {
                if c.a == c.c && c.b == 0.0 {
                    return Ok(ConicType::Circle);
                }
                let trace = c.a + c.c;
                let s = trace * det_aq;
                if s < 0.0 {
                    Ok(ConicType::RealEllipse)
                } else if s > 0.0 {
                    Ok(ConicType::ImaginaryEllipse)
                } else {
                    Err(ConicError::Unclassifiable { trace, det_aq })
                }
            } else {
                Ok(ConicType::Parabola)
            }
        } else if det_a33 < 0.0 {
            Ok(ConicType::IntersectingLines)
        } else if det_a33 > 0.0 {
            Ok(ConicType::Point)
        } else {
            let lhs = c.d * c.d + c.e * c.e;
            let rhs = 4.0 * (c.a + c.c) * c.f;
            if lhs > rhs {
                Ok(ConicType::DistinctRealParallelLines)
            } else if lhs < rhs {
                Ok(ConicType::DistinctImaginaryParallelLines)
            } else {
                Ok(ConicType::CoincidentLines)
            }
        }
    }

    /// All classifier outputs at once; never fails.
    pub fn classify(&self) -> Classification {
        let det_aq = self.aq.determinant();
        let det_a33 = self.a33().determinant();
        Classification {
            det_aq,
            det_a33,
            proper: det_aq != 0.0,
            central: det_a33 != 0.0,
            conic_type: self.conic_type().ok(),
        }
    }
}
