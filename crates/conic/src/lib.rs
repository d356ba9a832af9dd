//! Planar conic sections as symmetric 3×3 matrices.
//!
//! A conic `A x² + B xy + C y² + D x + E y + F = 0` is stored as its homogeneous
//! matrix `AQ = [[A33, v], [vᵀ, F]]`. Everything else (coefficients, type,
//! center, standard form) is derived on demand from that one matrix.
//!
//! Layout
//! - `section`: the `ConicSection` entity, classifier and centering transforms.
//! - `rand`: reproducible random conics for benches and experiments.
//! - `error`: `ConicError`.

pub mod error;
pub mod rand;
pub mod section;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ConicError;
pub use section::{
    CenteredEquation, Classification, Coefficients, ConicSection, ConicType, StandardForm,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ConicError;
    pub use crate::rand::{draw_central, draw_conic, AxesSign, ReplayToken, SampleCfg};
    pub use crate::section::{
        CenteredEquation, Classification, Coefficients, ConicSection, ConicType, StandardForm,
    };
    pub use nalgebra::{Matrix2 as Mat2, Matrix3 as Mat3, Vector2 as Vec2};
}
