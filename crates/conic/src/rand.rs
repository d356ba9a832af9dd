//! Random conics (replay tokens for reproducible draws).
//!
//! Purpose
//! - Feed benchmarks, the CLI `sample` command and randomized tests with conics
//!   that are reproducible from `(seed, index)`.
//!
//! Model
//! - `draw_conic`: every entry of the symmetric `AQ` uniform in `±coeff_range`.
//!   Almost surely proper and central; the type is whatever falls out.
//! - `draw_central`: principal-axes construction with a requested sign pattern,
//!   so the type is known up to exact-comparison ties (circle when `a == b`).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::section::{Coefficients, ConicSection};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Half-width of the coefficient box for `draw_conic`.
    pub coeff_range: f64,
    /// Half-width of the center box for `draw_central`.
    pub center_range: f64,
    /// Absolute standard-form coefficients are drawn from `[axis_range.0, axis_range.1)`.
    pub axis_range: (f64, f64),
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            coeff_range: 1.0,
            center_range: 2.0,
            axis_range: (0.1, 4.0),
        }
    }
}

/// Sign pattern of `(a, b)` in `a x'² + b y'² = 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxesSign {
    /// `a, b > 0`.
    Ellipse,
    /// `a > 0 > b`.
    Hyperbola,
    /// `a, b < 0`: no real points.
    ImaginaryEllipse,
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn symmetric<R: Rng>(rng: &mut R, half_width: f64) -> f64 {
    (rng.gen::<f64>() * 2.0 - 1.0) * half_width
}

/// Arbitrary conic with coefficients uniform in `±cfg.coeff_range`.
pub fn draw_conic(cfg: SampleCfg, tok: ReplayToken) -> ConicSection {
    let mut rng = tok.to_std_rng();
    let r = cfg.coeff_range.abs();
    let c: [f64; 6] = std::array::from_fn(|_| symmetric(&mut rng, r));
    ConicSection::from_coefficients(&Coefficients::from(c))
}

/// Central conic with a random center, rotation and axis magnitudes.
pub fn draw_central(cfg: SampleCfg, tok: ReplayToken, kind: AxesSign) -> ConicSection {
    let mut rng = tok.to_std_rng();
    let lo = cfg.axis_range.0.abs().max(1e-9);
    let hi = cfg.axis_range.1.abs().max(lo);
    let mut axis = || {
        if hi > lo {
            rng.gen_range(lo..hi)
        } else {
            lo
        }
    };
    let (a, b) = (axis(), axis());
    let (a, b) = match kind {
        AxesSign::Ellipse => (a, b),
        AxesSign::Hyperbola => (a, -b),
        AxesSign::ImaginaryEllipse => (-a, -b),
    };
    let angle = rng.gen::<f64>() * std::f64::consts::PI;
    let r = cfg.center_range.abs();
    let center = Vector2::new(symmetric(&mut rng, r), symmetric(&mut rng, r));
    ConicSection::from_principal_axes(a, b, angle, center)
}
