//! JSON-serializable snapshot of everything the library derives from a conic.
//!
//! Non-finite numbers (e.g. standard form of a point conic) serialize as `null`.

use conic::{ConicSection, StandardForm};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StandardFormReport {
    pub a: f64,
    pub b: f64,
    pub center: [f64; 2],
    /// Row-major `M`; columns are the principal axes.
    pub rotation: [[f64; 2]; 2],
    pub angle: f64,
}

impl From<&StandardForm> for StandardFormReport {
    fn from(sf: &StandardForm) -> Self {
        let m = &sf.rotation;
        Self {
            a: sf.a,
            b: sf.b,
            center: [sf.center.x, sf.center.y],
            rotation: [[m[(0, 0)], m[(0, 1)]], [m[(1, 0)], m[(1, 1)]]],
            angle: sf.rotation_angle(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConicReport {
    pub equation: String,
    pub coefficients: [f64; 6],
    pub det_aq: f64,
    pub det_a33: f64,
    pub proper: bool,
    pub central: bool,
    pub conic_type: Option<String>,
    /// Set when the classifier hits the unsigned-ellipse gap.
    pub classification_error: Option<String>,
    pub center: Option<[f64; 2]>,
    pub k: Option<f64>,
    pub standard_form: Option<StandardFormReport>,
}

impl ConicReport {
    pub fn new(conic: &ConicSection) -> Self {
        let det_aq = conic.aq().determinant();
        let det_a33 = conic.a33().determinant();
        let (conic_type, classification_error) = match conic.conic_type() {
            Ok(t) => (Some(t.as_str().to_string()), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            equation: conic.to_string(),
            coefficients: conic.coefficients().to_array(),
            det_aq,
            det_a33,
            proper: det_aq != 0.0,
            central: det_a33 != 0.0,
            conic_type,
            classification_error,
            center: conic.center().ok().map(|t| [t.x, t.y]),
            k: conic.centered_equation().ok().map(|ce| ce.k),
            standard_form: conic
                .standard_form()
                .ok()
                .map(|sf| StandardFormReport::from(&sf)),
        }
    }
}
