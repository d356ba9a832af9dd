//! PyO3 bindings for the `conic` crate.
//!
//! Notes
//! - Keep bindings thin; all math lives in `conic`.
//! - Error kinds map onto Python exceptions: shape/symmetry problems raise
//!   `ValueError`, non-central centering raises `TypeError`, the unsigned-ellipse
//!   classification gap raises `ArithmeticError`.

use pyo3::prelude::*;

mod common;
mod section;

/// Classify `A x² + B xy + C y² + D x + E y + F = 0` without building a class instance.
#[pyfunction]
fn conic_type(coeffs: (f64, f64, f64, f64, f64, f64)) -> PyResult<String> {
    let (a, b, c, d, e, f) = coeffs;
    let conic = conic::ConicSection::from_coefficients(&conic::Coefficients::new(a, b, c, d, e, f));
    conic
        .conic_type()
        .map(|t| t.as_str().to_string())
        .map_err(common::map_conic_err)
}

#[pymodule]
fn conic_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(conic_type, m)?)?;
    section::register(m)?;
    Ok(())
}
