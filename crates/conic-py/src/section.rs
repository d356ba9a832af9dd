//! `ConicSection` class mirroring the Rust entity (read-only properties).

use crate::common::{map_conic_err, rows2, MatrixLike};
use conic::ConicSection;
use pyo3::prelude::*;

#[pyclass(name = "ConicSection", frozen)]
pub struct PyConicSection {
    inner: ConicSection,
}

#[pymethods]
impl PyConicSection {
    /// `ConicSection(A33, v, F)`.
    ///
    /// Each argument may be a scalar, a flat sequence or nested rows, so both
    /// `v=[0, 0]` and `v=[[0], [0]]` work, as do `F=-1` and `F=[[-1]]`.
    /// Wrong shapes raise `ValueError`.
    #[new]
    fn new(a33: MatrixLike, v: MatrixLike, f: MatrixLike) -> PyResult<Self> {
        let a33 = a33.into_matrix("A33")?;
        let v = v.into_matrix("v")?;
        let f = f.into_matrix("F")?;
        let inner = ConicSection::from_dynamic(&a33, &v, &f).map_err(map_conic_err)?;
        Ok(Self { inner })
    }

    #[staticmethod]
    fn from_coefficients(coeffs: (f64, f64, f64, f64, f64, f64)) -> Self {
        let (a, b, c, d, e, f) = coeffs;
        let inner = ConicSection::from_coefficients(&conic::Coefficients::new(a, b, c, d, e, f));
        Self { inner }
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    #[getter]
    fn coefficients(&self) -> (f64, f64, f64, f64, f64, f64) {
        let c = self.inner.coefficients();
        (c.a, c.b, c.c, c.d, c.e, c.f)
    }

    #[getter(AQ)]
    fn aq(&self) -> [[f64; 3]; 3] {
        let m = self.inner.aq();
        std::array::from_fn(|i| std::array::from_fn(|j| m[(i, j)]))
    }

    #[getter(A33)]
    fn a33(&self) -> [[f64; 2]; 2] {
        rows2(&self.inner.a33())
    }

    #[getter]
    fn v(&self) -> (f64, f64) {
        let v = self.inner.v();
        (v.x, v.y)
    }

    #[getter(F)]
    fn f(&self) -> f64 {
        self.inner.f()
    }

    #[getter(isProper)]
    fn is_proper(&self) -> bool {
        self.inner.is_proper()
    }

    #[getter(isDegenerate)]
    fn is_degenerate(&self) -> bool {
        self.inner.is_degenerate()
    }

    #[getter(isCentral)]
    fn is_central(&self) -> bool {
        self.inner.is_central()
    }

    #[getter(conicType)]
    fn conic_type(&self) -> PyResult<String> {
        self.inner
            .conic_type()
            .map(|t| t.as_str().to_string())
            .map_err(map_conic_err)
    }

    #[getter]
    fn center(&self) -> PyResult<(f64, f64)> {
        let t = self.inner.center().map_err(map_conic_err)?;
        Ok((t.x, t.y))
    }

    #[getter(centeredEquation)]
    fn centered_equation(&self) -> PyResult<([[f64; 2]; 2], f64)> {
        let ce = self.inner.centered_equation().map_err(map_conic_err)?;
        Ok((rows2(&ce.a33), ce.k))
    }

    /// `(a, b, t, M)` with `a x'² + b y'² = 1`, `x' = Mᵀ (x − t)`.
    #[getter(standardForm)]
    fn standard_form(&self) -> PyResult<(f64, f64, (f64, f64), [[f64; 2]; 2])> {
        let sf = self.inner.standard_form().map_err(map_conic_err)?;
        Ok((sf.a, sf.b, (sf.center.x, sf.center.y), rows2(&sf.rotation)))
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyConicSection>()?;
    Ok(())
}
