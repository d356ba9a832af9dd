use conic::ConicError;
use nalgebra::DMatrix;
use pyo3::exceptions::{PyArithmeticError, PyTypeError, PyValueError};
use pyo3::prelude::*;

pub fn map_conic_err(err: ConicError) -> PyErr {
    match err {
        ConicError::Shape { .. } | ConicError::NotSymmetric { .. } => {
            PyValueError::new_err(err.to_string())
        }
        ConicError::NotCentral { .. } => PyTypeError::new_err(err.to_string()),
        ConicError::Unclassifiable { .. } => PyArithmeticError::new_err(err.to_string()),
    }
}

/// Scalar, flat sequence or nested rows, as accepted for `A33`, `v` and `F`.
#[derive(FromPyObject)]
pub enum MatrixLike {
    Scalar(f64),
    Flat(Vec<f64>),
    Rows(Vec<Vec<f64>>),
}

impl MatrixLike {
    /// Scalars become `1x1`, flat sequences a column, nested rows an `r x c` matrix.
    /// Ragged rows are reported as a shape error on `part`.
    pub fn into_matrix(self, part: &str) -> PyResult<DMatrix<f64>> {
        match self {
            MatrixLike::Scalar(x) => Ok(DMatrix::from_element(1, 1, x)),
            MatrixLike::Flat(xs) => Ok(DMatrix::from_column_slice(xs.len(), 1, &xs)),
            MatrixLike::Rows(rows) => matrix_from_rows(part, &rows),
        }
    }
}

fn matrix_from_rows(part: &str, rows: &[Vec<f64>]) -> PyResult<DMatrix<f64>> {
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != ncols) {
        return Err(PyValueError::new_err(format!("{part} has ragged rows")));
    }
    Ok(DMatrix::from_row_iterator(
        rows.len(),
        ncols,
        rows.iter().flat_map(|r| r.iter().copied()),
    ))
}

pub fn rows2(m: &nalgebra::Matrix2<f64>) -> [[f64; 2]; 2] {
    [[m[(0, 0)], m[(0, 1)]], [m[(1, 0)], m[(1, 1)]]]
}
