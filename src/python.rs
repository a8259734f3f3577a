use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::seidel::seidel::Seidel;
use crate::slae::slae::Slae;

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

type PyInfiniteSolution = (usize, f64, Vec<(usize, f64)>);

#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Slae")]
pub struct PySlae {
    inner: Slae<f64>,
}

#[pymethods]
impl PySlae {
    #[new]
    pub fn new(lines: Vec<Vec<f64>>, free_vector: Vec<f64>) -> PyResult<Self> {
        let inner = Slae::new(Matrix::from_list(lines)?, free_vector)?;
        Ok(PySlae { inner })
    }

    #[getter]
    pub fn extended(&self) -> Vec<Vec<f64>> {
        self.inner.extended().to_list()
    }

    pub fn is_solvable(&self) -> bool {
        self.inner.is_solvable()
    }

    pub fn num_solutions(&self) -> String {
        self.inner.num_solutions().to_string()
    }

    pub fn solve_single(&self) -> Vec<f64> {
        self.inner.solve_single()
    }

    pub fn solve_infinite(&self) -> Vec<PyInfiniteSolution> {
        self.inner
            .solve_infinite()
            .iter()
            .map(|solution| {
                (
                    solution.index(),
                    *solution.free_value(),
                    solution
                        .iter()
                        .map(|cell| (cell.index, cell.coefficient))
                        .collect(),
                )
            })
            .collect()
    }

    pub fn __repr__(&self) -> String {
        self.inner.extended().to_string()
    }
}

#[derive(Debug, Clone)]
#[pyclass(name = "Seidel")]
pub struct PySeidel {
    inner: Seidel<f64>,
}

#[pymethods]
impl PySeidel {
    #[new]
    pub fn new(lines: Vec<Vec<f64>>, free_vector: Vec<f64>) -> PyResult<Self> {
        let inner = Seidel::new(Matrix::from_list(lines)?, free_vector)?;
        Ok(PySeidel { inner })
    }

    // Releases the GIL, a non-convergent system never returns.
    pub fn solve(&mut self, py: Python<'_>, eps: f64) -> Vec<f64> {
        py.allow_threads(|| self.inner.solve(eps))
    }

    #[getter]
    pub fn approximation(&self) -> Vec<f64> {
        self.inner.approximation().to_vec()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations()
    }
}
