pub mod matrix {
    pub mod matrix;
    pub mod scalar;
}
pub mod rings {
    pub mod rational;
}
pub mod slae {
    pub mod slae;
    pub mod solution;
}
pub mod seidel {
    pub mod seidel;
}

pub mod config;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

pub use config::ParallelConfig;
pub use error::{MatrixError, ParseRationalError, Result};
pub use matrix::matrix::Matrix;
pub use matrix::scalar::Scalar;
pub use rings::rational::Rational;
pub use seidel::seidel::Seidel;
pub use slae::slae::Slae;
pub use slae::solution::{InfiniteSolution, MatrixCell, SolutionsCount};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn slae_solver(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PySlae>()?;
    m.add_class::<python::PySeidel>()?;
    Ok(())
}
