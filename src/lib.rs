pub mod matrix {
    pub mod augmented;
    pub mod gauss_jordan;
    pub mod matrix;
    pub mod trace;
}
pub mod rings {
    pub mod fraction;
}

pub mod config;
pub mod error;
pub mod input;
pub mod linear_pair;

#[cfg(feature = "python")]
pub mod python;

pub use config::TraceConfig;
pub use error::{Error, Result};
pub use linear_pair::LinearPairSolver;
pub use matrix::augmented::AugmentedMatrix;
pub use matrix::gauss_jordan::{GaussianEliminator, INVALID_MATRIX};
pub use matrix::trace::{Operation, Trace, TraceStep};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Step-by-step linear system solvers, exposed to Python.
#[cfg(feature = "python")]
#[pymodule]
fn linear_steps(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatriz>()?;
    m.add_class::<python::PyEcuacionesLineales>()?;
    m.add_function(wrap_pyfunction!(python::calcular_mcd, m)?)?;
    m.add_function(wrap_pyfunction!(python::simplificar_fraccion, m)?)?;
    m.add_function(wrap_pyfunction!(python::obtener_matriz, m)?)?;
    Ok(())
}
