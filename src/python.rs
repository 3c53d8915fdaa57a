use crate::error::Error;
use crate::input::parse_matrix;
use crate::linear_pair::LinearPairSolver;
use crate::matrix::gauss_jordan::GaussianEliminator;
use crate::matrix::matrix::Matrix;
use crate::rings::fraction::{gcd, Fraction};
use num_bigint::BigInt;
use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

impl From<Error> for PyErr {
    fn from(error: Error) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

#[pyclass(name = "Matriz")]
pub struct PyMatriz {
    inner: GaussianEliminator,
}

#[pymethods]
impl PyMatriz {
    #[new]
    #[pyo3(signature = (n, matriz=None))]
    pub fn new(n: usize, matriz: Option<Vec<Vec<f64>>>) -> PyResult<Self> {
        Ok(PyMatriz {
            inner: GaussianEliminator::new(n, matriz)?,
        })
    }

    #[getter]
    pub fn n(&self) -> usize {
        self.inner.n()
    }

    #[getter]
    pub fn matriz(&self) -> Vec<Vec<f64>> {
        self.inner
            .matrix()
            .map(|m| m.to_list())
            .unwrap_or_default()
    }

    pub fn eliminacion_gaussiana(&mut self) -> PyResult<String> {
        Ok(self.inner.eliminate()?)
    }

    pub fn solucion(&self) -> Option<Vec<f64>> {
        self.inner.solution()
    }
}

#[pyclass(name = "EcuacionesLineales", frozen)]
pub struct PyEcuacionesLineales {
    inner: LinearPairSolver,
}

#[pymethods]
impl PyEcuacionesLineales {
    #[new]
    pub fn new(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64) -> Self {
        PyEcuacionesLineales {
            inner: LinearPairSolver::new(a1, b1, c1, a2, b2, c2),
        }
    }

    pub fn resolver(&self) -> PyResult<(f64, f64)> {
        Ok(self.inner.solve()?)
    }
}

#[pyfunction]
pub fn calcular_mcd(a: BigInt, b: BigInt) -> BigInt {
    gcd(a, b)
}

#[pyfunction]
pub fn simplificar_fraccion(numerador: BigInt, denominador: BigInt) -> PyResult<(BigInt, BigInt)> {
    match Fraction::simplify(numerador, denominador) {
        Some(f) => Ok((f.num, f.den)),
        None => Err(PyZeroDivisionError::new_err("integer division by zero")),
    }
}

#[pyfunction]
pub fn obtener_matriz(n: usize, entradas: Vec<Vec<String>>) -> PyResult<Vec<Vec<f64>>> {
    Ok(parse_matrix(n, &entradas)?)
}
