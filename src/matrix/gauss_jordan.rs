use crate::config::TraceConfig;
use crate::error::{Error, Result};
use crate::matrix::augmented::AugmentedMatrix;
use crate::matrix::matrix::Matrix;
use crate::matrix::trace::{Operation, Trace};
use log::warn;

/// Returned by [`GaussianEliminator::eliminate`] when no matrix was supplied.
pub const INVALID_MATRIX: &str = "Matriz no válida";

/// Gauss-Jordan reduction of an n x (n+1) augmented matrix, recording every
/// row operation.
#[derive(Debug, Clone)]
pub struct GaussianEliminator {
    n: usize,
    matrix: Option<AugmentedMatrix>,
    config: TraceConfig,
}

impl GaussianEliminator {
    /// `lines` may be absent or empty; that is reported by `eliminate`.
    /// Any other shape than `n` rows of `n + 1` values is rejected.
    pub fn new(n: usize, lines: Option<Vec<Vec<f64>>>) -> Result<Self> {
        let matrix = match lines {
            Some(lines) if !lines.is_empty() => {
                let expected_cols = n + 1;
                if let Some(bad) = lines
                    .iter()
                    .find(|l| l.len() != expected_cols)
                    .map(|l| l.len())
                    .or((lines.len() != n).then_some(expected_cols))
                {
                    return Err(Error::ShapeMismatch {
                        expected_rows: n,
                        expected_cols,
                        rows: lines.len(),
                        cols: bad,
                    });
                }
                Some(AugmentedMatrix::from_list(lines))
            }
            _ => None,
        };

        Ok(GaussianEliminator {
            n,
            matrix,
            config: TraceConfig::default(),
        })
    }

    pub fn with_config(mut self, config: TraceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn matrix(&self) -> Option<&AugmentedMatrix> {
        self.matrix.as_ref()
    }

    /// Runs the reduction and renders the trace, or the invalid-matrix
    /// message if there is nothing to reduce.
    pub fn eliminate(&mut self) -> Result<String> {
        if self.matrix.is_none() {
            return Ok(INVALID_MATRIX.into());
        }
        Ok(self.eliminate_steps()?.to_string())
    }

    /// Reduces the matrix in place. Fails with `SingularMatrix` when a zero
    /// pivot has no nonzero entry below it; steps recorded before that point
    /// are lost with the error but the matrix keeps its partial state.
    ///
    /// Without a matrix this returns an empty trace; [`Self::eliminate`]
    /// renders that case as [`INVALID_MATRIX`] instead.
    pub fn eliminate_steps(&mut self) -> Result<Trace> {
        let n = self.n;
        let mut trace = Trace::new(self.config.clone());
        let mat = match self.matrix.as_mut() {
            Some(mat) if !mat.is_empty() => mat,
            _ => return Ok(trace),
        };

        for i in 0..n {
            if mat.at(i, i) == 0.0 {
                if let Some(j) = (i + 1..n).find(|&j| mat.at(j, i) != 0.0) {
                    mat.swap_rows(i, j);
                    trace.record(Operation::Swap { a: i, b: j }, mat);
                }
            }

            let pivot = mat.at(i, i);
            if pivot == 0.0 {
                warn!("no nonzero pivot available in column {}", i + 1);
                return Err(Error::SingularMatrix { column: i });
            }

            mat.scale_row(i, pivot);
            trace.record(Operation::Scale { row: i, pivot }, mat);

            for j in (0..n).filter(|&j| j != i) {
                let factor = mat.at(j, i);
                mat.subtract_scaled_row(j, i, factor);
                trace.record(
                    Operation::Eliminate {
                        target: j,
                        source: i,
                        factor,
                    },
                    mat,
                );
            }
        }

        Ok(trace)
    }

    /// Values of the unknowns, available once the coefficient block has
    /// been reduced to the identity.
    pub fn solution(&self) -> Option<Vec<f64>> {
        self.matrix
            .as_ref()
            .filter(|m| m.is_rref(1e-9))
            .map(|m| m.last_column())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
