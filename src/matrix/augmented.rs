use crate::matrix::matrix::Matrix;

/// Row-major augmented matrix: `rows` equations, each with its coefficients
/// followed by the constant term in the last column.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<f64>,
}

impl Matrix<f64> for AugmentedMatrix {
    fn from_list(lines: Vec<Vec<f64>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        AugmentedMatrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let pad = cols - l.len();
                    l.into_iter().chain(std::iter::repeat_n(0.0, pad))
                })
                .collect(),
        }
    }

    fn to_list(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }
}

impl AugmentedMatrix {
    /// Number of unknowns, i.e. every column but the constant one.
    pub fn unknowns(&self) -> usize {
        self.cols.saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn scale_row(&mut self, row: usize, divisor: f64) {
        let cols = self.cols;
        self.cells[row * cols..(row + 1) * cols]
            .iter_mut()
            .for_each(|x| *x /= divisor);
    }

    /// `target -= factor * source`, across every column.
    pub fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        for k in 0..self.cols {
            let value = self.at(target, k) - factor * self.at(source, k);
            self.cells[target * self.cols + k] = value;
        }
    }

    /// Whether the coefficient block is the identity, within `tolerance`.
    pub fn is_rref(&self, tolerance: f64) -> bool {
        if self.cols != self.rows + 1 {
            return false;
        }
        (0..self.rows).all(|i| {
            (0..self.rows).all(|j| {
                let expected = if i == j { 1.0 } else { 0.0 };
                (self.at(i, j) - expected).abs() <= tolerance
            })
        })
    }

    /// The constant column, which holds the solution once reduced.
    pub fn last_column(&self) -> Vec<f64> {
        match self.cols {
            0 => vec![],
            cols => (0..self.rows).map(|r| self.at(r, cols - 1)).collect(),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list_pads_short_rows() {
        let m = AugmentedMatrix::from_list(vec![vec![1.0, 2.0, 3.0], vec![4.0]]);
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 3);
        assert_eq!(m.to_list(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 0.0]]);
        assert_eq!(m.unknowns(), 2);
    }

    #[test]
    fn test_row_operations() {
        let mut m = AugmentedMatrix::from_list(vec![vec![2.0, 4.0, 6.0], vec![1.0, 1.0, 1.0]]);

        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &[1.0, 1.0, 1.0]);
        assert_eq!(m.row(1), &[2.0, 4.0, 6.0]);

        m.scale_row(1, 2.0);
        assert_eq!(m.row(1), &[1.0, 2.0, 3.0]);

        m.subtract_scaled_row(0, 1, 1.0);
        assert_eq!(m.row(0), &[0.0, -1.0, -2.0]);
        assert_eq!(m.at(0, 2), -2.0);
    }

    #[test]
    fn test_is_rref() {
        let m = AugmentedMatrix::from_list(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 1.0]]);
        assert!(m.is_rref(1e-12));
        assert_eq!(m.last_column(), vec![2.0, 1.0]);

        let m = AugmentedMatrix::from_list(vec![vec![1.0, 0.5, 2.0], vec![0.0, 1.0, 1.0]]);
        assert!(!m.is_rref(1e-12));

        let m = AugmentedMatrix::from_list(vec![vec![1.0, 1e-13, 2.0], vec![0.0, 1.0, 1.0]]);
        assert!(m.is_rref(1e-12));
    }

    #[test]
    fn test_empty() {
        let m = AugmentedMatrix::from_list(vec![]);
        assert!(m.is_empty());
        assert_eq!(m.to_list(), Vec::<Vec<f64>>::new());
        assert_eq!(m.last_column(), Vec::<f64>::new());
    }
}
