use crate::error::{Error, Result};

/// Parses the first `n` rows of textual cells into numbers, stopping at the
/// first cell that is not a valid number. Every row is read up to the width
/// of the first one.
pub fn parse_matrix<S: AsRef<str>>(n: usize, cells: &[Vec<S>]) -> Result<Vec<Vec<f64>>> {
    let cols = match cells.first() {
        Some(first) => first.len(),
        None => return Ok(vec![]),
    };

    (0..n)
        .map(|i| {
            (0..cols)
                .map(|j| {
                    cells
                        .get(i)
                        .and_then(|row| row.get(j))
                        .and_then(|cell| cell.as_ref().trim().parse::<f64>().ok())
                        .ok_or(Error::InvalidNumber {
                            row: i + 1,
                            col: j + 1,
                        })
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matrix() {
        let cells = vec![vec!["2", " 1 ", "5"], vec!["1", "-1", "1.5e0"]];
        assert_eq!(
            parse_matrix(2, &cells).unwrap(),
            vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.5]]
        );
    }

    #[test]
    fn test_invalid_cell() {
        let cells = vec![
            vec!["2".to_string(), "1".to_string(), "5".to_string()],
            vec!["1".to_string(), "x".to_string(), "".to_string()],
        ];
        let err = parse_matrix(2, &cells).unwrap_err();
        assert_eq!(err, Error::InvalidNumber { row: 2, col: 2 });
        assert_eq!(
            err.to_string(),
            "Introduce un número válido en la posición [2, 2]."
        );
    }

    #[test]
    fn test_missing_cells() {
        let cells = vec![vec!["1", "2", "3"], vec!["4"]];
        assert_eq!(
            parse_matrix(2, &cells),
            Err(Error::InvalidNumber { row: 2, col: 2 })
        );

        let cells: Vec<Vec<&str>> = vec![];
        assert_eq!(parse_matrix(3, &cells).unwrap(), Vec::<Vec<f64>>::new());
    }
}
