use crate::error::{Error, Result};
use crate::rings::fraction::{truncate_to_integer, Fraction};
use log::{debug, warn};
use num_bigint::BigInt;
use num_traits::Zero;

/// Closed-form solver for
///
/// ```text
/// a1*x + b1*y = c1
/// a2*x + b2*y = c2
/// ```
///
/// `x` is eliminated by cross-multiplying both equations, `y` is reduced as
/// a fraction and then substituted back into the first equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPairSolver {
    a1: f64,
    b1: f64,
    c1: f64,
    a2: f64,
    b2: f64,
    c2: f64,
}

impl LinearPairSolver {
    pub fn new(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64) -> Self {
        LinearPairSolver {
            a1,
            b1,
            c1,
            a2,
            b2,
            c2,
        }
    }

    pub fn coefficients(&self) -> [f64; 6] {
        [self.a1, self.b1, self.c1, self.a2, self.b2, self.c2]
    }

    /// `y` as a reduced fraction of the real intermediates.
    pub fn y_fraction(&self) -> Result<Fraction<f64>> {
        // eq1 * a2 - eq2 * a1
        let coef_y = self.b1 * self.a2 - self.b2 * self.a1;
        let const_y = self.c1 * self.a2 - self.c2 * self.a1;

        if coef_y == 0.0 {
            warn!("coefficient of y cancels out, no unique solution");
            return Err(Error::NoUniqueSolution);
        }
        if !coef_y.is_finite() || !const_y.is_finite() {
            return Err(Error::NonFinite("y"));
        }

        debug!("y = {} / {}", const_y, coef_y);
        Fraction::simplify(const_y, coef_y).ok_or(Error::NoUniqueSolution)
    }

    /// `x` from back-substituting `y`. Numerator and denominator are
    /// truncated to integers before being reduced.
    pub fn x_fraction(&self) -> Result<Fraction<BigInt>> {
        let y = self.y_fraction()?.value();
        self.x_fraction_given(y)
    }

    fn x_fraction_given(&self, y: f64) -> Result<Fraction<BigInt>> {
        let numerator =
            truncate_to_integer(self.c1 - self.b1 * y).ok_or(Error::NonFinite("x"))?;
        let denominator = truncate_to_integer(self.a1).ok_or(Error::NonFinite("x"))?;
        debug!("x = {} / {}", numerator, denominator);

        match Fraction::simplify(numerator.clone(), denominator.clone()) {
            Some(f) if !f.den.is_zero() => Ok(f),
            _ => Err(Error::ZeroDenominator {
                numerator,
                denominator,
            }),
        }
    }

    pub fn solve(&self) -> Result<(f64, f64)> {
        let y = self.y_fraction()?.value();
        let x = self.x_fraction_given(y)?.value();
        Ok((x, y))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        let s = LinearPairSolver::new(1.0, 1.0, 3.0, 2.0, -1.0, 0.0);
        assert_eq!(s.solve().unwrap(), (1.0, 2.0));

        let s = LinearPairSolver::new(2.0, 3.0, 8.0, 1.0, -1.0, -1.0);
        assert_eq!(s.solve().unwrap(), (1.0, 2.0));
        assert_eq!(s.y_fraction().unwrap(), Fraction { num: 2.0, den: 1.0 });
        assert_eq!(
            s.x_fraction().unwrap(),
            Fraction {
                num: BigInt::from(1),
                den: BigInt::from(1)
            }
        );
    }

    #[test]
    fn test_fractional_results() {
        // 2x + 4y = 3, x - 2y = 1: y = 1/8, x = 5/4 but x's numerator 2.5
        // truncates to 2, leaving 2/2
        let s = LinearPairSolver::new(2.0, 4.0, 3.0, 1.0, -2.0, 1.0);
        let y = s.y_fraction().unwrap();
        assert_eq!(y, Fraction { num: 1.0, den: 8.0 });
        let (x, y) = s.solve().unwrap();
        assert_eq!(y, 0.125);
        assert_eq!(x, 1.0);
    }

    #[test]
    fn test_truncation_before_reduction() {
        // exact answer is x = 1.5, but the numerator 1.5 truncates to 1
        let s = LinearPairSolver::new(1.0, 1.0, 2.5, 1.0, -1.0, 0.5);
        assert_eq!(s.solve().unwrap(), (1.0, 1.0));
    }

    #[test]
    fn test_parallel_lines() {
        let s = LinearPairSolver::new(1.0, 2.0, 3.0, 2.0, 4.0, 5.0);
        assert_eq!(s.solve(), Err(Error::NoUniqueSolution));
        assert_eq!(s.x_fraction(), Err(Error::NoUniqueSolution));

        let s = LinearPairSolver::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0);
        assert_eq!(s.solve(), Err(Error::NoUniqueSolution));
    }

    #[test]
    fn test_zero_denominator() {
        // a1 = 0.5 truncates to 0
        let s = LinearPairSolver::new(0.5, 1.0, 1.0, 1.0, -1.0, 0.5);
        assert_eq!(s.y_fraction().unwrap().value(), 0.5);
        assert_eq!(
            s.solve(),
            Err(Error::ZeroDenominator {
                numerator: BigInt::from(0),
                denominator: BigInt::from(0)
            })
        );
    }

    #[test]
    fn test_non_finite() {
        let s = LinearPairSolver::new(1.0, 1.0, f64::INFINITY, 2.0, -1.0, 0.0);
        assert_eq!(s.solve(), Err(Error::NonFinite("y")));
    }

    #[test]
    fn test_x_past_machine_integers() {
        // x = 1e19 does not fit in an i64
        let s = LinearPairSolver::new(1.0, 0.0, 1e19, 0.0, 1.0, 0.0);
        let (x, y) = s.solve().unwrap();
        assert_eq!(x, 1e19);
        assert_eq!(y, 0.0);

        // numerator -1e19 over denominator -1
        let s = LinearPairSolver::new(-1.0, 0.0, -1e19, 0.0, 1.0, 0.0);
        let (x, y) = s.solve().unwrap();
        assert_eq!(x, 1e19);
        assert_eq!(y, 0.0);
        assert_eq!(
            s.x_fraction().unwrap().to_string(),
            "10000000000000000000"
        );
    }

    #[test]
    fn test_solve_is_idempotent() {
        let s = LinearPairSolver::new(3.0, -2.0, 7.0, 5.0, 4.0, 1.0);
        let first = s.solve();
        let second = s.solve();
        assert_eq!(first, second);
        assert_eq!(s.coefficients(), [3.0, -2.0, 7.0, 5.0, 4.0, 1.0]);
    }
}
