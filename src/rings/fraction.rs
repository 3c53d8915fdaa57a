use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use std::fmt;
use std::fmt::Display;

/// Floored division and modulo: the remainder takes the sign of the divisor.
pub trait FloorDivMod: Clone + Zero + PartialEq {
    fn floor_mod(&self, rhs: &Self) -> Self;
    fn floor_div(&self, rhs: &Self) -> Self;
}

impl FloorDivMod for BigInt {
    fn floor_mod(&self, rhs: &BigInt) -> BigInt {
        self.mod_floor(rhs)
    }

    fn floor_div(&self, rhs: &BigInt) -> BigInt {
        self.div_floor(rhs)
    }
}

impl FloorDivMod for f64 {
    fn floor_mod(&self, rhs: &f64) -> f64 {
        let (lhs, rhs) = (*self, *rhs);
        let m = lhs % rhs;
        if m == 0.0 {
            return 0.0_f64.copysign(rhs);
        }
        if (rhs < 0.0) != (m < 0.0) {
            return m + rhs;
        }
        m
    }

    fn floor_div(&self, rhs: &f64) -> f64 {
        let (lhs, rhs) = (*self, *rhs);
        let m = lhs % rhs;
        let mut div = (lhs - m) / rhs;
        if m != 0.0 && (rhs < 0.0) != (m < 0.0) {
            div -= 1.0;
        }
        if div == 0.0 {
            return 0.0_f64.copysign(lhs / rhs);
        }
        // snap to the nearest integer, (lhs - m) / rhs may be off by an ulp
        let floored = div.floor();
        if div - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    }
}

/// Euclid's recurrence `(a, b) -> (b, a mod b)` until `b` is zero.
///
/// Signs are not normalised: `gcd(3, -6) == -3`, and `gcd(0, 0) == 0`.
pub fn gcd<T: FloorDivMod>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let r = a.floor_mod(&b);
        a = b;
        b = r;
    }
    a
}

/// Truncates toward zero, discarding the fractional part. `None` for
/// infinite or NaN values.
pub fn truncate_to_integer(value: f64) -> Option<BigInt> {
    BigInt::from_f64(value.trunc())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fraction<T> {
    pub num: T,
    pub den: T,
}

impl<T: FloorDivMod> Fraction<T> {
    /// Divides both terms by their gcd. `None` when both terms are zero.
    pub fn simplify(num: T, den: T) -> Option<Self> {
        let g = gcd(num.clone(), den.clone());
        if g.is_zero() {
            return None;
        }
        Some(Fraction {
            num: num.floor_div(&g),
            den: den.floor_div(&g),
        })
    }
}

impl<T: ToPrimitive> Fraction<T> {
    pub fn value(&self) -> f64 {
        match (self.num.to_f64(), self.den.to_f64()) {
            (Some(num), Some(den)) => num / den,
            _ => f64::NAN,
        }
    }
}

impl<T: Display + One + PartialEq> Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{} / {}", self.num, self.den)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
