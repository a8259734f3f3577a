use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

use crate::error::ParseRationalError;

/// Exact rational number, always reduced with a positive denominator.
///
/// Every value is kept in that canonical form, so equality compares the
/// fields directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = num.gcd(&den);
        let (num, den) = if g.is_one() {
            (num, den)
        } else {
            (num / &g, den / &g)
        };

        if den.is_negative() {
            Self {
                num: -num,
                den: -den,
            }
        } else {
            Self { num, den }
        }
    }

    pub fn from_integer(value: i64) -> Self {
        Self {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Panics on zero, like any division by zero.
    pub fn recip(self) -> Rational {
        Rational::new(self.den, self.num)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Rational {
        Rational::from_integer(value)
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, ParseRationalError> {
        let parse = |part: &str| {
            let part = part.trim();
            BigInt::parse_bytes(part.as_bytes(), 10)
                .ok_or_else(|| ParseRationalError::InvalidNumber(part.to_owned()))
        };

        if s.trim().is_empty() {
            return Err(ParseRationalError::Empty);
        }

        let mut parts = s.split('/');
        let num = parse(parts.next().ok_or(ParseRationalError::Empty)?)?;
        let den = match parts.next() {
            Some(den) => parse(den)?,
            None => BigInt::one(),
        };
        if let Some(extra) = parts.next() {
            return Err(ParseRationalError::InvalidNumber(extra.to_owned()));
        }
        if den.is_zero() {
            return Err(ParseRationalError::ZeroDenominator);
        }

        Ok(Rational::new(num, den))
    }
}

impl ops::Add for Rational {
    type Output = Rational;

    // Scale both sides to the least common denominator; equal denominators
    // scale by one.
    fn add(self, rhs: Rational) -> Rational {
        let den = self.den.lcm(&rhs.den);
        let num = self.num * (&den / &self.den) + rhs.num * (&den / &rhs.den);
        Rational::new(num, den)
    }
}

impl ops::Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self + (-rhs)
    }
}

impl ops::Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Mul for Rational {
    type Output = Rational;

    // Cross-cancel before multiplying so intermediates stay small.
    fn mul(self, rhs: Rational) -> Rational {
        let g1 = self.num.gcd(&rhs.den);
        let g2 = rhs.num.gcd(&self.den);
        Rational::new(
            (self.num / &g1) * (rhs.num / &g2),
            (self.den / &g2) * (rhs.den / &g1),
        )
    }
}

impl ops::Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        self * rhs.recip()
    }
}

impl One for Rational {
    fn one() -> Rational {
        Rational::from_integer(1)
    }
}

impl Zero for Rational {
    fn zero() -> Rational {
        Rational::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, rhs: &Rational) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Rational {
    // Denominators are positive, so cross multiplication keeps the order.
    fn cmp(&self, rhs: &Rational) -> Ordering {
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl std::iter::Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), ops::Add::add)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
