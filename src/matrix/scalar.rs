use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

pub trait Scalar:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::fmt::Display
    + std::fmt::Debug
    + Send
    + Sync
{
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }
}

impl<T> Scalar for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + std::fmt::Display
        + std::fmt::Debug
        + Send
        + Sync
{
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::rational::Rational;

    #[test]
    fn test_scalar_sign() {
        assert_eq!(Scalar::abs(&-3.5f64), 3.5);
        assert_eq!(Scalar::abs(&7i64), 7);
        assert!(Scalar::is_positive(&2i32));
        assert!(!Scalar::is_positive(&0i32));
        assert!(Scalar::is_negative(&-0.5f32));

        let r: Rational = "-4/6".parse().unwrap();
        assert_eq!(Scalar::abs(&r), "2/3".parse::<Rational>().unwrap());
        assert!(r.is_negative());
    }
}
