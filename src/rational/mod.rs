use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use crate::error::RationalError;

pub mod integer;

pub mod validate;

pub mod reduce;

pub mod align;

pub mod ops;

pub mod prelude {
    pub use super::align::{align, lcm, lcm_all};
    pub use super::integer::RationalInt;
    pub use super::reduce::{gcd, reduce};
    pub use super::validate::{normalize, validate_operand, validate_pair, Operand};
    pub use super::Rational;
}

use prelude::*;

/// An exact fraction over a fixed-width signed integer.
///
/// The fields are private and only ever hold the canonical form: positive
/// denominator, numerator and denominator coprime, zero as `0/1`.
#[derive(Clone, Copy, Debug)]
pub struct Rational<T> {
    numerator: T,
    denominator: T,
}

impl<T: RationalInt> Rational<T> {
    pub fn new(numerator: T, denominator: T) -> Result<Self, RationalError> {
        let (numerator, denominator) = reduce(numerator, denominator)?;
        Ok(Rational {
            numerator,
            denominator,
        })
    }

    /// Validates two untyped operands, then constructs.
    pub fn from_operands(numerator: &Operand, denominator: &Operand) -> Result<Self, RationalError> {
        let numerator = validate_operand(numerator)?;
        let denominator = validate_operand(denominator)?;
        Rational::new(numerator, denominator)
    }

    pub fn from_integer(value: T) -> Self {
        Rational {
            numerator: value,
            denominator: T::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(T::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(T::one())
    }

    pub fn numerator(&self) -> T {
        self.numerator
    }

    pub fn denominator(&self) -> T {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == T::one()
    }

    pub fn reciprocal(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Rational::new(self.denominator, self.numerator)
    }

    /// Overwrites `self` with `other`.
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    /// Compares the reduced forms of both sides.
    pub fn are_equal(lhs: &Self, rhs: &Self) -> bool {
        match (
            reduce(lhs.numerator, lhs.denominator),
            reduce(rhs.numerator, rhs.denominator),
        ) {
            (Ok(lhs), Ok(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<T: RationalInt> PartialEq for Rational<T> {
    fn eq(&self, other: &Self) -> bool {
        Rational::are_equal(self, other)
    }
}

impl<T: RationalInt> Eq for Rational<T> {}

// consistent with `eq` because the stored pair is already reduced
impl<T: RationalInt> Hash for Rational<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl<T: RationalInt> Default for Rational<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RationalInt> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: RationalInt> Display for Rational<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}
