use super::{align::align, integer::RationalInt, reduce::gcd, Rational};
use crate::error::RationalError;

impl<T: RationalInt> Rational<T> {
    pub fn add(&self, other: &Self) -> Result<Self, RationalError> {
        let ((n1, denominator), (n2, _)) = align(self, other)?;
        let numerator = n1
            .checked_add(&n2)
            .ok_or_else(|| RationalError::overflow("add"))?;
        Rational::new(numerator, denominator)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self, RationalError> {
        let ((n1, denominator), (n2, _)) = align(self, other)?;
        let numerator = n1
            .checked_sub(&n2)
            .ok_or_else(|| RationalError::overflow("subtract"))?;
        Rational::new(numerator, denominator)
    }

    pub fn multiply(&self, other: &Self) -> Result<Self, RationalError> {
        product(
            (self.numerator, self.denominator),
            (other.numerator, other.denominator),
        )
    }

    pub fn divide(&self, other: &Self) -> Result<Self, RationalError> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        product(
            (self.numerator, self.denominator),
            (other.denominator, other.numerator),
        )
    }

    // In-place variants leave `self` untouched when they fail.

    pub fn add_in_place(&mut self, other: &Self) -> Result<(), RationalError> {
        *self = self.add(other)?;
        Ok(())
    }

    pub fn subtract_in_place(&mut self, other: &Self) -> Result<(), RationalError> {
        *self = self.subtract(other)?;
        Ok(())
    }

    pub fn multiply_in_place(&mut self, other: &Self) -> Result<(), RationalError> {
        *self = self.multiply(other)?;
        Ok(())
    }

    pub fn divide_in_place(&mut self, other: &Self) -> Result<(), RationalError> {
        *self = self.divide(other)?;
        Ok(())
    }
}

/// `(n1 * n2) / (d1 * d2)` with the cross factors cancelled first. The left
/// pair is canonical; the right one may carry its sign on the denominator.
fn product<T: RationalInt>(
    (n1, d1): (T, T),
    (n2, d2): (T, T),
) -> Result<Rational<T>, RationalError> {
    let g1 = cancel_factor(n1, d2)?;
    let g2 = cancel_factor(n2, d1)?;

    let numerator = (n1 / g1)
        .checked_mul(&(n2 / g2))
        .ok_or_else(|| RationalError::overflow("multiply"))?;
    let denominator = (d1 / g2)
        .checked_mul(&(d2 / g1))
        .ok_or_else(|| RationalError::overflow("multiply"))?;

    Rational::new(numerator, denominator)
}

// gcd(0, x) is |x|, which only fits when x is not `T::MIN`; cancelling
// nothing is always correct.
fn cancel_factor<T: RationalInt>(a: T, b: T) -> Result<T, RationalError> {
    match gcd(a, b) {
        Ok(g) if !g.is_zero() => Ok(g),
        Ok(_) | Err(RationalError::Overflow) => Ok(T::one()),
        Err(err) => Err(err),
    }
}
