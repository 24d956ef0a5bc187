use super::{integer::RationalInt, reduce::common_factor, validate::negate, Rational};
use crate::error::RationalError;

/// Least common multiple, non-negative. Both arguments are denominators, so
/// a zero is reported as `ZeroDenominator`.
pub fn lcm<T: RationalInt>(a: T, b: T) -> Result<T, RationalError> {
    if a.is_zero() || b.is_zero() {
        return Err(RationalError::ZeroDenominator);
    }

    let g = common_factor(a, b);
    let multiple = (a / g)
        .checked_mul(&b)
        .ok_or_else(|| RationalError::overflow("lcm"))?;

    if multiple.is_negative() {
        negate(multiple)
    } else {
        Ok(multiple)
    }
}

pub fn lcm_all<T: RationalInt>(values: &[T]) -> Result<T, RationalError> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| RationalError::InvalidOperand("no values to take the lcm of".to_string()))?;

    rest.iter().try_fold(lcm(*first, T::one())?, |acc, value| lcm(acc, *value))
}

/// Rescales both fractions onto their least common denominator and returns
/// the `(numerator, denominator)` pairs.
pub fn align<T: RationalInt>(
    lhs: &Rational<T>,
    rhs: &Rational<T>,
) -> Result<((T, T), (T, T)), RationalError> {
    let (n1, d1) = (lhs.numerator(), lhs.denominator());
    let (n2, d2) = (rhs.numerator(), rhs.denominator());

    if d1 == d2 {
        return Ok(((n1, d1), (n2, d2)));
    }

    let common = lcm(d1, d2)?;
    let n1 = n1
        .checked_mul(&(common / d1))
        .ok_or_else(|| RationalError::overflow("align"))?;
    let n2 = n2
        .checked_mul(&(common / d2))
        .ok_or_else(|| RationalError::overflow("align"))?;

    Ok(((n1, common), (n2, common)))
}
