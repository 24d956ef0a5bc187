use super::{
    integer::RationalInt,
    validate::{negate, normalize, validate_pair},
};
use crate::error::RationalError;

/// Euclid's algorithm on signed operands. The magnitude is the gcd, the sign
/// is whatever the remainders leave behind.
pub(crate) fn common_factor<T: RationalInt>(mut a: T, mut b: T) -> T {
    let one = T::one();
    while !b.is_zero() {
        // also keeps `T::MIN % -1` from ever being evaluated
        if b == one || b == -one {
            return one;
        }
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor, always non-negative. `gcd(0, 0)` is `0`.
///
/// Fails with `Overflow` only when the answer is `2^(bits - 1)`, i.e. both
/// arguments are `T::MIN` or `0`.
pub fn gcd<T: RationalInt>(a: T, b: T) -> Result<T, RationalError> {
    let g = common_factor(a, b);
    if g.is_negative() {
        negate(g)
    } else {
        Ok(g)
    }
}

/// Brings a pair to lowest terms with a positive denominator. Zero is always
/// `0/1`.
///
/// The common factor is divided out before the sign is moved, so a pair like
/// `(2, T::MIN)` reduces instead of failing on the negation of `T::MIN`; the
/// result is the same canonical pair normalize-then-reduce would give.
pub fn reduce<T: RationalInt>(numerator: T, denominator: T) -> Result<(T, T), RationalError> {
    let (numerator, denominator) = validate_pair(numerator, denominator)?;

    if numerator.is_zero() {
        return Ok((T::zero(), T::one()));
    }

    let g = common_factor(numerator, denominator);
    let (numerator, denominator) = if g == T::one() || g == -T::one() {
        (numerator, denominator)
    } else {
        (numerator / g, denominator / g)
    };

    normalize(numerator, denominator)
}
