use std::fmt::{Display, Formatter};

use num_traits::cast;

use super::integer::RationalInt;
use crate::error::RationalError;

/// A numerator or denominator as it arrives from an untyped source.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Integer(i128),
    Float(f64),
    Text(String),
    Missing,
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Integer(i) => write!(f, "{}", i),
            Operand::Float(x) => write!(f, "{}", x),
            Operand::Text(s) => write!(f, "{:?}", s),
            Operand::Missing => write!(f, "<missing>"),
        }
    }
}

/// Accepts only finite integral numbers that fit `T`. Text is never
/// interpreted, even when it spells a number.
pub fn validate_operand<T: RationalInt>(operand: &Operand) -> Result<T, RationalError> {
    let invalid = |reason: &str| RationalError::InvalidOperand(format!("{} {}", operand, reason));

    match operand {
        Operand::Integer(value) => cast::<i128, T>(*value).ok_or_else(|| invalid("is out of range")),
        Operand::Float(value) if !value.is_finite() => Err(invalid("is not a finite number")),
        Operand::Float(value) if value.fract() != 0.0 => Err(invalid("is not an integer")),
        Operand::Float(value) => cast::<f64, T>(*value).ok_or_else(|| invalid("is out of range")),
        Operand::Text(_) => Err(invalid("is not a number")),
        Operand::Missing => Err(RationalError::InvalidOperand("missing operand".to_string())),
    }
}

pub fn validate_pair<T: RationalInt>(numerator: T, denominator: T) -> Result<(T, T), RationalError> {
    if denominator.is_zero() {
        return Err(RationalError::ZeroDenominator);
    }
    Ok((numerator, denominator))
}

/// Moves the sign onto the numerator. Fails only when one of the fields is
/// `T::MIN`, whose negation has no representation.
pub fn normalize<T: RationalInt>(numerator: T, denominator: T) -> Result<(T, T), RationalError> {
    if denominator.is_negative() {
        Ok((negate(numerator)?, negate(denominator)?))
    } else {
        Ok((numerator, denominator))
    }
}

pub(crate) fn negate<T: RationalInt>(value: T) -> Result<T, RationalError> {
    T::zero()
        .checked_sub(&value)
        .ok_or_else(|| RationalError::overflow("negate"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid<T: std::fmt::Debug>(result: Result<T, RationalError>) -> bool {
        matches!(result, Err(RationalError::InvalidOperand(_)))
    }

    #[test]
    fn test_operand_validation() {
        assert_eq!(validate_operand::<i64>(&Operand::Integer(-7)), Ok(-7));
        assert_eq!(validate_operand::<i64>(&Operand::Float(4.0)), Ok(4));
        assert_eq!(validate_operand::<i64>(&Operand::Float(-0.0)), Ok(0));

        assert!(is_invalid(validate_operand::<i64>(&Operand::Float(1.5))));
        assert!(is_invalid(validate_operand::<i64>(&Operand::Float(f64::INFINITY))));
        assert!(is_invalid(validate_operand::<i64>(&Operand::Float(f64::NAN))));
        assert!(is_invalid(validate_operand::<i64>(&Operand::Float(1e30))));
        assert!(is_invalid(validate_operand::<i64>(&Operand::Text("1".to_string()))));
        assert!(is_invalid(validate_operand::<i64>(&Operand::Missing)));
        assert!(is_invalid(validate_operand::<i8>(&Operand::Integer(300))));
    }

    #[test]
    fn test_invalid_operand_message() {
        assert_eq!(
            validate_operand::<i32>(&Operand::Text("1".to_string())),
            Err(RationalError::InvalidOperand("\"1\" is not a number".to_string()))
        );
        assert_eq!(
            validate_operand::<i32>(&Operand::Float(2.5)),
            Err(RationalError::InvalidOperand("2.5 is not an integer".to_string()))
        );
    }

    #[test]
    fn test_validate_pair() {
        assert_eq!(validate_pair(3, 4), Ok((3, 4)));
        assert_eq!(validate_pair(0, -4), Ok((0, -4)));
        assert_eq!(validate_pair(3, 0), Err(RationalError::ZeroDenominator));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(1, -3), Ok((-1, 3)));
        assert_eq!(normalize(-1, -3), Ok((1, 3)));
        assert_eq!(normalize(5, 7), Ok((5, 7)));
        assert_eq!(normalize(i8::MIN, -1), Err(RationalError::Overflow));
        assert_eq!(normalize(1, i8::MIN), Err(RationalError::Overflow));
    }
}
