use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RationalError {
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    #[error("denominator can not be zero")]
    ZeroDenominator,

    #[error("division by zero")]
    DivisionByZero,

    /// A checked fixed-width step produced a value outside the integer type.
    #[error("arithmetic overflow")]
    Overflow,
}

impl RationalError {
    pub(crate) fn overflow(step: &'static str) -> Self {
        tracing::trace!(step, "fixed-width overflow");
        RationalError::Overflow
    }
}
