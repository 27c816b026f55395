use thiserror::Error;

/// Faults raised by the position math. All are deterministic input errors.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum MathError {
    #[error("tick {0} out of bounds")]
    TickOutOfRange(i32),

    #[error("sqrt price out of bounds")]
    SqrtPriceOutOfRange,

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid tick range: lower {lower} must be below upper {upper}")]
    InvalidTickRange { lower: i32, upper: i32 },

    /// A negative liquidity was supplied where a magnitude is required
    #[error("liquidity must be non-negative")]
    InvalidRange,

    #[error("result does not fit the output type")]
    Overflow,
}
