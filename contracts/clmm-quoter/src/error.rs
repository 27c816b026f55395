use clmm_types::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum QuoterError {
    TickOutOfRange = 1,
    SqrtPriceOutOfRange = 2,
    DivisionByZero = 3,
    InvalidTickRange = 4,
    InvalidRange = 5,
    Overflow = 6,
}

impl From<MathError> for QuoterError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::TickOutOfRange(_) => QuoterError::TickOutOfRange,
            MathError::SqrtPriceOutOfRange => QuoterError::SqrtPriceOutOfRange,
            MathError::DivisionByZero => QuoterError::DivisionByZero,
            MathError::InvalidTickRange { .. } => QuoterError::InvalidTickRange,
            MathError::InvalidRange => QuoterError::InvalidRange,
            MathError::Overflow => QuoterError::Overflow,
        }
    }
}
