use alloy_primitives::{ruint::UintTryFrom, U512};
use clmm_types::{MathError, U256};

/// Multiply and divide with 512-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    let (quotient, _) = mul_div_rem(a, b, denominator)?;
    Ok(quotient)
}

/// Multiply and divide with 512-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / denominator)
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    let (quotient, remainder) = mul_div_rem(a, b, denominator)?;
    if remainder.is_zero() {
        return Ok(quotient);
    }
    quotient
        .checked_add(U256::from(1u8))
        .ok_or(MathError::Overflow)
}

/// Full-width product, truncated quotient and exact remainder
fn mul_div_rem(a: U256, b: U256, denominator: U256) -> Result<(U256, U512), MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let product: U512 = a.widening_mul(b);
    let (quotient, remainder) = product.div_rem(U512::from(denominator));

    let quotient = U256::uint_try_from(quotient).map_err(|_| MathError::Overflow)?;
    Ok((quotient, remainder))
}
