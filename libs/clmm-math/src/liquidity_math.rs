use crate::full_math::mul_div;
use crate::sqrt_price_math::{get_amount0_delta, get_amount1_delta, sort_prices};
use clmm_types::{MathError, PositionAmounts, Q96, U256};

/// Accept a signed liquidity value only where it is a magnitude
pub fn liquidity_magnitude(value: i128) -> Result<u128, MathError> {
    u128::try_from(value).map_err(|_| MathError::InvalidRange)
}

/// Calculate liquidity from token amounts for a price range
pub fn get_liquidity_for_amounts(
    sqrt_ratio_x96: U256,
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
    amount1: U256,
) -> Result<u128, MathError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_prices(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        // Current price below range - all token0
        get_liquidity_for_amount0(sqrt_ratio_lower, sqrt_ratio_upper, amount0)
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        // Current price in range - both tokens
        let liquidity0 = get_liquidity_for_amount0(sqrt_ratio_x96, sqrt_ratio_upper, amount0)?;
        let liquidity1 = get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_x96, amount1)?;
        Ok(liquidity0.min(liquidity1))
    } else {
        // Current price above range - all token1
        get_liquidity_for_amount1(sqrt_ratio_lower, sqrt_ratio_upper, amount1)
    }
}

/// Calculate liquidity from amount0
/// L = amount0 * sqrt_pa * sqrt_pb / (sqrt_pb - sqrt_pa)
pub fn get_liquidity_for_amount0(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount0: U256,
) -> Result<u128, MathError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_prices(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let intermediate = mul_div(sqrt_ratio_lower, sqrt_ratio_upper, Q96)?;
    to_liquidity(mul_div(
        amount0,
        intermediate,
        sqrt_ratio_upper - sqrt_ratio_lower,
    )?)
}

/// Calculate liquidity from amount1
/// L = amount1 / (sqrt_pb - sqrt_pa)
pub fn get_liquidity_for_amount1(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    amount1: U256,
) -> Result<u128, MathError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_prices(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    to_liquidity(mul_div(amount1, Q96, sqrt_ratio_upper - sqrt_ratio_lower)?)
}

/// Get amounts from liquidity for a price range, rounding down.
/// Price-keyed counterpart of `position_math::get_amounts`.
pub fn get_amounts_for_liquidity(
    sqrt_ratio_x96: U256,
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<PositionAmounts, MathError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_prices(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        // Below range - all token0
        let amount0 = get_amount0_delta(sqrt_ratio_lower, sqrt_ratio_upper, liquidity, false)?;
        Ok(PositionAmounts::new(amount0, U256::ZERO))
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        // In range - both tokens
        let amount0 = get_amount0_delta(sqrt_ratio_x96, sqrt_ratio_upper, liquidity, false)?;
        let amount1 = get_amount1_delta(sqrt_ratio_lower, sqrt_ratio_x96, liquidity, false)?;
        Ok(PositionAmounts::new(amount0, amount1))
    } else {
        // Above range - all token1
        let amount1 = get_amount1_delta(sqrt_ratio_lower, sqrt_ratio_upper, liquidity, false)?;
        Ok(PositionAmounts::new(U256::ZERO, amount1))
    }
}

fn to_liquidity(value: U256) -> Result<u128, MathError> {
    u128::try_from(value).map_err(|_| MathError::Overflow)
}
