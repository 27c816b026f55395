use crate::full_math::{mul_div, mul_div_rounding_up};
use clmm_types::{MathError, I256, Q96, RESOLUTION, U256};

/// Calculate amount0 delta between two sqrt prices
/// delta_x = L * (sqrt_pb - sqrt_pa) / (sqrt_pa * sqrt_pb)
///
/// Prices may be given in either order. The division by the upper price
/// happens first and the division by the lower price second; when rounding
/// down each step truncates on its own.
pub fn get_amount0_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, MathError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_prices(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_lower.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_upper - sqrt_ratio_lower;

    if round_up {
        mul_div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, sqrt_ratio_upper)?,
            U256::from(1u8),
            sqrt_ratio_lower,
        )
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_ratio_upper)? / sqrt_ratio_lower)
    }
}

/// Calculate amount1 delta between two sqrt prices
/// delta_y = L * (sqrt_pb - sqrt_pa)
pub fn get_amount1_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, MathError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort_prices(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    let difference = sqrt_ratio_upper - sqrt_ratio_lower;

    if round_up {
        mul_div_rounding_up(U256::from(liquidity), difference, Q96)
    } else {
        mul_div(U256::from(liquidity), difference, Q96)
    }
}

/// Signed amount0 delta for a signed liquidity change.
/// Adding liquidity rounds up (owed to the pool), removing rounds down and
/// comes back negative.
pub fn get_amount0_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: i128,
) -> Result<I256, MathError> {
    let magnitude = liquidity.unsigned_abs();
    if liquidity < 0 {
        let amount = get_amount0_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, magnitude, false)?;
        Ok(-to_i256(amount)?)
    } else {
        to_i256(get_amount0_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, magnitude, true)?)
    }
}

/// Signed amount1 delta for a signed liquidity change
pub fn get_amount1_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: i128,
) -> Result<I256, MathError> {
    let magnitude = liquidity.unsigned_abs();
    if liquidity < 0 {
        let amount = get_amount1_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, magnitude, false)?;
        Ok(-to_i256(amount)?)
    } else {
        to_i256(get_amount1_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, magnitude, true)?)
    }
}

pub(crate) fn sort_prices(sqrt_ratio_a_x96: U256, sqrt_ratio_b_x96: U256) -> (U256, U256) {
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        (sqrt_ratio_b_x96, sqrt_ratio_a_x96)
    } else {
        (sqrt_ratio_a_x96, sqrt_ratio_b_x96)
    }
}

fn to_i256(amount: U256) -> Result<I256, MathError> {
    I256::try_from(amount).map_err(|_| MathError::Overflow)
}
