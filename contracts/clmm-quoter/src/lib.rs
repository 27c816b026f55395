#![no_std]

mod convert;
mod error;

use clmm_math::{
    get_amount0_delta, get_amount1_delta, get_amounts, get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio, liquidity_magnitude,
};
use clmm_types::TickRange;
use convert::{from_host_u256, to_host_u256};
use soroban_sdk::{contract, contractimpl, contracttype, log, Env, U256};

pub use error::QuoterError;

/// Read-only view over the position math. Holds no storage.
#[contract]
pub struct PositionQuoter;

/// Token amounts for a liquidity change (magnitudes)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuotedAmounts {
    pub amount0: U256,
    pub amount1: U256,
}

#[contractimpl]
impl PositionQuoter {
    /// sqrt(1.0001^tick) * 2^96
    pub fn sqrt_ratio_at_tick(env: Env, tick: i32) -> Result<U256, QuoterError> {
        let sqrt_price_x96 = get_sqrt_ratio_at_tick(tick)?;
        Ok(to_host_u256(&env, sqrt_price_x96))
    }

    /// Greatest tick whose sqrt price is <= sqrt_price_x96
    pub fn tick_at_sqrt_ratio(_env: Env, sqrt_price_x96: U256) -> Result<i32, QuoterError> {
        Ok(get_tick_at_sqrt_ratio(from_host_u256(&sqrt_price_x96))?)
    }

    /// Boundary sqrt prices of a position, without any amount math
    pub fn tick_bounds(
        env: Env,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<(U256, U256), QuoterError> {
        let range = TickRange::new(tick_lower, tick_upper)?;
        let sqrt_lower = get_sqrt_ratio_at_tick(range.lower())?;
        let sqrt_upper = get_sqrt_ratio_at_tick(range.upper())?;
        Ok((to_host_u256(&env, sqrt_lower), to_host_u256(&env, sqrt_upper)))
    }

    /// Token0 amount between two sqrt prices. `liquidity` must be non-negative.
    pub fn amount0_delta(
        env: Env,
        sqrt_ratio_a_x96: U256,
        sqrt_ratio_b_x96: U256,
        liquidity: i128,
        round_up: bool,
    ) -> Result<U256, QuoterError> {
        let amount = get_amount0_delta(
            from_host_u256(&sqrt_ratio_a_x96),
            from_host_u256(&sqrt_ratio_b_x96),
            liquidity_magnitude(liquidity)?,
            round_up,
        )?;
        Ok(to_host_u256(&env, amount))
    }

    /// Token1 amount between two sqrt prices. `liquidity` must be non-negative.
    pub fn amount1_delta(
        env: Env,
        sqrt_ratio_a_x96: U256,
        sqrt_ratio_b_x96: U256,
        liquidity: i128,
        round_up: bool,
    ) -> Result<U256, QuoterError> {
        let amount = get_amount1_delta(
            from_host_u256(&sqrt_ratio_a_x96),
            from_host_u256(&sqrt_ratio_b_x96),
            liquidity_magnitude(liquidity)?,
            round_up,
        )?;
        Ok(to_host_u256(&env, amount))
    }

    /// Amounts implied by a liquidity change on [tick_lower, tick_upper)
    /// at the pool's current tick and price.
    ///
    /// Both amounts are magnitudes; the caller applies the sign of
    /// `liquidity_delta`.
    pub fn position_amounts(
        env: Env,
        tick_lower: i32,
        tick_upper: i32,
        current_tick: i32,
        liquidity_delta: i128,
        current_sqrt_price_x96: U256,
    ) -> Result<QuotedAmounts, QuoterError> {
        let amounts = get_amounts(
            tick_lower,
            tick_upper,
            current_tick,
            liquidity_delta,
            from_host_u256(&current_sqrt_price_x96),
        )?;

        log!(
            &env,
            "position amounts",
            tick_lower,
            tick_upper,
            current_tick,
            liquidity_delta
        );

        Ok(QuotedAmounts {
            amount0: to_host_u256(&env, amounts.amount0),
            amount1: to_host_u256(&env, amounts.amount1),
        })
    }
}
