use crate::sqrt_price_math::{get_amount0_delta, get_amount1_delta};
use crate::tick_math::get_sqrt_ratio_at_tick;
use clmm_types::{MathError, PositionAmounts, TickRange, U256};

/// Where the pool's current tick sits relative to a position's [lower, upper)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangePosition {
    /// Entirely token0
    Below,
    /// Straddles the current price, both tokens
    Inside,
    /// Entirely token1
    Above,
}

impl RangePosition {
    pub fn of(range: &TickRange, current_tick: i32) -> Self {
        if current_tick < range.lower() {
            RangePosition::Below
        } else if range.contains(current_tick) {
            RangePosition::Inside
        } else {
            RangePosition::Above
        }
    }
}

/// Boundary prices and rounding resolved once per call
struct PositionBounds {
    sqrt_lower: U256,
    sqrt_upper: U256,
    position: RangePosition,
    liquidity: u128,
    round_up: bool,
}

impl PositionBounds {
    fn resolve(
        tick_lower: i32,
        tick_upper: i32,
        current_tick: i32,
        liquidity_delta: i128,
    ) -> Result<Self, MathError> {
        let range = TickRange::new(tick_lower, tick_upper)?;
        Ok(Self {
            sqrt_lower: get_sqrt_ratio_at_tick(range.lower())?,
            sqrt_upper: get_sqrt_ratio_at_tick(range.upper())?,
            position: RangePosition::of(&range, current_tick),
            liquidity: liquidity_delta.unsigned_abs(),
            // Adding liquidity rounds in the pool's favour
            round_up: liquidity_delta > 0,
        })
    }
}

/// Token0 amount for a liquidity change on [tick_lower, tick_upper).
///
/// Returns a magnitude: callers apply the sign of `liquidity_delta`
/// themselves (see [`PositionAmounts::signed`]).
pub fn get_amount0(
    tick_lower: i32,
    tick_upper: i32,
    current_tick: i32,
    liquidity_delta: i128,
    current_sqrt_price_x96: U256,
) -> Result<U256, MathError> {
    let bounds = PositionBounds::resolve(tick_lower, tick_upper, current_tick, liquidity_delta)?;
    amount0(&bounds, current_sqrt_price_x96)
}

/// Token1 amount for a liquidity change on [tick_lower, tick_upper)
pub fn get_amount1(
    tick_lower: i32,
    tick_upper: i32,
    current_tick: i32,
    liquidity_delta: i128,
    current_sqrt_price_x96: U256,
) -> Result<U256, MathError> {
    let bounds = PositionBounds::resolve(tick_lower, tick_upper, current_tick, liquidity_delta)?;
    amount1(&bounds, current_sqrt_price_x96)
}

/// Both token amounts for a liquidity change on [tick_lower, tick_upper)
pub fn get_amounts(
    tick_lower: i32,
    tick_upper: i32,
    current_tick: i32,
    liquidity_delta: i128,
    current_sqrt_price_x96: U256,
) -> Result<PositionAmounts, MathError> {
    let bounds = PositionBounds::resolve(tick_lower, tick_upper, current_tick, liquidity_delta)?;
    Ok(PositionAmounts::new(
        amount0(&bounds, current_sqrt_price_x96)?,
        amount1(&bounds, current_sqrt_price_x96)?,
    ))
}

fn amount0(bounds: &PositionBounds, current_sqrt_price_x96: U256) -> Result<U256, MathError> {
    match bounds.position {
        RangePosition::Below => get_amount0_delta(
            bounds.sqrt_lower,
            bounds.sqrt_upper,
            bounds.liquidity,
            bounds.round_up,
        ),
        RangePosition::Inside => get_amount0_delta(
            current_sqrt_price_x96,
            bounds.sqrt_upper,
            bounds.liquidity,
            bounds.round_up,
        ),
        RangePosition::Above => Ok(U256::ZERO),
    }
}

fn amount1(bounds: &PositionBounds, current_sqrt_price_x96: U256) -> Result<U256, MathError> {
    match bounds.position {
        RangePosition::Below => Ok(U256::ZERO),
        RangePosition::Inside => get_amount1_delta(
            bounds.sqrt_lower,
            current_sqrt_price_x96,
            bounds.liquidity,
            bounds.round_up,
        ),
        RangePosition::Above => get_amount1_delta(
            bounds.sqrt_lower,
            bounds.sqrt_upper,
            bounds.liquidity,
            bounds.round_up,
        ),
    }
}
