#![no_std]

mod error;
mod position;
mod tick;

pub use error::*;
pub use position::*;
pub use tick::*;

pub use alloy_primitives::{I256, U256};

/// Number of fractional bits in a Q64.96 sqrt price
pub const RESOLUTION: usize = 96;

/// Q96 constant (2^96) for fixed-point math
pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// Minimum tick index, the lowest tick whose sqrt price fits the reference's uint160
pub const MIN_TICK: i32 = -887272;

/// Maximum tick index
pub const MAX_TICK: i32 = -MIN_TICK;

/// Minimum sqrt price, equal to get_sqrt_ratio_at_tick(MIN_TICK)
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);

/// Maximum sqrt price, equal to get_sqrt_ratio_at_tick(MAX_TICK)
/// 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([0x5d951d5263988d26, 0xefd1fc6a50648849, 0xfffd8963, 0]);
