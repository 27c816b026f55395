use crate::{MathError, I256, U256};

/// Token amounts represented by a liquidity change over a tick range.
///
/// Both fields are magnitudes. The direction of the change lives in the
/// liquidity delta the amounts were computed from; see [`PositionAmounts::signed`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PositionAmounts {
    pub amount0: U256,
    pub amount1: U256,
}

impl PositionAmounts {
    pub fn new(amount0: U256, amount1: U256) -> Self {
        Self { amount0, amount1 }
    }

    /// Apply the sign of `liquidity_delta`: owed to the pool when adding,
    /// owed to the owner (negative) when removing
    pub fn signed(&self, liquidity_delta: i128) -> Result<(I256, I256), MathError> {
        let amount0 = I256::try_from(self.amount0).map_err(|_| MathError::Overflow)?;
        let amount1 = I256::try_from(self.amount1).map_err(|_| MathError::Overflow)?;
        if liquidity_delta < 0 {
            Ok((-amount0, -amount1))
        } else {
            Ok((amount0, amount1))
        }
    }
}
