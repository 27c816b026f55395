use crate::{MathError, MAX_TICK, MIN_TICK};

/// Reject ticks outside [MIN_TICK, MAX_TICK]
pub fn check_tick(tick: i32) -> Result<i32, MathError> {
    if tick < MIN_TICK || tick > MAX_TICK {
        return Err(MathError::TickOutOfRange(tick));
    }
    Ok(tick)
}

/// Validated tick bounds of a position
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickRange {
    lower: i32,
    upper: i32,
}

impl TickRange {
    pub fn new(lower: i32, upper: i32) -> Result<Self, MathError> {
        check_tick(lower)?;
        check_tick(upper)?;
        if lower >= upper {
            return Err(MathError::InvalidTickRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> i32 {
        self.lower
    }

    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// Half-open membership: the upper tick belongs to the range above
    pub fn contains(&self, tick: i32) -> bool {
        self.lower <= tick && tick < self.upper
    }
}
