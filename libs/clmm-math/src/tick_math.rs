use clmm_types::{check_tick, MathError, I256, MAX_SQRT_RATIO, MIN_SQRT_RATIO, U256};

/// sqrt(1.0001)^-1 in Q128, the starting ratio when bit 0 of |tick| is set
const SQRT_1_0001_NEG_1: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// sqrt(1.0001)^-(2^k) in Q128 for bits 1..=19 of |tick|
const SQRT_1_0001_NEG_POW2: [(u32, u128); 19] = [
    (0x2, 0xfff97272373d413259a46990580e213a),
    (0x4, 0xfff2e50f5f656932ef12357cf3c7fdcc),
    (0x8, 0xffe5caca7e10e4e61c3624eaa0941cd0),
    (0x10, 0xffcb9843d60f6159c9db58835c926644),
    (0x20, 0xff973b41fa98c081472e6896dfb254c0),
    (0x40, 0xff2ea16466c96a3843ec78b326b52861),
    (0x80, 0xfe5dee046a99a2a811c461f1969c3053),
    (0x100, 0xfcbe86c7900a88aedcffc83b479aa3a4),
    (0x200, 0xf987a7253ac413176f2b074cf7815e54),
    (0x400, 0xf3392b0822b70005940c7a398e4b70f3),
    (0x800, 0xe7159475a2c29b7443b29c7fa6e889d9),
    (0x1000, 0xd097f3bdfd2022b8845ad8f792aa5825),
    (0x2000, 0xa9f746462d870fdf8a65dc1f90e061e5),
    (0x4000, 0x70d869a156d2a1b890bb3df62baf32f7),
    (0x8000, 0x31be135f97d08fd981231505542fcfa6),
    (0x10000, 0x9aa508b5b7a84e1c677de54f3e99bc9),
    (0x20000, 0x5d6af8dedb81196699c329225ee604),
    (0x40000, 0x2216e584f5fa1ea926041bedfe98),
    (0x80000, 0x48a170391f7dc42444e8fa2),
];

/// log_sqrt(1.0001)(2) in Q128, turns a Q64 log2 into a Q128 tick
const LOG2_TO_LOG_SQRT_1_0001: u128 = 255738958999603826347141;

/// Error bounds of the log approximation, in Q128
const TICK_LOW_ERROR: u128 = 3402992956809132418596140100660247210;
const TICK_HIGH_ERROR: u128 = 291339464771989622907027621153398088495;

/// Calculate sqrt(1.0001^tick) * 2^96
///
/// Binary exponentiation of sqrt(1.0001)^-|tick| in Q128, inverted for
/// positive ticks and rounded up on the final Q128 -> Q96 conversion.
/// Every intermediate step truncates, matching the on-chain TickMath.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256, MathError> {
    check_tick(tick)?;
    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(SQRT_1_0001_NEG_1)
    } else {
        U256::from(1u8) << 128
    };

    for (mask, magic) in SQRT_1_0001_NEG_POW2 {
        if abs_tick & mask != 0 {
            ratio = mul_shift_128(ratio, magic);
        }
    }

    // Invert if tick is positive (we computed for negative tick)
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Convert from Q128 to Q96, rounding up so the result never undershoots
    let truncated_bits = ratio & U256::from(u32::MAX);
    let sqrt_price_x96 = ratio >> 32;
    if truncated_bits.is_zero() {
        Ok(sqrt_price_x96)
    } else {
        Ok(sqrt_price_x96 + U256::from(1u8))
    }
}

/// Get the greatest tick whose sqrt ratio is <= sqrt_price_x96
///
/// Valid inputs are [MIN_SQRT_RATIO, MAX_SQRT_RATIO).
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: U256) -> Result<i32, MathError> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        return Err(MathError::SqrtPriceOutOfRange);
    }

    // Q128 ratio, below 2^192 for every valid price
    let ratio: U256 = sqrt_price_x96 << 32;
    let msb = ratio.bit_len() - 1;

    // Normalise into [2^127, 2^128)
    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    // Integer part of log2 in Q64, fractional bits filled by repeated squaring
    let mut log_2: i128 = (msb as i128 - 128) << 64;
    for bit in (50..=63).rev() {
        r = (r * r) >> 127;
        let f = usize::from(r.bit(128));
        log_2 |= (f as i128) << bit;
        r >>= f;
    }

    let log_sqrt_1_0001 = I256::try_from(log_2).map_err(|_| MathError::Overflow)?
        * I256::from_raw(U256::from(LOG2_TO_LOG_SQRT_1_0001));

    let tick_low = to_tick(log_sqrt_1_0001 - I256::from_raw(U256::from(TICK_LOW_ERROR)))?;
    let tick_high = to_tick(log_sqrt_1_0001 + I256::from_raw(U256::from(TICK_HIGH_ERROR)))?;

    if tick_low == tick_high {
        Ok(tick_low)
    } else if get_sqrt_ratio_at_tick(tick_high)? <= sqrt_price_x96 {
        Ok(tick_high)
    } else {
        Ok(tick_low)
    }
}

/// Helper: multiply by a Q128 constant and truncate back to Q128
fn mul_shift_128(ratio: U256, magic: u128) -> U256 {
    // ratio <= 2^128 and magic < 2^128, so the product fits 256 bits
    (ratio * U256::from(magic)) >> 128
}

/// Helper: floor a Q128 signed log value to a tick
fn to_tick(log_q128: I256) -> Result<i32, MathError> {
    i32::try_from(log_q128.asr(128)).map_err(|_| MathError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clmm_types::{MAX_TICK, MIN_TICK, Q96};

    fn u(value: &str) -> U256 {
        value.parse().unwrap()
    }

    // === get_sqrt_ratio_at_tick tests ===

    #[test]
    fn test_get_sqrt_ratio_at_tick_zero() {
        // At tick 0, price = 1, sqrt(price) = 1
        assert_eq!(get_sqrt_ratio_at_tick(0), Ok(Q96));
    }

    #[test]
    fn test_get_sqrt_ratio_at_tick_bounds() {
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK), Ok(MIN_SQRT_RATIO));
        assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK), Ok(MAX_SQRT_RATIO));
    }

    #[test]
    fn test_get_sqrt_ratio_next_to_bounds() {
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK + 1), Ok(u("4295343490")));
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK - 1),
            Ok(u("1461373636630004318706518188784493106690254656249"))
        );
    }

    #[test]
    fn test_get_sqrt_ratio_known_values() {
        let cases = [
            (1, "79232123823359799118286999568"),
            (-1, "79224201403219477170569942574"),
            (10, "79267784519130042428790663799"),
            (-10, "79188560314459151373725315960"),
            (50, "79426470787362580746886972461"),
            (-50, "79030349367926598376800521322"),
            (100, "79625275426524748796330556128"),
            (-100, "78833030112140176575862854579"),
            (1000, "83290069058676223003182343270"),
            (-1000, "75364347830767020784054125655"),
            (10000, "130621891405341611593710811006"),
            (-10000, "48055510970269007215549348797"),
            (50000, "965075977353221155028623082916"),
            (150000, "143194173941309278083010301478497"),
            (250000, "21246587762933397357449903968194344"),
            (500000, "5697689776495288729098254600827762987878"),
            (-500000, "1101692437043807371"),
            (738203, "847134979253254120489401328389043031315994541"),
        ];
        for (tick, expected) in cases {
            assert_eq!(get_sqrt_ratio_at_tick(tick), Ok(u(expected)), "tick {}", tick);
        }
    }

    #[test]
    fn test_get_sqrt_ratio_at_tick_monotonic() {
        let mut prev_sqrt = get_sqrt_ratio_at_tick(-10000).unwrap();
        for tick in (-9999..=10000).step_by(100) {
            let sqrt = get_sqrt_ratio_at_tick(tick).unwrap();
            assert!(sqrt > prev_sqrt, "sqrt_price should be monotonically increasing");
            prev_sqrt = sqrt;
        }
    }

    #[test]
    fn test_get_sqrt_ratio_adjacent_ticks_near_bounds_increase() {
        for tick in MIN_TICK..MIN_TICK + 64 {
            assert!(get_sqrt_ratio_at_tick(tick).unwrap() < get_sqrt_ratio_at_tick(tick + 1).unwrap());
        }
        for tick in MAX_TICK - 64..MAX_TICK {
            assert!(get_sqrt_ratio_at_tick(tick).unwrap() < get_sqrt_ratio_at_tick(tick + 1).unwrap());
        }
    }

    #[test]
    fn test_get_sqrt_ratio_at_tick_symmetric() {
        // sqrt(1.0001^n) * sqrt(1.0001^-n) = 1, i.e. 2^192 in Q96 * Q96;
        // each side rounds by at most one unit of the other factor
        let q192 = U256::from(1u8) << 192;
        for tick in [1, 100, 6931, 100000, 524702, MAX_TICK] {
            let a = get_sqrt_ratio_at_tick(tick).unwrap();
            let b = get_sqrt_ratio_at_tick(-tick).unwrap();
            let product = a * b;
            let diff = if product > q192 { product - q192 } else { q192 - product };
            assert!(diff < a + b, "tick {} breaks reciprocal symmetry", tick);
        }
    }

    #[test]
    fn test_get_sqrt_ratio_below_min_tick() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK - 1),
            Err(MathError::TickOutOfRange(MIN_TICK - 1))
        );
    }

    #[test]
    fn test_get_sqrt_ratio_above_max_tick() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK + 1),
            Err(MathError::TickOutOfRange(MAX_TICK + 1))
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(i32::MAX),
            Err(MathError::TickOutOfRange(i32::MAX))
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(i32::MIN),
            Err(MathError::TickOutOfRange(i32::MIN))
        );
    }

    // === get_tick_at_sqrt_ratio tests ===

    #[test]
    fn test_get_tick_at_sqrt_ratio_q96() {
        assert_eq!(get_tick_at_sqrt_ratio(Q96), Ok(0));
    }

    #[test]
    fn test_get_tick_at_sqrt_ratio_min() {
        assert_eq!(get_tick_at_sqrt_ratio(MIN_SQRT_RATIO), Ok(MIN_TICK));
        assert_eq!(get_tick_at_sqrt_ratio(MIN_SQRT_RATIO + U256::from(1u8)), Ok(MIN_TICK));
    }

    #[test]
    fn test_get_tick_at_sqrt_ratio_just_below_max() {
        assert_eq!(
            get_tick_at_sqrt_ratio(MAX_SQRT_RATIO - U256::from(1u8)),
            Ok(MAX_TICK - 1)
        );
    }

    #[test]
    fn test_get_tick_at_sqrt_ratio_floors_between_ticks() {
        let sqrt_100 = u("79625275426524748796330556128");
        assert_eq!(get_tick_at_sqrt_ratio(sqrt_100), Ok(100));
        assert_eq!(get_tick_at_sqrt_ratio(sqrt_100 - U256::from(1u8)), Ok(99));
        assert_eq!(get_tick_at_sqrt_ratio(u("56025063284388026574112267992")), Ok(-6931));
    }

    #[test]
    fn test_get_tick_at_sqrt_ratio_roundtrip() {
        for tick in [
            MIN_TICK, -500000, -100000, -10000, -1000, -100, -1, 0, 1, 100, 1000, 10000, 100000,
            500000, MAX_TICK - 1,
        ] {
            let sqrt_price = get_sqrt_ratio_at_tick(tick).unwrap();
            assert_eq!(get_tick_at_sqrt_ratio(sqrt_price), Ok(tick), "tick {}", tick);
        }
    }

    #[test]
    fn test_get_tick_at_sqrt_ratio_below_min() {
        assert_eq!(
            get_tick_at_sqrt_ratio(MIN_SQRT_RATIO - U256::from(1u8)),
            Err(MathError::SqrtPriceOutOfRange)
        );
        assert_eq!(get_tick_at_sqrt_ratio(U256::ZERO), Err(MathError::SqrtPriceOutOfRange));
    }

    #[test]
    fn test_get_tick_at_sqrt_ratio_at_max() {
        // MAX_SQRT_RATIO is exclusive
        assert_eq!(
            get_tick_at_sqrt_ratio(MAX_SQRT_RATIO),
            Err(MathError::SqrtPriceOutOfRange)
        );
    }
}
