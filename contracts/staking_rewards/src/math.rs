//! 256-bit intermediates for the accumulator's products.
//!
//! With 18-decimal assets `rate × elapsed × SCALE` and `staked × Δrpt`
//! leave the `i128` range long before any result does, so both are formed
//! in `U256` and only the quotient is brought back down.

#[allow(clippy::all)]
mod wide {
    uint::construct_uint! {
        pub struct U256(4);
    }
}

use wide::U256;

fn widen(value: i128) -> U256 {
    U256::from(value.max(0) as u128)
}

fn narrow(value: U256) -> i128 {
    if value.bits() > 127 {
        i128::MAX
    } else {
        value.low_u128() as i128
    }
}

/// `⌊a × b / d⌋` for non-negative operands, saturating at `i128::MAX`.
///
/// Negative operands are treated as zero. A zero divisor yields zero.
pub fn mul_div_floor(a: i128, b: i128, d: i128) -> i128 {
    if d <= 0 {
        return 0;
    }
    narrow(widen(a) * widen(b) / widen(d))
}

/// `⌊a × b × c / d⌋` under the same rules as [`mul_div_floor`].
///
/// Each factor is below 2^127, so the triple product can exceed 256 bits;
/// in that case the result saturates.
pub fn mul3_div_floor(a: i128, b: i128, c: i128, d: i128) -> i128 {
    if d <= 0 {
        return 0;
    }
    let product = (widen(a) * widen(b)).checked_mul(widen(c));
    match product {
        Some(p) => narrow(p / widen(d)),
        None => i128::MAX,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn floors_the_quotient() {
        assert_eq!(mul_div_floor(3, 5, 2), 7);
        assert_eq!(mul_div_floor(7, 1, 7), 1);
        assert_eq!(mul3_div_floor(10, 100, 3, 7), 428);
    }

    #[test]
    fn product_wider_than_i128_still_divides_exactly() {
        // 4.75e18 tokens/s × one year × 1e18, spread over 100e18 staked.
        let rate = 4_756_468_797_564_687_975i128;
        let year = 31_536_000i128;
        let scale = 1_000_000_000_000_000_000i128;
        let staked = 100 * scale;

        assert!(rate.checked_mul(year).and_then(|v| v.checked_mul(scale)).is_none());
        assert_eq!(mul3_div_floor(rate, year, scale, staked), rate * year / 100);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(mul_div_floor(i128::MAX, i128::MAX, 1), i128::MAX);
        assert_eq!(mul3_div_floor(i128::MAX, i128::MAX, i128::MAX, 1), i128::MAX);
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        assert_eq!(mul_div_floor(5, 5, 0), 0);
        assert_eq!(mul_div_floor(-5, 5, 1), 0);
    }
}
