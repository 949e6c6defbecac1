//! Stake valuation.
//!
//! Non-native stakes are recorded in native units so that every entry in a
//! round competes on the same denomination. The conversion is deliberately a
//! pure function kept apart from the instruction handlers: the feed identity
//! is validated on-chain against the whitelist, while the spot price itself
//! is supplied by the caller until a pull-feed integration replaces it.

/// Native-unit valuation of `amount` of a stake asset at `spot_price`
/// (native units per smallest asset unit). Returns `None` on overflow;
/// callers surface that as a typed error.
pub fn native_value(amount: u64, spot_price: u64) -> Option<u64> {
    amount.checked_mul(spot_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 100, Some(0))]
    #[case(15, 1, Some(15))]
    #[case(15, 20, Some(300))]
    #[case(1_000_000, 142, Some(142_000_000))]
    #[case(u64::MAX, 1, Some(u64::MAX))]
    #[case(u64::MAX, 2, None)]
    #[case(u64::MAX / 2 + 1, 2, None)]
    fn native_value_cases(#[case] amount: u64, #[case] price: u64, #[case] expected: Option<u64>) {
        assert_eq!(native_value(amount, price), expected);
    }
}
