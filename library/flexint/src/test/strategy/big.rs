use num_bigint::{BigInt, Sign};
use proptest::arbitrary::any;
use proptest::collection::vec;
use proptest::strategy::{BoxedStrategy, Strategy};

use crate::FlexInt;

/// Big integers of two to eight 32-bit digits, always outside the small range
pub fn bigint() -> BoxedStrategy<BigInt> {
    (any::<bool>(), vec(any::<u32>(), 2..=8))
        .prop_filter_map("value fits in a small integer", |(negative, digits)| {
            let sign = if negative { Sign::Minus } else { Sign::Plus };
            let big = BigInt::new(sign, digits);
            if FlexInt::from(big.clone()).is_big() {
                Some(big)
            } else {
                None
            }
        })
        .boxed()
}

pub fn any_big() -> BoxedStrategy<FlexInt> {
    bigint().prop_map(FlexInt::from).boxed()
}
