use proptest::strategy::{BoxedStrategy, Strategy};

use crate::FlexInt;

const MIN_SMALL: i64 = FlexInt::<num_bigint::BigInt>::MIN_SMALL;
const MAX_SMALL: i64 = FlexInt::<num_bigint::BigInt>::MAX_SMALL;

pub fn i64() -> BoxedStrategy<i64> {
    (MIN_SMALL..=MAX_SMALL).boxed()
}

pub fn negative() -> BoxedStrategy<FlexInt> {
    (MIN_SMALL..=-1).prop_map(FlexInt::new).boxed()
}

pub fn non_negative() -> BoxedStrategy<FlexInt> {
    (0..=MAX_SMALL).prop_map(FlexInt::new).boxed()
}

pub fn any() -> BoxedStrategy<FlexInt> {
    i64().prop_map(FlexInt::new).boxed()
}
