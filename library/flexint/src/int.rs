
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use num_bigint::{BigInt, ParseBigIntError, ToBigInt};
use num_traits::{ToPrimitive, Zero};

/// An arbitrary-precision signed integer, stored inline when it fits in a tagged
/// machine word and as a big integer otherwise.
///
/// The big representation is generic so that the arithmetic engine backing it can be
/// swapped out; by default it is [`num_bigint::BigInt`].
///
/// A well-formed value never holds something in `Big` that fits in the `Small` range.
/// Constructors in this module maintain that, but code matching on the variants
/// directly must not rely on it.
#[derive(Debug, Clone)]
pub enum FlexInt<B = BigInt> {
    Small(i64),
    Big(B),
}
impl<B> FlexInt<B> {
    // One bit of the word is reserved for the tag, and the range is kept symmetric
    // so that negating a small value can never overflow
    const TAG_BITS: u32 = 1;
    pub const MAX_SMALL: i64 = i64::MAX >> Self::TAG_BITS;
    pub const MIN_SMALL: i64 = -Self::MAX_SMALL;

    /// Returns true if `i` can be stored in the `Small` representation
    #[inline]
    pub const fn fits_small(i: i64) -> bool {
        i >= Self::MIN_SMALL && i <= Self::MAX_SMALL
    }

    #[inline]
    pub fn is_small(&self) -> bool {
        matches!(self, Self::Small(_))
    }

    #[inline]
    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big(_))
    }
}
impl FlexInt {
    #[inline]
    pub fn new(i: i64) -> Self {
        if Self::fits_small(i) {
            Self::Small(i)
        } else {
            Self::Big(i.into())
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Small(num) => *num == 0,
            Self::Big(num) => num.is_zero(),
        }
    }

    /// Parses `string` in the given radix, returning `None` if it is not a valid
    /// integer or `radix` is outside `2..=36`
    pub fn from_string_radix(string: &str, radix: u32) -> Option<Self> {
        if !(2..=36).contains(&radix) {
            return None;
        }
        if let Ok(i) = i64::from_str_radix(string, radix) {
            return Some(Self::new(i));
        }
        let bi = BigInt::parse_bytes(string.as_bytes(), radix)?;
        Some(bi.into())
    }
}

impl<B: fmt::Display> fmt::Display for FlexInt<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Small(int) => fmt::Display::fmt(int, f),
            Self::Big(int) => fmt::Display::fmt(int, f),
        }
    }
}

impl FromStr for FlexInt {
    type Err = ParseBigIntError;
    fn from_str(s: &str) -> Result<Self, ParseBigIntError> {
        match s.parse::<i64>() {
            Ok(i) => Ok(Self::new(i)),
            Err(_) => s.parse::<BigInt>().map(Self::from),
        }
    }
}

impl Eq for FlexInt {}
impl PartialEq for FlexInt {
    fn eq(&self, rhs: &FlexInt) -> bool {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => lhs.eq(rhs),
            (Self::Small(lhs), Self::Big(rhs)) | (Self::Big(rhs), Self::Small(lhs)) => {
                rhs.to_i64().map(|i| i.eq(lhs)).unwrap_or(false)
            }
            (Self::Big(lhs), Self::Big(rhs)) => lhs.eq(rhs),
        }
    }
}
// Must agree with `PartialEq`, so a big value that fits in an i64 hashes as one
impl Hash for FlexInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Small(i) => i.hash(state),
            Self::Big(i) => match i.to_i64() {
                Some(n) => n.hash(state),
                None => i.hash(state),
            },
        }
    }
}
impl PartialEq<i64> for FlexInt {
    fn eq(&self, rhs: &i64) -> bool {
        match self {
            Self::Small(lhs) => lhs.eq(rhs),
            Self::Big(lhs) => lhs.eq(&BigInt::from(*rhs)),
        }
    }
}
impl PartialEq<FlexInt> for i64 {
    fn eq(&self, rhs: &FlexInt) -> bool {
        rhs.eq(self)
    }
}

impl ToBigInt for FlexInt {
    fn to_bigint(&self) -> Option<BigInt> {
        match self {
            Self::Small(int) => Some(BigInt::from(*int)),
            Self::Big(num) => Some(num.clone()),
        }
    }
}

impl From<BigInt> for FlexInt {
    #[inline]
    fn from(i: BigInt) -> Self {
        match i.to_i64() {
            Some(n) if Self::fits_small(n) => Self::Small(n),
            Some(_) | None => Self::Big(i),
        }
    }
}
impl From<i64> for FlexInt {
    #[inline(always)]
    fn from(i: i64) -> Self {
        Self::new(i)
    }
}
impl From<u64> for FlexInt {
    #[inline]
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(i) => Self::new(i),
            Err(_) => Self::Big(i.into()),
        }
    }
}
impl From<i128> for FlexInt {
    fn from(i: i128) -> Self {
        match i64::try_from(i) {
            Ok(i) => Self::new(i),
            Err(_) => Self::Big(i.into()),
        }
    }
}
impl From<u128> for FlexInt {
    fn from(i: u128) -> Self {
        match i64::try_from(i) {
            Ok(i) => Self::new(i),
            Err(_) => Self::Big(i.into()),
        }
    }
}
impl From<isize> for FlexInt {
    #[inline(always)]
    fn from(i: isize) -> Self {
        (i as i64).into()
    }
}
impl From<usize> for FlexInt {
    #[inline(always)]
    fn from(i: usize) -> Self {
        (i as u64).into()
    }
}

macro_rules! impl_from_narrow {
    ($($ty:ty),*) => {
        $(
            impl<B> From<$ty> for FlexInt<B> {
                #[inline(always)]
                fn from(i: $ty) -> Self {
                    Self::Small(i.into())
                }
            }
        )*
    };
}

impl_from_narrow!(i8, i16, i32, u8, u16, u32);
