#[cfg(test)]
mod test;

use num_bigint::{BigInt, BigUint, Sign};

use crate::Word;

/// The capability a big integer representation must provide to take part in
/// [`floor_mod_word`](crate::floor_mod_word).
///
/// Implementations return the remainder of `self` divided by `h` rounded towards
/// negative infinity, i.e. a value in `[0, h)`. Callers guarantee `h != 0`.
pub trait FloorModWord {
    fn floor_mod_word(&self, h: Word) -> Word;
}

impl FloorModWord for BigInt {
    fn floor_mod_word(&self, h: Word) -> Word {
        let t = self.magnitude().floor_mod_word(h);
        match self.sign() {
            Sign::Minus => reflect(t, h),
            Sign::NoSign | Sign::Plus => t,
        }
    }
}

impl FloorModWord for BigUint {
    #[inline]
    fn floor_mod_word(&self, h: Word) -> Word {
        // The remainder is below `h`, so it occupies at most one digit
        (self % h).iter_u64_digits().next().unwrap_or(0)
    }
}

impl<T: FloorModWord + ?Sized> FloorModWord for &T {
    #[inline(always)]
    fn floor_mod_word(&self, h: Word) -> Word {
        (**self).floor_mod_word(h)
    }
}

impl<T: FloorModWord + ?Sized> FloorModWord for Box<T> {
    #[inline(always)]
    fn floor_mod_word(&self, h: Word) -> Word {
        (**self).floor_mod_word(h)
    }
}

/// Given `t = |g| mod h` for a negative `g`, returns `g mod h` in `[0, h)`.
///
/// Truncating division leaves the remainder of a negative dividend in `(-h, 0]`,
/// so the non-zero case is shifted up by `h`; an exact multiple stays at zero.
#[inline]
pub(crate) fn reflect(t: Word, h: Word) -> Word {
    if t == 0 {
        0
    } else {
        h - t
    }
}
