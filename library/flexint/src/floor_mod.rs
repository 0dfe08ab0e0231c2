
use crate::engine::{reflect, FloorModWord};
use crate::{DivisionError, FlexInt, Word};

/// Computes `g mod h` rounded towards negative infinity, i.e. the unique `r` in
/// `[0, h)` for which `g - r` is a multiple of `h`.
///
/// Small values are reduced inline; big values are handed to the big integer
/// representation's own [`FloorModWord`] implementation.
///
/// # Panics
///
/// Panics if `h` is zero. Use [`try_floor_mod_word`] to handle that case instead.
pub fn floor_mod_word<B: FloorModWord>(g: &FlexInt<B>, h: Word) -> Word {
    match try_floor_mod_word(g, h) {
        Ok(r) => r,
        Err(err) => {
            log::error!("floor_mod_word: {}", err);
            panic!("floor_mod_word: {}", err)
        }
    }
}

/// Same as [`floor_mod_word`], but returns `Err` rather than panicking if `h` is zero
pub fn try_floor_mod_word<B: FloorModWord>(g: &FlexInt<B>, h: Word) -> Result<Word, DivisionError> {
    if h == 0 {
        return Err(DivisionError);
    }

    match g {
        FlexInt::Small(c) => Ok(small_floor_mod_word(*c, h)),
        FlexInt::Big(b) => Ok(b.floor_mod_word(h)),
    }
}

/// Native `%` truncates towards zero, so a negative dividend is reduced by its
/// magnitude and the result reflected back into `[0, h)`.
#[inline]
fn small_floor_mod_word(c: i64, h: Word) -> Word {
    // `unsigned_abs` is exact for every i64, including values outside the small range
    let t = c.unsigned_abs() % h;
    if c < 0 {
        reflect(t, h)
    } else {
        t
    }
}

impl<B: FloorModWord> FlexInt<B> {
    /// See [`floor_mod_word`]
    #[inline]
    pub fn floor_mod_word(&self, h: Word) -> Word {
        floor_mod_word(self, h)
    }

    /// See [`try_floor_mod_word`]
    #[inline]
    pub fn try_floor_mod_word(&self, h: Word) -> Result<Word, DivisionError> {
        try_floor_mod_word(self, h)
    }
}
