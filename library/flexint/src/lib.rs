mod engine;
pub use engine::FloorModWord;

mod int;
pub use int::FlexInt;

mod floor_mod;
pub use floor_mod::{floor_mod_word, try_floor_mod_word};


pub use num_bigint as bigint;
pub use num_bigint::{BigInt, BigUint, ParseBigIntError};
pub use num_traits as traits;
pub use num_traits::{ToPrimitive, Zero};

/// The unsigned machine word used for divisors and remainders
pub type Word = u64;

/// Raised when an operation is asked to divide by zero
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("division by zero")]
pub struct DivisionError;
