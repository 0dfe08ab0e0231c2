use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};

use super::*;

fn reference(g: &BigInt, h: Word) -> Word {
    g.mod_floor(&BigInt::from(h)).to_u64().unwrap()
}

#[test]
fn reflect_keeps_exact_multiples_at_zero() {
    assert_eq!(reflect(0, 3), 0);
    assert_eq!(reflect(1, 3), 2);
    assert_eq!(reflect(2, 3), 1);
}

#[test]
fn biguint_remainder_fits_one_digit() {
    let g = (BigUint::one() << 200u32) + 12345u32;
    let h = u64::MAX;
    assert!(g.floor_mod_word(h) < h);
    assert_eq!(BigUint::from(10u32).floor_mod_word(7), 3);
    assert_eq!(BigUint::from(0u32).floor_mod_word(7), 0);
}

#[test]
fn bigint_matches_mod_floor() {
    let big = BigInt::one() << 130u32;
    let values = [
        big.clone(),
        -big.clone(),
        &big + 1u32,
        -(&big + 1u32),
        BigInt::from(i64::MIN),
        BigInt::from(u64::MAX),
        -BigInt::from(u64::MAX),
    ];
    for g in values.iter() {
        for h in [1, 2, 3, 7, 10, 1 << 32, u64::MAX - 1, u64::MAX] {
            assert_eq!(g.floor_mod_word(h), reference(g, h), "{} mod {}", g, h);
        }
    }
}

#[test]
fn forwarding_impls_delegate() {
    let g = -BigInt::from(7);
    assert_eq!((&g).floor_mod_word(3), 2);
    assert_eq!(Box::new(g).floor_mod_word(3), 2);
}
