use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

/// Canonical digits of a cached magnitude, least significant first.
fn small_digits(n: usize) -> Vec<u8> {
    if n < 10 {
        vec![n as u8]
    } else {
        vec![(n % 10) as u8, (n / 10) as u8]
    }
}

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|n| BigInt::from_raw(small_digits(n), false))
        .collect();
    // 0 没有负号
    pub static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|n| BigInt::from_raw(small_digits(n), n != 0))
        .collect();
}

#[test]
fn test_cache() {
    assert_eq!(POS_CACHE.len(), MAX_CONSTANT + 1);
    assert_eq!(NEG_CACHE[0], POS_CACHE[0]);
    for n in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[n].to_string(), n.to_string());
        assert_eq!(NEG_CACHE[n].to_string(), format!("-{}", n));
    }
}
