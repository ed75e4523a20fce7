//! Dec Big Num \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers kept as decimal digits, with
//!   parsing, printing, ordering, addition, subtraction and multiplication.
//! - [`UnionFind`]: disjoint sets with path compression and union by rank.
//!
//! Features:
//! - `invariant-checks`: keep the canonical-form assertions in release builds.
//! - `serde`: (de)serialize [`BigInt`] as a decimal string.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
mod union_find;

#[cfg(feature = "serde")]
mod big_int_serde;

#[cfg(test)]
mod arb;

pub use big_int::BigInt;
pub use error::{Error, FormatErrorKind, Result};
pub use union_find::UnionFind;

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, FormatErrorKind, UnionFind};

    #[test]
    fn it_works() {
        crate::init_test_tracing();
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
    }

    #[test]
    fn scenarios() {
        let big = |s: &str| s.parse::<BigInt>().unwrap();
        assert_eq!(big("123") + big("456"), big("579"));
        assert_eq!(big("500") - big("999"), big("-499"));
        assert_eq!(big("999") * big("999"), big("998001"));

        let zero = big("-7") + big("7");
        assert_eq!(zero, big("0"));
        assert!(!zero.is_negative());

        assert_eq!(BigInt::from(0), big("0"));
        assert_eq!(big("-0"), big("0"));
        assert_eq!(big("-0").to_string(), "0");

        assert_eq!(BigInt::parse("").unwrap_err().format_kind(), Some(FormatErrorKind::Empty));
        assert_eq!(BigInt::parse("+").unwrap_err().format_kind(), Some(FormatErrorKind::SignOnly));
    }

    #[test]
    fn named_methods_match_operators() {
        let a = BigInt::from(-1234);
        let b = BigInt::from(56);
        assert_eq!(a.plus(&b), &a + &b);
        assert_eq!(a.subtract(&b), &a - &b);
        assert_eq!(a.multiply(&b), &a * &b);
        assert_eq!(a.negate(), -&a);
        assert_eq!(a.absolute_value(), BigInt::from(1234));
    }

    #[test]
    fn union_find_scenario() {
        let mut uf = UnionFind::new(5);
        assert!(uf.merge(0, 1));
        assert!(!uf.merge(0, 1));
        assert_eq!(uf.part_size(0), 2);
        assert_eq!(uf.find(0), uf.find(1));
    }

    #[test]
    fn error_messages() {
        let err = BigInt::parse("12a").unwrap_err();
        assert_eq!(err.to_string(), "Invalid decimal integer: invalid digit 'a' at index 2");
        let err = BigInt::parse("-").unwrap_err();
        assert_eq!(err.to_string(), "Invalid decimal integer: sign without digits");
    }
}
