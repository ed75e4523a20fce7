use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::BigInt;

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
        BigInt::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        deserializer.deserialize_any(BigIntVisitor)
    }
}

#[test]
fn test_serde_json() {
    let a: BigInt = "-123456789012345678901234567890".parse().unwrap();
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "\"-123456789012345678901234567890\"");
    let back: BigInt = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);

    let n: BigInt = serde_json::from_str("-42").unwrap();
    assert_eq!(n, BigInt::from(-42));
    let n: BigInt = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(n, BigInt::from(u64::MAX));

    assert!(serde_json::from_str::<BigInt>("\"12x\"").is_err());
    assert!(serde_json::from_str::<BigInt>("1.5").is_err());
}
