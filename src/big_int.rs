//! # BigInt
//! Arbitrary-precision signed integers stored as decimal digits in sign-magnitude form.
//! There is no upper bound on the magnitude; only memory limits it.
//! # Example
//! ```
//! use dec_big_num::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! assert_eq!((&a + &b).to_string(), "9100000000000");
//! ```
//!
//! Division and remainder are not provided.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::io::{BufRead, Write};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{Error, FormatErrorKind, Result};

/// Widened digit type used while an operation is in progress.
/// Holds per-cell convolution sums and negative differences before normalization.
type Acc = i64;

/// Checks a condition when `debug_assertions` or the `invariant-checks` feature is on.
macro_rules! check_invariant {
    ($cond: expr, $($arg: tt)+) => {
        if cfg!(any(debug_assertions, feature = "invariant-checks")) {
            assert!($cond, $($arg)+);
        }
    };
}

macro_rules! widen {
    ($digits: expr) => {
        $digits.iter().map(|d| *d as Acc).collect::<Vec<Acc>>()
    };
}

/// A signed decimal integer of unbounded size.
///
/// `digits` holds the magnitude least significant digit first, each in `0..=9`,
/// with no leading zeros except for the value zero itself, which is never negative.
#[derive(Debug, Clone)]
pub struct BigInt {
    sign: bool,
    digits: Vec<u8>,
}

// 实现构造
impl BigInt {
    /// Builds a value from parts that are already canonical.
    pub(crate) fn from_raw(digits: Vec<u8>, sign: bool) -> Self {
        let big = BigInt { sign, digits };
        big.check_canonical();
        big
    }

    /// Normalizes a working buffer and narrows it back to stored digits.
    fn from_working(sign: bool, mut digits: Vec<Acc>) -> Self {
        remove_leading_zero(&mut digits);
        let digits = digits
            .into_iter()
            .map(|d| {
                check_invariant!((0..RADIX).contains(&d), "digit {} out of range after normalization", d);
                d as u8
            })
            .collect();
        let mut big = BigInt { sign, digits };
        big.normalize_zero();
        big.check_canonical();
        big
    }

    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }

    pub fn one() -> Self {
        POS_CACHE[1].clone()
    }

    fn check_canonical(&self) {
        check_invariant!(!self.digits.is_empty(), "BigInt without digits");
        check_invariant!(
            self.digits.len() == 1 || self.digits.last() != Some(&0),
            "BigInt with leading zeros: {:?}",
            self.digits
        );
        check_invariant!(self.digits.iter().all(|d| *d < 10), "BigInt digit out of range: {:?}", self.digits);
        check_invariant!(!(self.sign && self.is_zero()), "negative zero");
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 查询
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign
    }

    pub fn is_positive(&self) -> bool {
        !self.sign && !self.is_zero()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.sign {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Number of decimal digits in the magnitude. Zero has one digit.
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    /// Digits of the magnitude, most significant first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().rev().copied()
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.digits().map(|d| DIGITS[d as usize]).collect();
        f.pad_integral(!self.sign, "", &s)
    }
}

impl BigInt {
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }

    /// Reads the next whitespace-delimited token from `reader` and parses it.
    ///
    /// Leading ASCII whitespace is skipped and the whitespace ending the token is left
    /// in the reader. Returns `Ok(None)` when the input holds no further token.
    pub fn read_token<R: BufRead>(reader: &mut R) -> Result<Option<BigInt>> {
        let mut token = Vec::new();
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut done = false;
            for b in buf {
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(*b);
                }
                consumed += 1;
            }
            reader.consume(consumed);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&token);
        trace!(token = %text, "read BigInt token");
        BigInt::parse(&text).map(Some)
    }
}

// 实现解析
impl BigInt {
    /// Parses `[+-]?[0-9]+`.
    pub fn parse(text: &str) -> Result<BigInt> {
        BigInt::parse_digits(text).map_err(|kind| {
            debug!(%kind, "rejected decimal text");
            Error::Format(kind)
        })
    }

    fn parse_digits(text: &str) -> std::result::Result<BigInt, FormatErrorKind> {
        let (sign, start) = match text.as_bytes().first() {
            None => return Err(FormatErrorKind::Empty),
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            Some(_) => (false, 0),
        };
        let body = &text[start..];
        if body.is_empty() {
            return Err(FormatErrorKind::SignOnly);
        }
        if let Some((offset, ch)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(FormatErrorKind::InvalidDigit { ch, index: start + offset });
        }

        // 低位在前
        let mut digits: Vec<u8> = body.bytes().rev().map(|b| b - b'0').collect();
        remove_leading_zero(&mut digits);
        let mut big = BigInt { sign, digits };
        big.normalize_zero();
        big.check_canonical();
        Ok(big)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::parse(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = Error;

    fn try_from(val: &str) -> Result<Self> {
        BigInt::parse(val)
    }
}

impl TryFrom<String> for BigInt {
    type Error = Error;

    fn try_from(val: String) -> Result<Self> {
        BigInt::parse(&val)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(mut val: $i) -> Self {
            let sign = val < 0;
            // MIN 的绝对值比 MAX 大 1, 取反会溢出: 先向 0 靠近 1, 提取数位后再补回
            let is_min = val == <$i>::MIN;
            if is_min {
                val += 1;
            }
            let mag = if sign { (-val) as u128 } else { val as u128 };
            BigInt::value_of(mag, sign, is_min)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

impl BigInt {
    /// Shared digit extraction for every native width. `add_one` restores the unit
    /// taken off a signed minimum before it was negated.
    fn value_of(mut mag: u128, sign: bool, add_one: bool) -> BigInt {
        if !add_one {
            if mag == 0 {
                return BigInt::zero();
            }
            if mag <= MAX_CONSTANT as u128 {
                return if sign {
                    NEG_CACHE[mag as usize].clone()
                } else {
                    POS_CACHE[mag as usize].clone()
                };
            }
        }

        // u128::MAX 有 39 位
        let mut digits: Vec<Acc> = Vec::with_capacity(40);
        while mag > 0 {
            digits.push((mag % RADIX as u128) as Acc);
            mag /= RADIX as u128;
        }
        if add_one {
            if digits.is_empty() {
                digits.push(0);
            }
            digits[0] += 1;
            carry_up(&mut digits);
        }
        BigInt::from_working(sign, digits)
    }
}

// 实现规范化
impl BigInt {
    /// -0 => 0
    fn normalize_zero(&mut self) {
        if self.is_zero() {
            self.sign = false;
        }
    }
}

/// Pops zero digits from the most significant end, always keeping the ones place.
fn remove_leading_zero<D: Copy + Default + PartialEq>(digits: &mut Vec<D>) {
    while digits.len() > 1 && digits.last() == Some(&D::default()) {
        digits.pop();
    }
}

/// Moves everything above 9 into the next position, growing the buffer as needed.
/// Every cell must be non-negative.
fn carry_up(digits: &mut Vec<Acc>) {
    let mut i = 0;
    while i < digits.len() {
        let carry = digits[i] / RADIX;
        if carry != 0 {
            if i == digits.len() - 1 {
                digits.push(0);
            }
            digits[i + 1] += carry;
            digits[i] %= RADIX;
        }
        i += 1;
    }
}

/// Borrows from the next position while a digit is negative.
/// Only valid after subtracting a magnitude no larger than the minuend.
fn carry_down(digits: &mut Vec<Acc>) {
    for i in 0..digits.len().saturating_sub(1) {
        while digits[i] < 0 {
            digits[i + 1] -= 1;
            digits[i] += RADIX;
        }
    }
    check_invariant!(
        digits.last().map_or(true, |d| *d >= 0),
        "carry down left a negative top digit: {:?}",
        digits
    );
    remove_leading_zero(digits);
}

// 实现大小比较
fn compare_mag(x: &[u8], y: &[u8]) -> Ordering {
    if x.len() != y.len() {
        return x.len().cmp(&y.len());
    }
    for (a, b) in x.iter().rev().zip(y.iter().rev()) {
        if a != b {
            return a.cmp(b);
        }
    }
    Ordering::Equal
}

impl BigInt {
    /// Three-way comparison; every relational operator is derived from this.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => compare_mag(&self.digits, &other.digits).reverse(),
            (false, false) => compare_mag(&self.digits, &other.digits),
        }
    }

    fn compare_mag(&self, other: &BigInt) -> Ordering {
        compare_mag(&self.digits, &other.digits)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.digits.hash(state);
    }
}

// 实现绝对值
impl BigInt {
    pub fn absolute_value(&self) -> BigInt {
        self.clone().abs_take()
    }

    fn abs_take(self) -> BigInt {
        let BigInt { digits, .. } = self;
        BigInt { sign: false, digits }
    }
}

// 实现取反
impl BigInt {
    pub fn negate(&self) -> BigInt {
        self.clone().neg()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, digits } = self;
        let mut big = BigInt { sign: !sign, digits };
        big.normalize_zero();
        big
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

macro_rules! forward_binop {
    ($imp: ident, $method: ident, $named: ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                self.$named(rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$named(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$named(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$named(self, &rhs)
            }
        }
    };
}

macro_rules! forward_assign_op {
    ($imp: ident, $method: ident, $named: ident) => {
        impl $imp<BigInt> for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                *self = BigInt::$named(self, &rhs);
            }
        }

        impl $imp<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = BigInt::$named(self, rhs);
            }
        }
    };
}

// 实现加法
impl BigInt {
    /// `self + other`. Same signs add magnitudes; mixed signs subtract the smaller
    /// magnitude from the larger and take the larger operand's sign.
    pub fn plus(&self, other: &BigInt) -> BigInt {
        if self.sign == other.sign {
            return BigInt::from_working(self.sign, BigInt::add_mag(&self.digits, &other.digits));
        }

        // 必须用绝对值大的减去小的, carry_down 才能成立
        match self.compare_mag(other) {
            Ordering::Less => BigInt::from_working(other.sign, BigInt::sub_mag(&other.digits, &self.digits)),
            Ordering::Equal | Ordering::Greater => {
                BigInt::from_working(self.sign, BigInt::sub_mag(&self.digits, &other.digits))
            }
        }
    }

    fn add_mag(x: &[u8], y: &[u8]) -> Vec<Acc> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = widen!(long);
        // 不处理进位的逐位相加
        for (r, d) in result.iter_mut().zip(short) {
            *r += *d as Acc;
        }
        carry_up(&mut result);
        result
    }
}

forward_binop!(Add, add, plus);
forward_assign_op!(AddAssign, add_assign, plus);

// 实现减法
impl BigInt {
    /// `self - other`, computed as `self + (-other)`.
    pub fn subtract(&self, other: &BigInt) -> BigInt {
        self.plus(&other.negate())
    }

    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<Acc> {
        check_invariant!(
            compare_mag(big, little) != Ordering::Less,
            "magnitude subtraction with a smaller minuend"
        );
        let mut result = widen!(big);
        // 不处理借位的逐位相减
        for (r, d) in result.iter_mut().zip(little) {
            *r -= *d as Acc;
        }
        carry_down(&mut result);
        result
    }
}

forward_binop!(Sub, sub, subtract);
forward_assign_op!(SubAssign, sub_assign, subtract);

// 实现乘法
impl BigInt {
    /// Schoolbook multiplication, O(len(self) * len(other)).
    pub fn multiply(&self, other: &BigInt) -> BigInt {
        let sign = self.sign ^ other.sign;
        let mut result: Vec<Acc> = vec![0; self.digits.len() + other.digits.len() - 1];
        for (i, a) in self.digits.iter().enumerate() {
            if *a == 0 {
                continue;
            }
            for (j, b) in other.digits.iter().enumerate() {
                result[i + j] += *a as Acc * *b as Acc;
            }
        }
        carry_up(&mut result);
        BigInt::from_working(sign, result)
    }
}

forward_binop!(Mul, mul, multiply);
forward_assign_op!(MulAssign, mul_assign, multiply);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_parse() {
    let a = big("00123");
    assert_eq!(a.digits, vec![3, 2, 1]);
    assert!(!a.sign);

    let a = big("-4560");
    assert_eq!(a.digits, vec![0, 6, 5, 4]);
    assert!(a.sign);

    let a = big("+7");
    assert_eq!(a, BigInt::from(7));

    for zero in ["0", "-0", "+0", "0000", "-000"] {
        let a = big(zero);
        assert_eq!(a.digits, vec![0], "{}", zero);
        assert!(!a.sign, "{}", zero);
        assert_eq!(a, BigInt::zero());
    }
}

#[test]
fn test_parse_errors() {
    let kind = |s: &str| BigInt::parse(s).unwrap_err().format_kind().unwrap();
    assert_eq!(kind(""), FormatErrorKind::Empty);
    assert_eq!(kind("+"), FormatErrorKind::SignOnly);
    assert_eq!(kind("-"), FormatErrorKind::SignOnly);
    assert_eq!(kind("12a4"), FormatErrorKind::InvalidDigit { ch: 'a', index: 2 });
    assert_eq!(kind("-1 2"), FormatErrorKind::InvalidDigit { ch: ' ', index: 2 });
    assert_eq!(kind("--1"), FormatErrorKind::InvalidDigit { ch: '-', index: 1 });
    assert_eq!(kind("+-1"), FormatErrorKind::InvalidDigit { ch: '-', index: 1 });
    assert_eq!(kind(" 1"), FormatErrorKind::InvalidDigit { ch: ' ', index: 0 });
    assert_eq!(kind("1٣"), FormatErrorKind::InvalidDigit { ch: '٣', index: 1 });
    assert!(BigInt::try_from("x").is_err());
    assert!(BigInt::try_from(String::from("-12")).is_ok());
}

#[test]
fn test_from() {
    assert_eq!(BigInt::from(0u8).digits, vec![0]);
    assert_eq!(BigInt::from(12i8).to_string(), "12");
    assert_eq!(BigInt::from(-100i16).to_string(), "-100");
    assert_eq!(BigInt::from(-16i32).to_string(), "-16");
    assert_eq!(BigInt::from(17u32).to_string(), "17");
    assert_eq!(BigInt::from(-10000isize).to_string(), "-10000");
    assert_eq!(BigInt::from(-113132i64).to_string(), "-113132");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(u128::MAX).to_string(), "340282366920938463463374607431768211455");
    assert_eq!(BigInt::from(usize::MAX).to_string(), usize::MAX.to_string());
}

#[test]
fn test_from_signed_min() {
    assert_eq!(BigInt::from(i8::MIN).to_string(), "-128");
    assert_eq!(BigInt::from(i16::MIN).to_string(), "-32768");
    assert_eq!(BigInt::from(i32::MIN).to_string(), "-2147483648");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(i128::MIN).to_string(), "-170141183460469231731687303715884105728");
    assert_eq!(BigInt::from(isize::MIN).to_string(), isize::MIN.to_string());

    let min = BigInt::from(i64::MIN);
    let max = BigInt::from(i64::MAX);
    assert_eq!(&min + &max, BigInt::from(-1));
    assert_eq!(-&min, &max + &BigInt::one());
    // 取反再加回去
    let neg = -&min;
    assert_eq!(&(&neg + &min) + &min, min);
}

#[test]
fn test_compare() {
    let values = [i64::MIN, -1000, -999, -10, -1, 0, 1, 9, 10, 999, 1000, i64::MAX];
    for x in values {
        for y in values {
            assert_eq!(BigInt::from(x).compare(&BigInt::from(y)), x.cmp(&y), "{} <=> {}", x, y);
        }
    }
    assert!(big("-5") < big("3"));
    assert!(big("-50") < big("-5"));
    assert!(big("123") < big("124"));
    assert!(big("99") < big("100"));
    assert_ne!(big("5"), big("-5"));
}

#[test]
fn test_add() {
    assert_eq!(big("123") + big("456"), big("579"));
    assert_eq!(big("999") + big("1"), big("1000"));
    assert_eq!(big("-999") + big("-1"), big("-1000"));
    assert_eq!(big("1000") + big("-1"), big("999"));
    assert_eq!(big("-1000") + big("1"), big("-999"));
    assert_eq!(big("1") + big("-1000"), big("-999"));

    let zero = big("-7") + big("7");
    assert_eq!(zero, BigInt::zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.to_string(), "0");

    let mut a = big("99999999999999999999");
    a += big("1");
    assert_eq!(a.to_string(), "100000000000000000000");
    a += &big("-100000000000000000001");
    assert_eq!(a.to_string(), "-1");
}

#[test]
fn test_sub() {
    assert_eq!(big("500") - big("999"), big("-499"));
    assert_eq!(big("1000") - big("1"), big("999"));
    assert_eq!(big("-5") - big("-5"), BigInt::zero());
    assert_eq!(big("-5") - big("3"), big("-8"));
    assert_eq!(big("5") - big("-3"), big("8"));
    assert_eq!(big("100000000000000000000") - big("99999999999999999999"), big("1"));

    let mut a = big("10");
    a -= &big("25");
    assert_eq!(a, big("-15"));
    a -= big("-15");
    assert!(a.is_zero());
}

#[test]
fn test_mul() {
    assert_eq!(big("999") * big("999"), big("998001"));
    assert_eq!(big("-12") * big("12"), big("-144"));
    assert_eq!(big("-12") * big("-12"), big("144"));
    let zero = big("-12") * big("0");
    assert!(zero.is_zero());
    assert!(!zero.is_negative());

    let a = big("12345678901234567890123456789");
    let b = big("98765432109876543210");
    assert_eq!((&a * &b).to_string(), "1219326311370217952249657064223746380111126352690");

    let mut c = big("2");
    for _ in 0..127 {
        c *= big("2");
    }
    assert_eq!(c, BigInt::from(u128::MAX) + BigInt::one());
}

#[test]
fn test_mul_long_operands() {
    // 每个格子累加 81 * 1000, 超出 i16 的范围
    let nines = "9".repeat(1000);
    let a = big(&nines);
    let square = &a * &a;
    let expected = format!("{}8{}1", "9".repeat(999), "0".repeat(999));
    assert_eq!(square.to_string(), expected);
}

#[test]
fn test_neg_abs() {
    assert_eq!(-big("5"), big("-5"));
    assert_eq!(big("-5").negate(), big("5"));
    let zero = -BigInt::zero();
    assert!(!zero.is_negative());
    assert_eq!(big("-42").absolute_value(), big("42"));
    assert_eq!(big("42").absolute_value(), big("42"));
    assert_eq!(big("-1").signum(), -1);
    assert_eq!(big("0").signum(), 0);
    assert_eq!(big("1").signum(), 1);
}

#[test]
fn test_to_string() {
    for s in ["0", "7", "-7", "1234567890123456789012345678901234567890", "-1000000"] {
        assert_eq!(big(s).to_string(), s);
    }
    assert_eq!(big("+0012").to_string(), "12");
    assert_eq!(format!("{:>6}", big("-42")), "   -42");
    assert_eq!(format!("{:06}", big("-42")), "-00042");

    let mut out = Vec::new();
    big("-31415").write_to(&mut out).unwrap();
    assert_eq!(out, b"-31415");
}

#[test]
fn test_read_token() {
    crate::init_test_tracing();
    let mut input = std::io::Cursor::new("  12 -34\n\t+056 x9 ");
    assert_eq!(BigInt::read_token(&mut input).unwrap(), Some(big("12")));
    assert_eq!(BigInt::read_token(&mut input).unwrap(), Some(big("-34")));
    assert_eq!(BigInt::read_token(&mut input).unwrap(), Some(big("56")));
    let err = BigInt::read_token(&mut input).unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::InvalidDigit { ch: 'x', index: 0 }));
    assert_eq!(BigInt::read_token(&mut input).unwrap(), None);

    // 跨越缓冲区边界的 token
    let data = format!("{} {}", "7".repeat(50), "-".to_string() + &"3".repeat(50));
    let mut input = std::io::BufReader::with_capacity(8, data.as_bytes());
    assert_eq!(BigInt::read_token(&mut input).unwrap().unwrap().to_string(), "7".repeat(50));
    assert_eq!(
        BigInt::read_token(&mut input).unwrap().unwrap().to_string(),
        "-".to_string() + &"3".repeat(50)
    );
    assert!(BigInt::read_token(&mut input).unwrap().is_none());
}

#[test]
fn test_sum_product() {
    let values: Vec<BigInt> = (1..=20).map(BigInt::from).collect();
    assert_eq!(values.iter().sum::<BigInt>(), BigInt::from(210));
    assert_eq!(values.iter().product::<BigInt>().to_string(), "2432902008176640000");
    assert_eq!(values.into_iter().map(|x| -x).sum::<BigInt>(), BigInt::from(-210));
    assert_eq!(Vec::<BigInt>::new().into_iter().product::<BigInt>(), BigInt::one());
}

#[test]
fn test_hash() {
    use std::collections::HashSet;
    let set: HashSet<BigInt> = ["0", "-0", "007", "7", "-7"].iter().map(|s| big(s)).collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_carry_helpers() {
    let mut digits: Vec<Acc> = vec![81, 162, 81];
    carry_up(&mut digits);
    assert_eq!(digits, vec![1, 0, 8, 9]);

    let mut digits: Vec<Acc> = vec![-9, 0, 1];
    carry_down(&mut digits);
    assert_eq!(digits, vec![1, 9]);

    let mut digits: Vec<Acc> = vec![0, 0, 0];
    remove_leading_zero(&mut digits);
    assert_eq!(digits, vec![0]);
}

#[test]
#[cfg(any(debug_assertions, feature = "invariant-checks"))]
#[should_panic(expected = "smaller minuend")]
fn test_sub_mag_precondition() {
    BigInt::sub_mag(&[1], &[2]);
}

#[cfg(test)]
mod properties {
    use quickcheck::quickcheck;

    use crate::BigInt;

    quickcheck! {
        fn round_trip(a: BigInt) -> bool {
            a.to_string().parse::<BigInt>().unwrap() == a
        }

        fn add_commutes(a: BigInt, b: BigInt) -> bool {
            &a + &b == &b + &a
        }

        fn add_associates(a: BigInt, b: BigInt, c: BigInt) -> bool {
            &(&a + &b) + &c == &a + &(&b + &c)
        }

        fn additive_inverse(a: BigInt) -> bool {
            let zero = &a + &(-&a);
            zero.is_zero() && !zero.is_negative()
        }

        fn multiplicative_identity(a: BigInt) -> bool {
            &a * &BigInt::from(1) == a
        }

        fn mul_commutes(a: BigInt, b: BigInt) -> bool {
            &a * &b == &b * &a
        }

        fn mul_distributes(a: BigInt, b: BigInt, c: BigInt) -> bool {
            &a * &(&b + &c) == &(&a * &b) + &(&a * &c)
        }

        fn sub_is_add_neg(a: BigInt, b: BigInt) -> bool {
            &a - &b == &a + &(-&b)
        }

        fn sub_then_add(a: BigInt, b: BigInt) -> bool {
            &(&a - &b) + &b == a
        }

        fn ordering_is_total(a: BigInt, b: BigInt) -> bool {
            let answers = [a < b, a == b, a > b];
            answers.iter().filter(|x| **x).count() == 1
        }

        fn matches_native_ops(x: i32, y: i32) -> bool {
            let (x64, y64) = (x as i64, y as i64);
            let (a, b) = (BigInt::from(x), BigInt::from(y));
            &a + &b == BigInt::from(x64 + y64)
                && &a - &b == BigInt::from(x64 - y64)
                && &a * &b == BigInt::from(x64 * y64)
                && a.cmp(&b) == x.cmp(&y)
        }

        fn matches_native_text(x: i128) -> bool {
            BigInt::from(x).to_string() == x.to_string()
        }
    }
}
