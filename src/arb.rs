use quickcheck::{Arbitrary, Gen};

use crate::big_num_constants::DIGITS;
use crate::BigInt;

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        // 一半取自原生整数, 方便覆盖边界值
        if bool::arbitrary(g) {
            return BigInt::from(i64::arbitrary(g));
        }
        let len = usize::arbitrary(g) % 40 + 1;
        let mut text = String::with_capacity(len + 1);
        if bool::arbitrary(g) {
            text.push('-');
        }
        for _ in 0..len {
            text.push(*g.choose(&DIGITS).unwrap());
        }
        text.parse().unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        if self.is_zero() {
            return quickcheck::empty_shrinker();
        }
        let mut smaller = vec![BigInt::zero()];
        if self.is_negative() {
            smaller.push(self.absolute_value());
        }
        // drop the ones place
        let text = self.to_string();
        if let Ok(shorter) = text[..text.len() - 1].parse::<BigInt>() {
            smaller.push(shorter);
        }
        Box::new(smaller.into_iter())
    }
}
