/// Every digit is stored in base 10.
pub const RADIX: i64 = 10;

pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Magnitudes up to this value are served from the caches in `big_num_cache`.
pub const MAX_CONSTANT: usize = 16;
