use crate::element::{Index, MAX_HEIGHT};

// get_bit returns the bit of the index at the given position.
pub fn get_bit(index: Index, position: u8) -> u8 {
    ((index.0 >> position) & 1) as u8
}

// get_prefix clears every bit of the index below `position`.
//
//	+ -------------------------- +
//	| №  | value | mask | return |
//	+ -- + ----- + ---- + ------ +
//	| 63 |   1   |  1   |   1    |
//	| 62 |   0   |  1   |   0    |
//	    ....
//	|  3 |   1   |  1   |   1    |
//	|  2 |   1   |  0   |   0    | <--- position
//	|  1 |   0   |  0   |   0    |
//	|  0 |   1   |  0   |   0    |
//	+ -- + ----- + ---- + ------ +
pub fn get_prefix(index: Index, position: u8) -> u64 {
    let mask = u64::MAX << position;
    index.0 & mask
}

// count_trailing_zeros gives the bucket an index belongs to. The root has no
// set bits below MAX_HEIGHT and lands in the last bucket.
pub fn count_trailing_zeros(index: Index) -> u8 {
    (index.0.trailing_zeros() as u8).min(MAX_HEIGHT)
}
