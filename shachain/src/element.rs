use dependencies::sha2::{Digest, Sha256};
use dependencies::zeroize::Zeroize;

use crate::error::ShachainError;
use crate::utils;

// MAX_HEIGHT is the number of bits of a shachain index and therefore the
// number of buckets a store needs in order to derive all previous secrets.
pub const MAX_HEIGHT: u8 = 48;

// ROOT_INDEX is the index of the seed itself, every other index is derivable
// from it.
pub const ROOT_INDEX: Index = Index(0);

// START_INDEX is the index of the secret for commitment number 0.
pub const START_INDEX: Index = Index((1 << MAX_HEIGHT) - 1);

// Element is one output of the shachain PRF together with the index it was
// produced for. Knowing an element is enough to derive every element whose
// index shares its prefix above the trailing zeros.
//
// Element is Copy and is not wiped on drop. Owners of unrevealed elements
// (RevocationProducer) wipe their own copy; a RevocationStore only holds
// secrets that have already been disclosed.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub index: Index,
    pub hash: [u8; 32],
}

impl Element {
    // derive walks from this element to `to_index`, flipping every bit that
    // is zero here but set in the target and hashing after each flip. Bits
    // are processed from the most significant one down.
    pub fn derive(&self, to_index: Index) -> Result<Element, ShachainError> {
        let positions = self.index.derive_bit_transformations(to_index)?;

        let mut hash = self.hash;
        for position in positions {
            let byte_number = (position / 8) as usize;
            let bit_number = position % 8;

            hash[byte_number] ^= 1 << bit_number;

            let mut digest = Sha256::digest(&hash);
            hash.copy_from_slice(&digest);
            digest.as_mut_slice().zeroize();
        }

        Ok(Element {
            index: to_index,
            hash,
        })
    }
}

// Index is the shachain position of a secret. Commitment numbers grow from
// zero while shachain positions shrink from START_INDEX, Index::new does the
// translation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Index(pub u64);

impl Index {
    pub fn new(commitment_number: u64) -> Result<Self, ShachainError> {
        if commitment_number > START_INDEX.0 {
            return Err(ShachainError::IndexOutOfRange(commitment_number));
        }
        Ok(Index(START_INDEX.0 - commitment_number))
    }

    pub fn commitment_number(&self) -> u64 {
        START_INDEX.0 - self.0
    }

    // derive_bit_transformations checks that `to` is reachable from `self`
    // and returns the bit positions to flip, highest first.
    //
    // `to` is derivable from `self` iff they agree on every bit above the
    // trailing zeros of `self`:
    //
    //    ^ bucket number
    //    |
    //  3 |   x
    //    |   |
    //  2 |   |               x
    //    |   |               |
    //  1 |   |       x       |       x
    //    |   |       |       |       |
    //  0 |   |   x   |   x   |   x   |   x
    //    |   |   |   |   |   |   |   |   |
    //    +---|---|---|---|---|---|---|---|---> index
    //        0   1   2   3   4   5   6   7
    //
    fn derive_bit_transformations(&self, to: Index) -> Result<Vec<u8>, ShachainError> {
        if self.0 == to.0 {
            return Ok(Vec::new());
        }

        let zeros = utils::count_trailing_zeros(*self);
        if self.0 != utils::get_prefix(to, zeros) {
            return Err(ShachainError::NotDerivable {
                from: self.0,
                to: to.0,
            });
        }

        let positions = (0..zeros)
            .rev()
            .filter(|&position| utils::get_bit(to, position) == 1)
            .collect();

        Ok(positions)
    }
}
