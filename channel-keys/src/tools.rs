use dependencies::sha2::{Digest, Sha256};

pub fn sha256(x: &[u8]) -> [u8; 32] {
    let mut hash = [0; 32];
    hash.copy_from_slice(&Sha256::digest(x));
    hash
}

#[cfg(test)]
pub use self::test_helpers::*;
