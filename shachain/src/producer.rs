use dependencies::zeroize::Zeroize;

use crate::element::{Element, Index, ROOT_INDEX};
use crate::error::ShachainError;

// RevocationProducer generates per-commitment secrets using the shachain PRF.
// Starting with a single 32-byte seed it can produce the secret of any of
// 2^48 commitment numbers with constant storage. The construction is
// described here:
// https://github.com/rustyrussell/ccan/blob/master/ccan/crypto/shachain/design.txt
// with supplementary material here:
// https://github.com/lightning/bolts/blob/master/03-transactions.md#per-commitment-secret-requirements
pub struct RevocationProducer {
    // root is the element from which we may generate all hashes of the
    // index domain [281474976710655, 0].
    root: Element,
}

impl RevocationProducer {
    pub fn new(seed: [u8; 32]) -> Self {
        Self {
            root: Element {
                index: ROOT_INDEX,
                hash: seed,
            },
        }
    }

    // at_index produces the secret of the given commitment number. The
    // returned copy is owned by the caller, who is responsible for wiping it.
    pub fn at_index(&self, commitment_number: u64) -> Result<[u8; 32], ShachainError> {
        let index = Index::new(commitment_number)?;
        let element = self.root.derive(index)?;
        Ok(element.hash)
    }
}

impl Drop for RevocationProducer {
    fn drop(&mut self) {
        self.root.hash.zeroize();
    }
}
