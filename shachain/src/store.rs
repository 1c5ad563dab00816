use crate::element::{Element, Index, MAX_HEIGHT};
use crate::error::ShachainError;
use crate::utils;

// RevocationStore keeps the secrets a counterparty has revealed. N received
// secrets take O(log N) space: every bucket holds the latest element with the
// given number of trailing zeros, and all older secrets are derivable from
// one of them. The storage scheme is described here:
// https://github.com/lightning/bolts/blob/master/03-transactions.md#efficient-per-commitment-secret-storage
pub struct RevocationStore {
    // len_buckets stores the number of currently active buckets.
    len_buckets: u8,

    // buckets[i] holds the latest element with i trailing zeros. The very
    // last commitment number has index zero and takes the extra bucket.
    buckets: [Element; MAX_HEIGHT as usize + 1],

    // next is the commitment number the next received secret belongs to.
    next: u64,
}

impl Default for RevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RevocationStore {
    pub fn new() -> Self {
        Self {
            len_buckets: 0,
            buckets: [Element::default(); MAX_HEIGHT as usize + 1],
            next: 0,
        }
    }

    pub fn next_commitment_number(&self) -> u64 {
        self.next
    }

    pub fn is_empty(&self) -> bool {
        self.next == 0
    }

    // look_up restores a previously received secret by its commitment number.
    pub fn look_up(&self, commitment_number: u64) -> Result<[u8; 32], ShachainError> {
        let index = Index::new(commitment_number)?;
        if commitment_number >= self.next {
            return Err(ShachainError::UnknownSecret(commitment_number));
        }

        self.buckets[..self.len_buckets as usize]
            .iter()
            .find_map(|bucket| bucket.derive(index).ok())
            .map(|element| element.hash)
            .ok_or(ShachainError::UnknownSecret(commitment_number))
    }

    // add_next_entry stores the secret of the next commitment number. Secrets
    // MUST be inserted in the order they are produced by a RevocationProducer,
    // and each one must reproduce every secret it supersedes, otherwise the
    // store stays unchanged and an error is returned.
    pub fn add_next_entry(&mut self, hash: [u8; 32]) -> Result<(), ShachainError> {
        let new_element = Element {
            index: Index::new(self.next)?,
            hash,
        };

        let bucket = utils::count_trailing_zeros(new_element.index);

        for known in &self.buckets[..bucket as usize] {
            let derived = new_element.derive(known.index)?;
            if derived != *known {
                return Err(ShachainError::InconsistentSecret(self.next));
            }
        }

        self.buckets[bucket as usize] = new_element;
        if bucket + 1 > self.len_buckets {
            self.len_buckets = bucket + 1;
        }

        self.next += 1;
        Ok(())
    }
}
