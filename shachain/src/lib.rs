//! Shachain: the chain-indexed secret generator of BOLT #3.
//!
//! A [`RevocationProducer`] turns one 32-byte seed into the secret of any
//! commitment number in `0..=2^48-1`. A [`RevocationStore`] is the receiving
//! side: it keeps every secret revealed so far in at most 48 slots and can
//! reproduce any of them on demand.

mod element;
mod error;
mod producer;
mod store;
mod utils;

#[cfg(test)]
mod test_producer;
#[cfg(test)]
mod test_store;

pub use element::{Element, Index, MAX_HEIGHT, ROOT_INDEX, START_INDEX};
pub use error::ShachainError;
pub use producer::RevocationProducer;
pub use store::RevocationStore;
