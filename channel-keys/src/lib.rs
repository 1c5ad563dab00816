//! Deterministic key material for one payment channel.
//!
//! [`derive_basepoints`] expands an unguessable [`ChannelSeed`] into the
//! funding key, the revocation/payment/delayed-payment basepoints and the
//! [`CommitmentChainSeed`]. [`advance`] is then called once per commitment
//! update: it reveals the secret of the state being revoked and publishes the
//! point of the state after the current one.
//!
//! Everything here is a pure function of its arguments. The curve context is
//! passed in explicitly as a [`PointDerivation`] implementation, normally a
//! `secp256k1::Secp256k1` handle shared between threads.

mod basepoints;
mod commitment;
mod curve;
mod error;
mod expand;
mod tools;

pub mod derivation;

pub use basepoints::{derive_basepoints, Basepoints, ChannelKeys, Secrets};
pub use commitment::{
    advance, per_commitment_point, per_commitment_secret, CommitmentAdvance, CommitmentChainSeed,
    PerCommitmentSecret,
};
pub use curve::PointDerivation;
pub use error::{DerivationError, KeyRole};
pub use expand::{ChannelSeed, DOMAIN_LABEL};
