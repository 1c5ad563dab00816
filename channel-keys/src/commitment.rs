//! Per-commitment secrets and points.
//!
//! Every channel state `i` has a secret, produced by shachain from the
//! channel's [`CommitmentChainSeed`], and a point `secret * G`. The point of
//! a state is published before the state is used, the secret only once the
//! state has been superseded.

use std::fmt;

use dependencies::secp256k1::{PublicKey, SecretKey};
use dependencies::tracing::trace;
use dependencies::zeroize::Zeroize;
use shachain::RevocationProducer;

use crate::curve::PointDerivation;
use crate::error::{DerivationError, KeyRole};

/// Root of all per-commitment secrets of one channel. Constant for the life
/// of the channel and never sent to the counterparty.
#[derive(Clone, PartialEq, Eq)]
pub struct CommitmentChainSeed([u8; 32]);

impl CommitmentChainSeed {
    pub fn new(seed: [u8; 32]) -> Self {
        CommitmentChainSeed(seed)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Drop for CommitmentChainSeed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for CommitmentChainSeed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("CommitmentChainSeed(..)")
    }
}

/// Secret of one commitment. May be disclosed only after the commitment has
/// been superseded.
#[derive(Clone, PartialEq, Eq)]
pub struct PerCommitmentSecret([u8; 32]);

impl PerCommitmentSecret {
    pub fn from_bytes(secret: [u8; 32]) -> Self {
        PerCommitmentSecret(secret)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The secret as a private key, as needed to build the revocation
    /// private key once the commitment is revoked.
    pub fn to_secret_key(&self) -> Result<SecretKey, DerivationError> {
        SecretKey::from_slice(&self.0).map_err(|_| DerivationError::CurveDerivation {
            role: KeyRole::PerCommitment,
        })
    }

    /// Checks that this secret is the preimage of `point`, as a receiver
    /// does before accepting a revocation.
    pub fn matches_point<C>(&self, curve: &C, point: &PublicKey) -> bool
    where
        C: PointDerivation + ?Sized,
    {
        curve
            .point_from_scalar(&self.0)
            .map(|derived| derived == *point)
            .unwrap_or(false)
    }
}

impl Drop for PerCommitmentSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for PerCommitmentSecret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("PerCommitmentSecret(..)")
    }
}

/// Result of moving on from the current commitment.
#[derive(Debug)]
pub struct CommitmentAdvance {
    /// Secret of `current_index - 1`, the state being revoked. There is
    /// nothing to revoke at index 0, so it is `None` there.
    pub old_secret: Option<PerCommitmentSecret>,
    /// Point of `current_index + 1`.
    pub next_point: PublicKey,
}

pub fn per_commitment_secret(
    shaseed: &CommitmentChainSeed,
    index: u64,
) -> Result<PerCommitmentSecret, DerivationError> {
    let producer = RevocationProducer::new(shaseed.0);
    let mut secret = producer.at_index(index)?;
    let per_commitment_secret = PerCommitmentSecret(secret);
    secret.zeroize();
    Ok(per_commitment_secret)
}

// per-commitment-point = per-commitment-secret * G
pub fn per_commitment_point<C>(
    curve: &C,
    shaseed: &CommitmentChainSeed,
    index: u64,
) -> Result<PublicKey, DerivationError>
where
    C: PointDerivation + ?Sized,
{
    let secret = per_commitment_secret(shaseed, index)?;
    curve
        .point_from_scalar(secret.as_bytes())
        .map_err(|_| DerivationError::CurveDerivation {
            role: KeyRole::PerCommitment,
        })
}

/// Reveals the secret of the commitment before `current_index` and
/// publishes the point of the commitment after it.
///
/// The index itself is not advanced here; the channel state machine moves it
/// once the new commitment is fully signed.
pub fn advance<C>(
    curve: &C,
    shaseed: &CommitmentChainSeed,
    current_index: u64,
) -> Result<CommitmentAdvance, DerivationError>
where
    C: PointDerivation + ?Sized,
{
    let next_index = current_index
        .checked_add(1)
        .ok_or(DerivationError::IndexOutOfRange {
            index: current_index,
        })?;

    let old_secret = current_index
        .checked_sub(1)
        .map(|previous| per_commitment_secret(shaseed, previous))
        .transpose()?;

    let next_point = per_commitment_point(curve, shaseed, next_index)?;

    trace!(
        current_index,
        revealed = old_secret.is_some(),
        "advanced per-commitment point"
    );

    Ok(CommitmentAdvance {
        old_secret,
        next_point,
    })
}
