//! Channel-open key material: funding key, the three basepoints, and the
//! commitment chain seed, all expanded from one [`ChannelSeed`].

use std::fmt;

use dependencies::secp256k1::{PublicKey, SecretKey};
use dependencies::tracing::debug;

use crate::commitment::{per_commitment_point, CommitmentChainSeed};
use crate::curve::PointDerivation;
use crate::error::{DerivationError, KeyRole};
use crate::expand::{ChannelSeed, SecretMaterial, DOMAIN_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Basepoints {
    pub revocation: PublicKey,
    pub payment: PublicKey,
    pub delayed_payment: PublicKey,
}

/// The long-lived private keys of a channel.
pub struct Secrets {
    pub funding_privkey: SecretKey,
    pub revocation_basepoint_secret: SecretKey,
    pub payment_basepoint_secret: SecretKey,
    pub delayed_payment_basepoint_secret: SecretKey,
}

impl Drop for Secrets {
    fn drop(&mut self) {
        self.funding_privkey.non_secure_erase();
        self.revocation_basepoint_secret.non_secure_erase();
        self.payment_basepoint_secret.non_secure_erase();
        self.delayed_payment_basepoint_secret.non_secure_erase();
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Secrets { .. }")
    }
}

/// Everything a channel needs from its seed at open time.
#[derive(Debug)]
pub struct ChannelKeys {
    pub funding_pubkey: PublicKey,
    pub basepoints: Basepoints,
    pub secrets: Secrets,
    pub shaseed: CommitmentChainSeed,
    /// Point of the commitment index requested at derivation time, sent in
    /// `open_channel`/`accept_channel`.
    pub per_commitment_point: PublicKey,
}

fn derive_point<C>(curve: &C, scalar: &[u8; 32], role: KeyRole) -> Result<PublicKey, DerivationError>
where
    C: PointDerivation + ?Sized,
{
    curve
        .point_from_scalar(scalar)
        .map_err(|_| DerivationError::CurveDerivation { role })
}

fn secret_key(scalar: &[u8; 32], role: KeyRole) -> Result<SecretKey, DerivationError> {
    SecretKey::from_slice(scalar).map_err(|_| DerivationError::CurveDerivation { role })
}

/// Derives every key of a new channel from `seed`.
///
/// Either all keys are produced or none: a failure of any point computation
/// aborts the call. Such a failure is deterministic for the seed, so the
/// caller needs a fresh seed rather than a retry.
pub fn derive_basepoints<C>(
    curve: &C,
    seed: &ChannelSeed,
    per_commitment_index: u64,
) -> Result<ChannelKeys, DerivationError>
where
    C: PointDerivation + ?Sized,
{
    let material = SecretMaterial::expand(seed, DOMAIN_LABEL)?;

    let funding_pubkey = derive_point(curve, &material.funding, KeyRole::Funding)?;
    let basepoints = Basepoints {
        revocation: derive_point(curve, &material.revocation, KeyRole::Revocation)?,
        payment: derive_point(curve, &material.payment, KeyRole::Payment)?,
        delayed_payment: derive_point(curve, &material.delayed_payment, KeyRole::DelayedPayment)?,
    };

    let secrets = Secrets {
        funding_privkey: secret_key(&material.funding, KeyRole::Funding)?,
        revocation_basepoint_secret: secret_key(&material.revocation, KeyRole::Revocation)?,
        payment_basepoint_secret: secret_key(&material.payment, KeyRole::Payment)?,
        delayed_payment_basepoint_secret: secret_key(
            &material.delayed_payment,
            KeyRole::DelayedPayment,
        )?,
    };

    // BOLT #3:
    //
    // A node MUST select an unguessable 256-bit seed for each connection,
    // and MUST NOT reveal the seed.
    let shaseed = CommitmentChainSeed::new(material.shaseed);
    let per_commitment_point = per_commitment_point(curve, &shaseed, per_commitment_index)?;

    debug!(per_commitment_index, "derived channel basepoints");

    Ok(ChannelKeys {
        funding_pubkey,
        basepoints,
        secrets,
        shaseed,
        per_commitment_point,
    })
}
