use std::fmt;

use dependencies::hkdf::Hkdf;
use dependencies::rand::{CryptoRng, RngCore};
use dependencies::sha2::Sha256;
use dependencies::zeroize::Zeroize;

use crate::error::DerivationError;

/// Domain separation label mixed into the expansion of every channel seed.
///
/// Part of the derivation contract: changing it changes every key derived
/// from every seed.
pub const DOMAIN_LABEL: &[u8] = b"c-lightning";

const FIELD_SIZE: usize = 32;
const FIELD_COUNT: usize = 5;

/// The unguessable per-channel seed. Never transmitted, never reused across
/// channels; it is wiped from memory when dropped.
pub struct ChannelSeed([u8; 32]);

impl ChannelSeed {
    pub fn new(seed: [u8; 32]) -> Self {
        ChannelSeed(seed)
    }

    pub fn from_rng<R>(rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng,
    {
        let mut seed = [0; 32];
        rng.fill_bytes(&mut seed);
        ChannelSeed(seed)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Drop for ChannelSeed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for ChannelSeed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ChannelSeed(..)")
    }
}

// SecretMaterial is the whole expansion output of a channel seed. The field
// order below is the order the bytes come out of HKDF and must never change.
pub(crate) struct SecretMaterial {
    pub funding: [u8; 32],
    pub revocation: [u8; 32],
    pub payment: [u8; 32],
    pub delayed_payment: [u8; 32],
    pub shaseed: [u8; 32],
}

impl SecretMaterial {
    // expand runs HKDF-SHA256 over the seed with no salt and `label` as the
    // info string, producing exactly five 32-byte fields.
    pub fn expand(seed: &ChannelSeed, label: &[u8]) -> Result<Self, DerivationError> {
        let mut okm = [0u8; FIELD_SIZE * FIELD_COUNT];
        let result = Hkdf::<Sha256>::new(None, seed.as_bytes())
            .expand(label, &mut okm)
            .map_err(|_| DerivationError::Expansion);

        let mut fields = [[0u8; FIELD_SIZE]; FIELD_COUNT];
        for (field, chunk) in fields.iter_mut().zip(okm.chunks_exact(FIELD_SIZE)) {
            field.copy_from_slice(chunk);
        }
        okm.zeroize();

        let [funding, revocation, payment, delayed_payment, shaseed] = fields;
        fields.zeroize();
        result?;

        Ok(SecretMaterial {
            funding,
            revocation,
            payment,
            delayed_payment,
            shaseed,
        })
    }
}

impl Drop for SecretMaterial {
    fn drop(&mut self) {
        self.funding.zeroize();
        self.revocation.zeroize();
        self.payment.zeroize();
        self.delayed_payment.zeroize();
        self.shaseed.zeroize();
    }
}
