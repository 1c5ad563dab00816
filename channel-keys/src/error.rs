use std::fmt;

use dependencies::secp256k1;
use shachain::ShachainError;
use thiserror::Error;

/// Which derived scalar a curve failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Funding,
    Revocation,
    Payment,
    DelayedPayment,
    PerCommitment,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            KeyRole::Funding => "funding key",
            KeyRole::Revocation => "revocation basepoint",
            KeyRole::Payment => "payment basepoint",
            KeyRole::DelayedPayment => "delayed payment basepoint",
            KeyRole::PerCommitment => "per-commitment point",
        };
        f.write_str(name)
    }
}

/// Failure of a derivation. None of these is worth retrying with the same
/// input: every derivation is a pure function of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// The scalar is zero or not below the group order.
    #[error("cannot compute {role}: scalar is not a valid secret key")]
    CurveDerivation { role: KeyRole },

    /// HKDF refused the output length. Cannot happen for the fixed
    /// five-field layout; the expansion result is still checked.
    #[error("key material expansion rejected the requested length")]
    Expansion,

    /// The commitment index has no successor.
    #[error("commitment index {index} is out of range")]
    IndexOutOfRange { index: u64 },

    #[error("per-commitment secret: {0}")]
    Chain(#[from] ShachainError),

    #[error("key tweak failed: {0}")]
    Tweak(#[from] secp256k1::Error),
}
