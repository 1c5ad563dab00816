//! BOLT #3 key derivation: turning a basepoint and a per-commitment point
//! into the keys used by one commitment transaction.

use dependencies::secp256k1::{self, PublicKey, Scalar, Secp256k1, SecretKey, Signing, Verification};

use crate::error::DerivationError;
use crate::tools::sha256;

fn tweak(first: &PublicKey, second: &PublicKey) -> Result<Scalar, DerivationError> {
    let joined = [&first.serialize()[..], &second.serialize()[..]].concat();
    Scalar::from_be_bytes(sha256(&joined))
        .map_err(|_| DerivationError::Tweak(secp256k1::Error::InvalidTweak))
}

// pubkey = basepoint + SHA256(per_commitment_point || basepoint) * G
pub fn derive_pubkey<C: Verification>(
    secp: &Secp256k1<C>,
    base_point: &PublicKey,
    per_commitment_point: &PublicKey,
) -> Result<PublicKey, DerivationError> {
    let h = tweak(per_commitment_point, base_point)?;
    Ok(base_point.add_exp_tweak(secp, &h)?)
}

// privkey = basepoint_secret + SHA256(per_commitment_point || basepoint)
pub fn derive_privkey<C: Signing>(
    secp: &Secp256k1<C>,
    base_point_secret: &SecretKey,
    per_commitment_point: &PublicKey,
) -> Result<SecretKey, DerivationError> {
    let base_point = PublicKey::from_secret_key(secp, base_point_secret);
    let h = tweak(per_commitment_point, &base_point)?;
    Ok(base_point_secret.add_tweak(&h)?)
}

// revocation_pubkey = revocation_basepoint * SHA256(revocation_basepoint || per_commitment_point)
//      + per_commitment_point * SHA256(per_commitment_point || revocation_basepoint)
pub fn derive_revocation_pubkey<C: Verification>(
    secp: &Secp256k1<C>,
    revocation_base_point: &PublicKey,
    per_commitment_point: &PublicKey,
) -> Result<PublicKey, DerivationError> {
    let h1 = tweak(revocation_base_point, per_commitment_point)?;
    let h2 = tweak(per_commitment_point, revocation_base_point)?;

    let pk1 = revocation_base_point.mul_tweak(secp, &h1)?;
    let pk2 = per_commitment_point.mul_tweak(secp, &h2)?;

    Ok(pk1.combine(&pk2)?)
}

// revocationprivkey = revocation_basepoint_secret * SHA256(revocation_basepoint || per_commitment_point)
//        + per_commitment_secret * SHA256(per_commitment_point || revocation_basepoint)
pub fn derive_revocation_privkey<C: Signing>(
    secp: &Secp256k1<C>,
    revocation_base_point_secret: &SecretKey,
    per_commitment_secret: &SecretKey,
) -> Result<SecretKey, DerivationError> {
    let revocation_base_point = PublicKey::from_secret_key(secp, revocation_base_point_secret);
    let per_commitment_point = PublicKey::from_secret_key(secp, per_commitment_secret);

    let h1 = tweak(&revocation_base_point, &per_commitment_point)?;
    let h2 = tweak(&per_commitment_point, &revocation_base_point)?;

    let sk1 = revocation_base_point_secret.mul_tweak(&h1)?;
    let sk2 = per_commitment_secret.mul_tweak(&h2)?;

    Ok(sk1.add_tweak(&Scalar::from(sk2))?)
}
