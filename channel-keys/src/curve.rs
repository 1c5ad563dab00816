use dependencies::secp256k1::{self, PublicKey, Secp256k1, SecretKey, Signing};

/// Computes `scalar * G`.
///
/// This is the only curve operation key derivation needs. It is a trait so
/// the context is always passed in explicitly, and so tests can substitute
/// an implementation that refuses every scalar.
pub trait PointDerivation {
    /// Fails iff the scalar is zero or not below the group order.
    fn point_from_scalar(&self, scalar: &[u8; 32]) -> Result<PublicKey, secp256k1::Error>;
}

impl<C: Signing> PointDerivation for Secp256k1<C> {
    fn point_from_scalar(&self, scalar: &[u8; 32]) -> Result<PublicKey, secp256k1::Error> {
        let mut secret_key = SecretKey::from_slice(scalar)?;
        let point = PublicKey::from_secret_key(self, &secret_key);
        secret_key.non_secure_erase();
        Ok(point)
    }
}
