pub use secp256k1;
pub use sha2;
pub use hkdf;
pub use rand;
pub use hex;
pub use hex_literal;
pub use zeroize;
pub use tracing;
pub use pretty_assertions;
