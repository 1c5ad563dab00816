use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShachainError {
    #[error("commitment number {0} is beyond the shachain range")]
    IndexOutOfRange(u64),

    #[error("prefixes are different - index {to:#x} isn't derivable from index {from:#x}")]
    NotDerivable { from: u64, to: u64 },

    #[error("secret for commitment number {0} isn't derivable from previous ones")]
    InconsistentSecret(u64),

    #[error("unable to derive secret for commitment number {0}")]
    UnknownSecret(u64),
}
