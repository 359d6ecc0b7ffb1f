/// A request that cannot produce any output.
///
/// Always detected before any randomness is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfiguration {
    #[error("length must be greater than 0")]
    ZeroLength,

    #[error("character set is empty: select at least one character class or supply a custom set")]
    EmptyCharacterSet,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),

    #[error("secure random source failed: {0}")]
    Entropy(#[from] rand::Error),

    #[cfg(feature = "tokio")]
    #[error("generation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Returns true when the caller can fix the request and try again.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration(_))
    }
}
