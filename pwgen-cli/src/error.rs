#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Generator(#[from] pwgen_generator::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the error comes from the requested options rather than the
    /// environment.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Generator(e) if e.is_configuration())
    }
}
