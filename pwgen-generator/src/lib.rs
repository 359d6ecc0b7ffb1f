//! Cryptographically secure random string and password generation.
//!
//! Strings are drawn character by character from a [`CharacterSet`], either
//! a custom alphabet or a combination of lower case letters, upper case
//! letters, numbers and special characters. Each character index comes from
//! the operating system CSPRNG through a rejection sampler, so every character
//! of the alphabet is equally likely and there is no modulo bias.
//!
//! ```no_run
//! use pwgen_generator::{GenerationRequest, generate};
//!
//! let request = GenerationRequest::new(20, 3).with_classes(true, true, true, false);
//! for password in generate(&request)? {
//!     println!("{password}");
//! }
//! # Ok::<(), pwgen_generator::Error>(())
//! ```
//!
//! Configuration errors are reported before any randomness is consumed. A
//! failing entropy source aborts the whole call; there is no fallback to a
//! non-cryptographic generator.

pub mod charset;
pub mod entropy;
pub mod error;
pub mod request;
pub mod sampling;

pub use charset::{CharacterSet, LOWER_CASE_LETTERS, NUMBERS, SPECIAL_CHARACTERS, UPPER_CASE_LETTERS};
pub use entropy::{EntropySource, SystemEntropy};
pub use error::{Error, InvalidConfiguration};
pub use request::{DEFAULT_COUNT, DEFAULT_LENGTH, GenerationRequest, MAX_COUNT, MAX_LENGTH};

use sampling::unbiased_index;

/// Generates random strings from a given entropy source.
///
/// The generator holds only a reference to its source and can be shared
/// across threads whenever the source can.
pub struct RandomStringGenerator<'a, S: EntropySource + ?Sized> {
    source: &'a S,
}

impl RandomStringGenerator<'static, SystemEntropy> {
    /// Creates a generator backed by the process-wide system entropy source.
    pub fn system() -> Self {
        Self::new(SystemEntropy::shared())
    }
}

impl<'a, S: EntropySource + ?Sized> RandomStringGenerator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Generates `request.count` strings of `request.length` characters each.
    ///
    /// Returns `Error::InvalidConfiguration` if the length is zero or the
    /// resolved character set is empty, and `Error::Entropy` if the source
    /// fails. No partial result is returned in either case.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Vec<String>, Error> {
        if request.length == 0 {
            return Err(InvalidConfiguration::ZeroLength.into());
        }
        let set = CharacterSet::resolve(request)?;

        tracing::debug!(
            length = request.length,
            count = request.count,
            alphabet = set.len(),
            custom = request.custom_set().is_some(),
            "generating random strings"
        );

        let mut strings = Vec::with_capacity(request.count);
        for _ in 0..request.count {
            strings.push(self.generate_one(&set, request.length)?);
        }
        Ok(strings)
    }

    /// Generates a single string of `length` characters over `set`.
    pub fn generate_one(&self, set: &CharacterSet, length: usize) -> Result<String, Error> {
        if length == 0 {
            return Err(InvalidConfiguration::ZeroLength.into());
        }
        if set.is_empty() {
            return Err(InvalidConfiguration::EmptyCharacterSet.into());
        }

        let chars = set.as_slice();
        let mut out = String::with_capacity(length);
        for _ in 0..length {
            out.push(chars[unbiased_index(self.source, chars.len())?]);
        }
        Ok(out)
    }
}

/// Generates strings for `request` using the process-wide system entropy source.
pub fn generate(request: &GenerationRequest) -> Result<Vec<String>, Error> {
    RandomStringGenerator::system().generate(request)
}

/// Async variant of [`generate`].
///
/// Runs the whole request on tokio's blocking pool in a single
/// `spawn_blocking` call.
#[cfg(feature = "tokio")]
pub async fn generate_async(request: GenerationRequest) -> Result<Vec<String>, Error> {
    tokio::task::spawn_blocking(move || generate(&request)).await?
}
