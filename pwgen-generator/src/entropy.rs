//! Secure entropy sources.
//!
//! Every random draw made by the generator goes through [`EntropySource`].
//! The only production implementation is [`SystemEntropy`], backed by the
//! operating system CSPRNG.

use std::sync::OnceLock;

use rand::RngCore;
use rand::rngs::OsRng;

/// A source of cryptographically secure random bytes.
///
/// `fill` takes `&self` so a single source can be shared between threads.
/// Implementations must either fill the whole buffer or return an error.
pub trait EntropySource {
    fn fill(&self, buf: &mut [u8]) -> Result<(), rand::Error>;
}

/// The operating system's secure random number generator.
#[derive(Debug, Clone, Copy)]
pub struct SystemEntropy {
    rng: OsRng,
}

static SYSTEM_ENTROPY: OnceLock<SystemEntropy> = OnceLock::new();

impl SystemEntropy {
    /// Returns the process-wide handle, creating it on first use.
    pub fn shared() -> &'static SystemEntropy {
        SYSTEM_ENTROPY.get_or_init(|| {
            tracing::debug!("initialized system entropy source");
            SystemEntropy { rng: OsRng }
        })
    }
}

impl EntropySource for SystemEntropy {
    #[inline]
    fn fill(&self, buf: &mut [u8]) -> Result<(), rand::Error> {
        // OsRng is stateless; each copy issues its own OS call.
        let mut rng = self.rng;
        rng.try_fill_bytes(buf)
    }
}
