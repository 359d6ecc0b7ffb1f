//! Unbiased index sampling over a 31-bit entropy domain.
//!
//! A draw is 4 secure random bytes read as a little-endian `u32` with the top
//! bit masked off, giving a uniform value in `[0, 2^31)`. Mapping that value
//! onto `[0, n)` with a plain `% n` would favor the low indices whenever `2^31`
//! is not a multiple of `n`, so values in the incomplete final bucket are
//! rejected and redrawn.

use crate::entropy::EntropySource;
use crate::error::Error;

/// Mask that clears the sign bit of a 4-byte draw.
pub const DOMAIN_MASK: u32 = 0x7FFF_FFFF;

/// Size of the draw domain (`M + 1` where `M = DOMAIN_MASK`).
pub const DOMAIN_SIZE: u64 = DOMAIN_MASK as u64 + 1;

/// Draws one uniform value in `[0, 2^31)` from the source.
#[inline]
pub fn next_non_negative<S: EntropySource + ?Sized>(source: &S) -> Result<u32, Error> {
    let mut buf = [0u8; 4];
    source.fill(&mut buf)?;
    Ok(u32::from_le_bytes(buf) & DOMAIN_MASK)
}

/// The exclusive upper bound of accepted draws for an alphabet of `exclusive_max`.
///
/// This is the largest multiple of `exclusive_max` that fits in the domain.
#[inline]
pub fn acceptance_limit(exclusive_max: usize) -> u64 {
    let n = exclusive_max as u64;
    n * (DOMAIN_SIZE / n)
}

/// Returns a uniformly distributed index in `[0, exclusive_max)`.
///
/// `exclusive_max` must be in `1..=2^31`. Each attempt is accepted with
/// probability greater than one half, so the loop ends after a couple of draws
/// in expectation.
pub fn unbiased_index<S: EntropySource + ?Sized>(
    source: &S,
    exclusive_max: usize,
) -> Result<usize, Error> {
    debug_assert!(exclusive_max >= 1 && exclusive_max as u64 <= DOMAIN_SIZE);

    let limit = acceptance_limit(exclusive_max);
    loop {
        let r = next_non_negative(source)? as u64;
        if r < limit {
            return Ok((r % exclusive_max as u64) as usize);
        }
        tracing::trace!(exclusive_max, "rejected biased draw");
    }
}
