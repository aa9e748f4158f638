//! Secure random sampling.
//!
//! All randomness behind password material comes straight from the operating
//! system's entropy facility, never from a seeded user-space generator.

use rand::Rng;
use rand::rngs::OsRng;

/// Entropy source name, for display in the TUI banner.
pub fn source_name() -> &'static str {
    "operating system"
}

/// Uniform random index in `0..bound`. `bound` must be non-zero.
#[inline]
pub fn index(bound: usize) -> usize {
    OsRng.gen_range(0..bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_stays_in_bounds() {
        for bound in [1usize, 2, 10, 62, 94] {
            for _ in 0..256 {
                assert!(index(bound) < bound);
            }
        }
    }
}
