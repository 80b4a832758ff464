//! Layout seeds for reproducible generation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed driving one layout generation pass.
///
/// Every generated layout reports the seed that produced it, so any run —
/// including an unseeded one — can be reproduced after the fact. Seeds
/// round-trip through a 64-character hex string.
///
/// # Examples
///
/// ```
/// use wordcross_generator::LayoutSeed;
///
/// let seed = LayoutSeed::from_phrase("summer issue");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex.parse::<LayoutSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutSeed([u8; 32]);

impl LayoutSeed {
    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from a human-readable phrase.
    ///
    /// The phrase is hashed with SHA-256, so the same phrase always yields
    /// the same seed — handy for sharing a layout as a memorable string
    /// instead of 64 hex characters.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic RNG a generation pass shuffles with.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for LayoutSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a seed from hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SeedParseError {
    /// The text was not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    Length {
        /// Number of characters found.
        len: usize,
    },
    /// The text contained a character outside `[0-9a-fA-F]`.
    #[display("seed contains a non-hex character")]
    Digit,
}

impl FromStr for LayoutSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::Length { len });
        }
        if !s.is_ascii() {
            return Err(SeedParseError::Digit);
        }

        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16)
                .map_err(|_| SeedParseError::Digit)?;
        }
        Ok(Self(bytes))
    }
}
