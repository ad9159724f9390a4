//! Shared types for the mnemonic codec
//!
//! Data structures that cross module boundaries are defined here
//! for consistent serialization.

use serde::{Deserialize, Serialize};

// =============================================================================
// Entropy Types
// =============================================================================

/// Supported entropy sizes
///
/// Each size fixes the checksum width (`bits / 32`) and therefore the
/// number of words in the resulting mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntropyStrength {
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}

impl EntropyStrength {
    pub const ALL: [EntropyStrength; 5] = [
        EntropyStrength::Bits128,
        EntropyStrength::Bits160,
        EntropyStrength::Bits192,
        EntropyStrength::Bits224,
        EntropyStrength::Bits256,
    ];

    /// Largest supported entropy length in bytes
    pub const MAX_BYTES: usize = 32;

    pub fn bits(&self) -> usize {
        match self {
            EntropyStrength::Bits128 => 128,
            EntropyStrength::Bits160 => 160,
            EntropyStrength::Bits192 => 192,
            EntropyStrength::Bits224 => 224,
            EntropyStrength::Bits256 => 256,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.bits() / 8
    }

    pub fn checksum_bits(&self) -> usize {
        self.bits() / 32
    }

    /// Mask selecting the checksum bits of the first digest byte
    pub fn checksum_mask(&self) -> u8 {
        match self {
            EntropyStrength::Bits128 => 0xf0,
            EntropyStrength::Bits160 => 0xf8,
            EntropyStrength::Bits192 => 0xfc,
            EntropyStrength::Bits224 => 0xfe,
            EntropyStrength::Bits256 => 0xff,
        }
    }

    pub fn word_count(&self) -> usize {
        (self.bits() + self.checksum_bits()) / 11
    }

    /// Look up the strength for an entropy length in bytes.
    /// Doubles as the entropy length validation rule.
    pub fn from_byte_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(EntropyStrength::Bits128),
            20 => Some(EntropyStrength::Bits160),
            24 => Some(EntropyStrength::Bits192),
            28 => Some(EntropyStrength::Bits224),
            32 => Some(EntropyStrength::Bits256),
            _ => None,
        }
    }

    pub fn from_bits(bits: usize) -> Option<Self> {
        if bits % 8 != 0 {
            return None;
        }
        Self::from_byte_len(bits / 8)
    }

    pub fn from_word_count(words: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.word_count() == words)
    }
}

impl Default for EntropyStrength {
    fn default() -> Self {
        EntropyStrength::Bits128
    }
}
