//! Mnemonic Core Library
//!
//! BIP-39 mnemonic encoding: a checksummed, reversible mapping between
//! 128-256 bits of entropy and a phrase of words from a 2048-word list.
//!
//! # Architecture
//!
//! This crate provides:
//! - **wordlist**: Language code registry and word/index lookup
//! - **mnemonic**: 11-bit index packing between bytes and words
//! - **codec**: BIP-39 checksum policy (encode, decode, validate, generate)
//! - **utils**: Structured logging and configuration
//!
//! Key derivation from a mnemonic (PBKDF2 seeds) is not part of this crate.
//!
//! # Security
//!
//! Scratch buffers holding entropy are cleared with `zeroize` when dropped,
//! and log fields naming secret material are redacted.
//!
//! # Example
//!
//! ```rust
//! use mnemonic_core::{mnemonic_from_entropy, mnemonic_to_entropy, resolve};
//!
//! let english = resolve(Some("en"));
//! let phrase = mnemonic_from_entropy(Some(english), &[0u8; 16]).unwrap();
//! assert!(phrase.ends_with("abandon about"));
//!
//! let mut entropy = [0u8; 32];
//! let len = mnemonic_to_entropy(Some(english), &phrase, &mut entropy).unwrap();
//! assert_eq!(&entropy[..len], &[0u8; 16]);
//! ```

pub mod error;
pub mod types;
pub mod utils;
pub mod wordlist;
pub mod mnemonic;
pub mod codec;

// Re-export key types for convenience
pub use error::{ErrorCode, MnemonicError, MnemonicResult};
pub use types::*;

pub use wordlist::{
    english, languages_string, resolve, resolve_strict, supported_languages, Wordlist,
};

pub use codec::{
    generate_mnemonic,
    is_valid_mnemonic,
    mnemonic_from_entropy,
    mnemonic_from_entropy_with_hasher,
    mnemonic_to_entropy,
    mnemonic_to_entropy_vec,
    mnemonic_to_entropy_with_hasher,
    ChecksumHasher,
    Sha256Checksum,
};
