//! Unified error types for the mnemonic codec
//!
//! Every codec failure is reported to the immediate caller as a
//! `MnemonicError` carrying a stable `ErrorCode`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all mnemonic operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MnemonicError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl MnemonicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_wordlist(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidWordlist, msg)
    }

    pub fn invalid_entropy_length(len: usize) -> Self {
        Self::new(
            ErrorCode::InvalidEntropyLength,
            format!("Entropy must be 16, 20, 24, 28 or 32 bytes, got {}", len),
        )
    }

    pub fn unknown_word(position: usize) -> Self {
        // The word itself is secret material and never goes into the message
        Self::new(ErrorCode::UnknownWord, "Word not found in wordlist")
            .with_details(format!("position {}", position))
    }

    pub fn invalid_word_count(count: usize) -> Self {
        Self::new(
            ErrorCode::InvalidWordCount,
            format!("Mnemonic must be 12, 15, 18, 21 or 24 words, got {}", count),
        )
    }

    pub fn buffer_too_small(required: usize, available: usize) -> Self {
        Self::new(ErrorCode::BufferTooSmall, "Output buffer is too small")
            .with_details(format!("required {} bytes, available {}", required, available))
    }

    pub fn checksum_mismatch() -> Self {
        Self::new(ErrorCode::ChecksumMismatch, "Mnemonic checksum does not match")
    }

    pub fn unsupported_language(code: &str) -> Self {
        Self::new(
            ErrorCode::UnsupportedLanguage,
            format!("Unsupported language code: {:?}", code),
        )
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for MnemonicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for MnemonicError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Codec errors
    InvalidWordlist,
    InvalidEntropyLength,
    UnknownWord,
    InvalidWordCount,
    BufferTooSmall,
    ChecksumMismatch,

    // Registry errors
    UnsupportedLanguage,

    // Input errors
    InvalidInput,
    HexError,
    JsonError,

    // Internal
    Internal,
}

/// Result type alias for mnemonic operations
pub type MnemonicResult<T> = Result<T, MnemonicError>;

// Conversions from common error types

impl From<serde_json::Error> for MnemonicError {
    fn from(e: serde_json::Error) -> Self {
        MnemonicError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<hex::FromHexError> for MnemonicError {
    fn from(e: hex::FromHexError) -> Self {
        MnemonicError::new(ErrorCode::HexError, e.to_string())
    }
}
