//! Codec Configuration
//!
//! Defaults used by the command line tools when a flag is not given.
//! Settings come from the environment:
//! - `MNEMONIC_LANG`: language code (default "en")
//! - `MNEMONIC_STRENGTH`: entropy bits for generation (default 128)
//! - `MNEMONIC_DEBUG`: "1"/"true" enables debug logging

use serde::{Deserialize, Serialize};

use crate::error::{MnemonicError, MnemonicResult};
use crate::log_warn;
use crate::types::EntropyStrength;
use crate::utils::logging;
use crate::wordlist::{self, Wordlist};

pub const ENV_LANG: &str = "MNEMONIC_LANG";
pub const ENV_STRENGTH: &str = "MNEMONIC_STRENGTH";
pub const ENV_DEBUG: &str = "MNEMONIC_DEBUG";

/// Codec settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecSettings {
    /// Language code used when none is given
    pub default_language: String,
    /// Entropy size used for generation
    pub default_strength: EntropyStrength,
    /// Emit debug log entries
    pub debug_logging: bool,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            default_strength: EntropyStrength::Bits128,
            debug_logging: false,
        }
    }
}

impl CodecSettings {
    /// Load settings from the process environment
    pub fn from_env() -> MnemonicResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// A rejected value is logged as a warning before the error is returned.
    pub fn from_lookup<F>(lookup: F) -> MnemonicResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::read(lookup).map_err(|err| {
            log_warn!("config", "Rejected settings", error = err);
            err
        })
    }

    fn read<F>(lookup: F) -> MnemonicResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(lang) = lookup(ENV_LANG) {
            let lang = lang.trim();
            if !lang.is_empty() {
                settings.default_language = lang.to_string();
            }
        }

        if let Some(raw) = lookup(ENV_STRENGTH) {
            let bits: usize = raw.trim().parse().map_err(|_| {
                MnemonicError::invalid_input(format!("{} must be a number of bits", ENV_STRENGTH))
            })?;
            settings.default_strength = EntropyStrength::from_bits(bits).ok_or_else(|| {
                MnemonicError::invalid_input(format!(
                    "{} must be one of 128, 160, 192, 224, 256",
                    ENV_STRENGTH
                ))
            })?;
        }

        if let Some(raw) = lookup(ENV_DEBUG) {
            settings.debug_logging = matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> MnemonicResult<()> {
        wordlist::resolve_strict(&self.default_language)?;
        Ok(())
    }

    /// Wordlist for the configured default language
    pub fn wordlist(&self) -> &'static Wordlist {
        wordlist::resolve(Some(&self.default_language))
    }

    /// Apply process-wide side effects (debug logging)
    pub fn apply(&self) {
        if self.debug_logging {
            logging::enable_debug();
        } else {
            logging::disable_debug();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = CodecSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, CodecSettings::default());
        assert_eq!(settings.wordlist().language_code(), "en");
    }

    #[test]
    fn test_overrides() {
        let settings = CodecSettings::from_lookup(lookup_from(&[
            (ENV_LANG, "jp"),
            (ENV_STRENGTH, "256"),
            (ENV_DEBUG, "true"),
        ]))
        .unwrap();
        assert_eq!(settings.default_language, "jp");
        assert_eq!(settings.default_strength, EntropyStrength::Bits256);
        assert!(settings.debug_logging);
        assert_eq!(settings.wordlist().language_code(), "jp");
    }

    #[test]
    fn test_rejects_unknown_language() {
        let err = CodecSettings::from_lookup(lookup_from(&[(ENV_LANG, "zh")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedLanguage);
    }

    #[test]
    fn test_rejects_bad_strength() {
        let err = CodecSettings::from_lookup(lookup_from(&[(ENV_STRENGTH, "100")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let err = CodecSettings::from_lookup(lookup_from(&[(ENV_STRENGTH, "lots")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_json_roundtrip() {
        let json = r#"{"default_language":"fr","default_strength":"bits192","debug_logging":false}"#;
        let settings: CodecSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.default_strength, EntropyStrength::Bits192);
        assert!(settings.validate().is_ok());
    }
}
