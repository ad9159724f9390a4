//! Wordlist Registry
//!
//! Resolves short language codes to immutable wordlists. The word data
//! comes from the `bip39` crate's static lists; this module only indexes it.
//!
//! Unknown or missing codes fall back to English. Use [`resolve_strict`]
//! when a lookup miss must be reported.

use std::sync::OnceLock;

use bip39::Language;
use unicode_normalization::UnicodeNormalization;

use crate::error::{MnemonicError, MnemonicResult};

/// Language codes in registry order.
///
/// There is deliberately no generic "zh" entry: callers must pick
/// "zhs" (simplified) or "zht" (traditional).
const LANGUAGE_TABLE: [(&str, Language); 7] = [
    ("en", Language::English),
    ("es", Language::Spanish),
    ("fr", Language::French),
    ("it", Language::Italian),
    ("jp", Language::Japanese),
    ("zhs", Language::SimplifiedChinese),
    ("zht", Language::TraditionalChinese),
];

const SUPPORTED_CODES: [&str; 7] = ["en", "es", "fr", "it", "jp", "zhs", "zht"];

/// An ordered list of words where each word's position is its index
#[derive(Debug)]
pub struct Wordlist {
    code: &'static str,
    language: Option<Language>,
    words: &'static [&'static str],
    bits: usize,
    sorted: bool,
}

impl Wordlist {
    /// Build a wordlist from static word data.
    ///
    /// The length must be a power of two; `bits` is its base-2 logarithm.
    pub fn from_words(code: &'static str, words: &'static [&'static str]) -> MnemonicResult<Self> {
        if words.len() < 2 || !words.len().is_power_of_two() {
            return Err(MnemonicError::invalid_wordlist(format!(
                "Wordlist length must be a power of two, got {}",
                words.len()
            )));
        }

        Ok(Self {
            code,
            language: None,
            words,
            bits: words.len().trailing_zeros() as usize,
            sorted: words.windows(2).all(|pair| pair[0] < pair[1]),
        })
    }

    fn from_language(code: &'static str, language: Language) -> Self {
        let words: &'static [&'static str] = language.word_list();
        Self {
            code,
            language: Some(language),
            words,
            bits: 11,
            sorted: words.windows(2).all(|pair| pair[0] < pair[1]),
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.code
    }

    /// Underlying `bip39` language, if this list came from the registry
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of bits each word encodes
    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn word_at(&self, index: usize) -> Option<&'static str> {
        self.words.get(index).copied()
    }

    /// Find the index of a word.
    ///
    /// A word that is not present verbatim is retried in NFKD and then NFC
    /// form, so accented input matches regardless of how it was composed.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        if let Some(index) = self.find_exact(word) {
            return Some(index);
        }
        if word.is_ascii() {
            return None;
        }

        let decomposed: String = word.nfkd().collect();
        if decomposed != word {
            if let Some(index) = self.find_exact(&decomposed) {
                return Some(index);
            }
        }

        let composed: String = word.nfc().collect();
        if composed != word {
            return self.find_exact(&composed);
        }
        None
    }

    fn find_exact(&self, word: &str) -> Option<usize> {
        if self.sorted {
            self.words.binary_search_by(|w| (*w).cmp(word)).ok()
        } else {
            self.words.iter().position(|w| *w == word)
        }
    }
}

impl PartialEq for Wordlist {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && std::ptr::eq(self.words, other.words)
    }
}

impl Eq for Wordlist {}

/// Global registry instance, built once on first use
static REGISTRY: OnceLock<Vec<Wordlist>> = OnceLock::new();

fn registry() -> &'static [Wordlist] {
    REGISTRY.get_or_init(|| {
        LANGUAGE_TABLE
            .iter()
            .map(|(code, language)| Wordlist::from_language(*code, *language))
            .collect()
    })
}

fn lookup(code: &str) -> Option<&'static Wordlist> {
    registry().iter().find(|w| w.code == code)
}

/// The English wordlist, used whenever no language is selected
pub fn english() -> &'static Wordlist {
    &registry()[0]
}

/// Resolve a language code, falling back to English when the code is
/// absent, empty or unrecognized. Matching is case-sensitive.
pub fn resolve(code: Option<&str>) -> &'static Wordlist {
    code.and_then(lookup).unwrap_or_else(english)
}

/// Resolve a language code, failing when it is not in the registry
pub fn resolve_strict(code: &str) -> MnemonicResult<&'static Wordlist> {
    lookup(code).ok_or_else(|| MnemonicError::unsupported_language(code))
}

/// Supported language codes in registry order
pub fn supported_languages() -> &'static [&'static str] {
    &SUPPORTED_CODES
}

/// Supported language codes as a single space-separated string
pub fn languages_string() -> String {
    SUPPORTED_CODES.join(" ")
}
