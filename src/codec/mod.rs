//! BIP-39 Mnemonic Codec
//!
//! Checksum policy on top of [`crate::mnemonic`] index packing:
//! entropy is suffixed with the first byte of its digest, and only the
//! top `entropy_bits / 32` bits of that byte are significant.
//!
//! SECURITY: scratch buffers holding entropy are zeroized on drop.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{MnemonicError, MnemonicResult};
use crate::mnemonic;
use crate::types::EntropyStrength;
use crate::wordlist::{self, Wordlist};
use crate::log_debug;

/// Tag carried by this module's log entries
const LOG_MODULE: &str = "codec";

/// Width of a BIP-39 word index
pub const BIP39_WORD_BITS: usize = 11;

/// Entropy plus one trailing checksum byte, at the largest supported size
const SCRATCH_LEN: usize = EntropyStrength::MAX_BYTES + 1;

/// Digest used to derive checksum bits. Only the first byte is consumed.
pub trait ChecksumHasher {
    fn digest(&self, data: &[u8]) -> [u8; 32];
}

/// The standard BIP-39 checksum hash
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Checksum;

impl ChecksumHasher for Sha256Checksum {
    fn digest(&self, data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }
}

impl<F> ChecksumHasher for F
where
    F: Fn(&[u8]) -> [u8; 32],
{
    fn digest(&self, data: &[u8]) -> [u8; 32] {
        self(data)
    }
}

fn checked_wordlist(wordlist: Option<&Wordlist>) -> MnemonicResult<&Wordlist> {
    let w = wordlist.unwrap_or_else(|| wordlist::english());
    if w.bits() != BIP39_WORD_BITS {
        return Err(MnemonicError::invalid_wordlist(format!(
            "BIP-39 requires {}-bit word indices, wordlist has {}",
            BIP39_WORD_BITS,
            w.bits()
        )));
    }
    Ok(w)
}

/// Encode entropy as a checksummed mnemonic using SHA-256.
///
/// `None` selects the English wordlist.
pub fn mnemonic_from_entropy(wordlist: Option<&Wordlist>, entropy: &[u8]) -> MnemonicResult<String> {
    mnemonic_from_entropy_with_hasher(wordlist, entropy, &Sha256Checksum)
}

/// Encode entropy as a checksummed mnemonic with a caller-supplied hash
pub fn mnemonic_from_entropy_with_hasher<H: ChecksumHasher + ?Sized>(
    wordlist: Option<&Wordlist>,
    entropy: &[u8],
    hasher: &H,
) -> MnemonicResult<String> {
    let w = checked_wordlist(wordlist)?;
    if EntropyStrength::from_byte_len(entropy.len()).is_none() {
        return Err(MnemonicError::invalid_entropy_length(entropy.len()));
    }

    let checksum = hasher.digest(entropy)[0];

    let mut payload = Zeroizing::new([0u8; SCRATCH_LEN]);
    payload[..entropy.len()].copy_from_slice(entropy);
    payload[entropy.len()] = checksum;

    mnemonic::mnemonic_from_bytes(w, &payload[..entropy.len() + 1])
}

/// Decode a mnemonic into `out`, returning the entropy length.
///
/// `out` is only written once every check has passed.
pub fn mnemonic_to_entropy(
    wordlist: Option<&Wordlist>,
    phrase: &str,
    out: &mut [u8],
) -> MnemonicResult<usize> {
    mnemonic_to_entropy_with_hasher(wordlist, phrase, out, &Sha256Checksum)
}

/// Decode a mnemonic into `out` with a caller-supplied hash
pub fn mnemonic_to_entropy_with_hasher<H: ChecksumHasher + ?Sized>(
    wordlist: Option<&Wordlist>,
    phrase: &str,
    out: &mut [u8],
    hasher: &H,
) -> MnemonicResult<usize> {
    let w = checked_wordlist(wordlist)?;

    let word_count = phrase.split_whitespace().count();
    if word_count == 0 || mnemonic::packed_len(BIP39_WORD_BITS, word_count) > SCRATCH_LEN {
        log_debug!(LOG_MODULE, "Rejected word count", words = word_count);
        return Err(MnemonicError::invalid_word_count(word_count));
    }

    let mut payload = Zeroizing::new([0u8; SCRATCH_LEN]);
    let payload_len = mnemonic::mnemonic_to_bytes(w, phrase, &mut payload[..])?;

    let entropy_len = payload_len - 1;
    let strength = EntropyStrength::from_byte_len(entropy_len)
        .ok_or_else(|| MnemonicError::invalid_word_count(word_count))?;
    let mask = strength.checksum_mask();

    if out.len() < entropy_len {
        return Err(MnemonicError::buffer_too_small(entropy_len, out.len()));
    }

    let expected = hasher.digest(&payload[..entropy_len])[0] & mask;
    let actual = payload[entropy_len] & mask;
    if !bool::from(expected.ct_eq(&actual)) {
        log_debug!(LOG_MODULE, "Checksum mismatch", words = word_count);
        return Err(MnemonicError::checksum_mismatch());
    }

    out[..entropy_len].copy_from_slice(&payload[..entropy_len]);
    Ok(entropy_len)
}

/// Decode a mnemonic into an owned buffer that is wiped on drop
pub fn mnemonic_to_entropy_vec(
    wordlist: Option<&Wordlist>,
    phrase: &str,
) -> MnemonicResult<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(vec![0u8; EntropyStrength::MAX_BYTES]);
    let len = mnemonic_to_entropy(wordlist, phrase, buf.as_mut_slice())?;
    buf.truncate(len);
    Ok(buf)
}

/// Check if a mnemonic phrase is valid for the given wordlist
pub fn is_valid_mnemonic(wordlist: Option<&Wordlist>, phrase: &str) -> bool {
    let mut scratch = Zeroizing::new([0u8; SCRATCH_LEN]);
    mnemonic_to_entropy(wordlist, phrase, &mut scratch[..]).is_ok()
}

/// Create a new mnemonic from operating system randomness
pub fn generate_mnemonic(
    wordlist: Option<&Wordlist>,
    strength: EntropyStrength,
) -> MnemonicResult<String> {
    let mut entropy = Zeroizing::new([0u8; EntropyStrength::MAX_BYTES]);
    let len = strength.byte_len();
    OsRng.fill_bytes(&mut entropy[..len]);

    let phrase = mnemonic_from_entropy(wordlist, &entropy[..len])?;
    log_debug!(LOG_MODULE, "Generated mnemonic", bits = strength.bits());

    // entropy is automatically zeroized when dropped here
    Ok(phrase)
}
