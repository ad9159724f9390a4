//! Word Index Packing
//!
//! Converts between byte strings and word sequences by reading the bytes
//! as one MSB-first bitstream cut into `wordlist.bits()`-wide indices.
//! No checksum policy lives here; see [`crate::codec`].

use crate::error::{MnemonicError, MnemonicResult};
use crate::log_debug;
use crate::wordlist::Wordlist;
use zeroize::Zeroizing;

/// Read the `n`th index of width `bits` from an MSB-first bitstream
fn extract_index(bits: usize, bytes: &[u8], n: usize) -> usize {
    let mut value = 0usize;
    for i in 0..bits {
        let bit = n * bits + i;
        value <<= 1;
        if bytes[bit / 8] & (0x80 >> (bit % 8)) != 0 {
            value |= 1;
        }
    }
    value
}

/// Write `value` as the `n`th index of width `bits`. Target bits must be zero.
fn store_index(bits: usize, bytes: &mut [u8], n: usize, value: usize) {
    for i in 0..bits {
        let bit = n * bits + i;
        if value & (1 << (bits - 1 - i)) != 0 {
            bytes[bit / 8] |= 0x80 >> (bit % 8);
        }
    }
}

/// Number of bytes needed to hold `word_count` indices of `bits` each
pub fn packed_len(bits: usize, word_count: usize) -> usize {
    (word_count * bits + 7) / 8
}

/// Encode bytes as space-separated words.
///
/// Trailing bits that do not fill a whole index are dropped.
pub fn mnemonic_from_bytes(wordlist: &Wordlist, bytes: &[u8]) -> MnemonicResult<String> {
    let bits = wordlist.bits();
    let word_count = bytes.len() * 8 / bits;

    let mut words = Vec::with_capacity(word_count);
    for n in 0..word_count {
        let index = extract_index(bits, bytes, n);
        let word = wordlist
            .word_at(index)
            .ok_or_else(|| MnemonicError::internal(format!("Index {} outside wordlist", index)))?;
        words.push(word);
    }

    Ok(words.join(" "))
}

/// Decode whitespace-separated words into `out`, returning the number of
/// bytes written (`ceil(words * bits / 8)`).
///
/// Every word is looked up before anything is written, so `out` is left
/// untouched on failure.
pub fn mnemonic_to_bytes(wordlist: &Wordlist, phrase: &str, out: &mut [u8]) -> MnemonicResult<usize> {
    let bits = wordlist.bits();

    let indices: Zeroizing<Vec<usize>> = phrase
        .split_whitespace()
        .enumerate()
        .map(|(position, word)| {
            wordlist.index_of(word).ok_or_else(|| {
                log_debug!("mnemonic", "Word lookup failed", position = position);
                MnemonicError::unknown_word(position)
            })
        })
        .collect::<MnemonicResult<Vec<usize>>>()
        .map(Zeroizing::new)?;

    let len = packed_len(bits, indices.len());
    if out.len() < len {
        return Err(MnemonicError::buffer_too_small(len, out.len()));
    }

    out[..len].fill(0);
    for (n, index) in indices.iter().enumerate() {
        store_index(bits, &mut out[..len], n, *index);
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::wordlist::english;

    #[test]
    fn test_extract_and_store_are_inverse() {
        let mut bytes = [0u8; 4];
        store_index(11, &mut bytes, 0, 0x5a5);
        store_index(11, &mut bytes, 1, 0x7ff);
        assert_eq!(extract_index(11, &bytes, 0), 0x5a5);
        assert_eq!(extract_index(11, &bytes, 1), 0x7ff);
        assert_eq!(bytes, [0xb4, 0xbf, 0xfc, 0x00]);
    }

    #[test]
    fn test_from_bytes_drops_partial_index() {
        // 17 bytes = 136 bits -> 12 whole words, 4 padding bits
        let phrase = mnemonic_from_bytes(english(), &[0u8; 17]).unwrap();
        assert_eq!(phrase.split(' ').count(), 12);
        assert!(phrase.split(' ').all(|w| w == "abandon"));
    }

    #[test]
    fn test_to_bytes_packs_indices() {
        let mut out = [0xffu8; 33];
        let len = mnemonic_to_bytes(english(), "zoo abandon", &mut out).unwrap();
        assert_eq!(len, 3);
        assert_eq!(&out[..3], &[0xff, 0xe0, 0x00]);
    }

    #[test]
    fn test_unknown_word_leaves_buffer_untouched() {
        let mut out = [0xaau8; 4];
        let err = mnemonic_to_bytes(english(), "zoo nope", &mut out).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownWord);
        assert_eq!(err.details.as_deref(), Some("position 1"));
        assert_eq!(out, [0xaa; 4]);
    }

    #[test]
    fn test_small_buffer() {
        let mut out = [0u8; 2];
        let err = mnemonic_to_bytes(english(), "zoo zoo", &mut out).unwrap_err();
        assert_eq!(err.code, ErrorCode::BufferTooSmall);
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(11, 12), 17);
        assert_eq!(packed_len(11, 15), 21);
        assert_eq!(packed_len(11, 18), 25);
        assert_eq!(packed_len(11, 21), 29);
        assert_eq!(packed_len(11, 24), 33);
    }
}
