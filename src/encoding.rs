//! Character encoding recovery.
//!
//! The portal exports documents using the host operating system's default
//! text width and byte order, and transmits no encoding label. Recovery
//! is a fixed-order trial: wide-character encodings first, single-byte
//! encodings after, and a lossy tail so that arbitrary bytes still yield
//! text.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};

use crate::error::Result;

/// Strict trial order for unlabeled input.
///
/// UTF-16LE stands in for BOM-less UTF-16 (the exporting hosts are
/// little-endian); windows-1252 covers the latin-1/cp1252 single-byte
/// family.
static TRIAL_ORDER: &[&Encoding] = &[UTF_16LE, UTF_8, UTF_16BE, WINDOWS_1252];

/// Decode raw document bytes to text.
///
/// A byte-order mark, when present, selects its encoding outright.
/// Otherwise each trial encoding must decode the whole byte sequence
/// without error, and the first success wins. Bytes that survive no
/// strict trial are decoded lossily, so failure is practically
/// unreachable; the `Result` shape exists for the batch driver's failure
/// taxonomy.
#[allow(clippy::unnecessary_wraps)]
pub fn decode(raw: &[u8]) -> Result<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(raw) {
        if let Some(text) = decode_strict(encoding, &raw[bom_len..]) {
            return Ok(text);
        }
    }

    for &encoding in TRIAL_ORDER {
        if let Some(text) = decode_strict(encoding, raw) {
            return Ok(text);
        }
    }

    // windows-1252 maps every byte, so this replaces nothing in practice.
    let (text, _, _) = WINDOWS_1252.decode(raw);
    Ok(text.into_owned())
}

/// Strict UTF-8 decode, the assumed default for individually supplied
/// files.
///
/// The batch driver tries this before falling back to the full trial
/// list of [`decode`].
#[must_use]
pub fn decode_utf8(raw: &[u8]) -> Option<String> {
    decode_strict(UTF_8, raw)
}

fn decode_strict(encoding: &'static Encoding, raw: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(raw)
        .map(std::borrow::Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le_bytes(text: &str, with_bom: bool) -> Vec<u8> {
        let mut bytes = if with_bom { vec![0xFF, 0xFE] } else { Vec::new() };
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    fn utf16be_bytes(text: &str, with_bom: bool) -> Vec<u8> {
        let mut bytes = if with_bom { vec![0xFE, 0xFF] } else { Vec::new() };
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        bytes
    }

    #[test]
    fn utf16le_with_bom_decodes() {
        let bytes = utf16le_bytes("Sevk Adresi: Örnek Mah.", true);
        let text = decode(&bytes).expect("decode failed");
        assert_eq!(text, "Sevk Adresi: Örnek Mah.");
    }

    #[test]
    fn utf16be_with_bom_decodes() {
        // The BOM overrides the trial order, which would reach LE first.
        let bytes = utf16be_bytes("İrsaliye", true);
        let text = decode(&bytes).expect("decode failed");
        assert_eq!(text, "İrsaliye");
    }

    #[test]
    fn utf16le_without_bom_decodes() {
        let bytes = utf16le_bytes("Malzeme Kodu", false);
        let text = decode(&bytes).expect("decode failed");
        assert_eq!(text, "Malzeme Kodu");
    }

    #[test]
    fn utf8_bom_is_not_part_of_the_text() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("Ürünler".as_bytes());
        let text = decode(&bytes).expect("decode failed");
        assert_eq!(text, "Ürünler");
    }

    #[test]
    fn odd_length_utf8_decodes_as_utf8() {
        // Odd byte length rules out both UTF-16 trials.
        let raw = "Ürünler".as_bytes();
        assert_eq!(raw.len() % 2, 1);
        let text = decode(raw).expect("decode failed");
        assert_eq!(text, "Ürünler");
    }

    #[test]
    fn single_byte_fallback_after_wide_trials_fail() {
        // 0xDC is 'Ü' in windows-1252 and invalid as UTF-8; the odd
        // length makes both UTF-16 trials fail too.
        let raw = b"\xDCr\xFCnler";
        assert_eq!(raw.len() % 2, 1);
        let text = decode(raw).expect("decode failed");
        assert_eq!(text, "Ürünler");
    }

    #[test]
    fn decode_utf8_rejects_invalid_sequences() {
        assert!(decode_utf8(b"\xDCr\xFCn").is_none());
        assert_eq!(decode_utf8("Ürün".as_bytes()).as_deref(), Some("Ürün"));
    }

    #[test]
    fn empty_input_decodes_to_empty_text() {
        let text = decode(b"").expect("decode failed");
        assert!(text.is_empty());
    }
}
