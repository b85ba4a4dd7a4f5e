//! Compiled regex patterns for raw-text field recovery.
//!
//! All patterns are compiled once at first use using `LazyLock`. The
//! ship-to address block is recovered from raw document text rather than
//! the parsed tree: the portal renders it as loose inline markup between
//! a text label and the closing tag of its holder, with no element of
//! its own to select.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Captures the ship-to address block: everything between the
/// "Sevk Adresi:" label and the closing `</span>` of its holder.
pub static SHIP_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Sevk Adresi:(.*?)</span>").expect("SHIP_ADDRESS regex"));

/// Captures the phone number embedded in an address block.
pub static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Tel:(\d+)").expect("PHONE regex"));

/// Matches the phone marker (with any leading whitespace) for removal
/// from the address text.
pub static PHONE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*Tel:\d+").expect("PHONE_MARKER regex"));

/// Matches a maximal digit run; the first one in a quantity cell is the
/// quantity.
pub static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("DIGIT_RUN regex"));

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_address_captures_span_content() {
        let html = r#"<span>Sevk Adresi:Example Mah. No:5<br>Tel:5551234567</span>"#;
        let captured = SHIP_ADDRESS
            .captures(html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        assert_eq!(captured, Some("Example Mah. No:5<br>Tel:5551234567"));
    }

    #[test]
    fn ship_address_stops_at_first_closing_tag() {
        let html = "Sevk Adresi:first</span> trailing</span>";
        let captured = SHIP_ADDRESS
            .captures(html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        assert_eq!(captured, Some("first"));
    }

    #[test]
    fn phone_captures_digits_only() {
        let captures = PHONE.captures("Adres Tel:5321112233 devam");
        let digits = captures.and_then(|c| c.get(1)).map(|m| m.as_str());
        assert_eq!(digits, Some("5321112233"));
        assert!(!PHONE.is_match("Tel: 532"));
    }

    #[test]
    fn phone_marker_strips_with_leading_whitespace() {
        let cleaned = PHONE_MARKER.replace_all("Example Mah. No:5  Tel:5551234567", "");
        assert_eq!(cleaned, "Example Mah. No:5");
    }

    #[test]
    fn digit_run_finds_first_maximal_run() {
        assert_eq!(DIGIT_RUN.find("12 adet").map(|m| m.as_str()), Some("12"));
        assert_eq!(DIGIT_RUN.find("ab34cd56").map(|m| m.as_str()), Some("34"));
        assert!(DIGIT_RUN.find("adet").is_none());
    }

    #[test]
    fn whitespace_normalize_collapses_runs() {
        let result = WHITESPACE_NORMALIZE.replace_all("a \t b\n\nc", " ");
        assert_eq!(result, "a b c");
    }
}
