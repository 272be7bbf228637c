//! # Whitespace Normalization: Canonical License Text
//!
//! This module defines `NormalizedText`, the sole input accepted by
//! [`LicenseDigest::compute`](crate::LicenseDigest::compute).
//!
//! ## Canonical Form
//!
//! 1. **Trim**: leading and trailing characters are removed while they are
//!    whitespace or ASCII control characters (`<= U+0020`).
//! 2. **Collapse**: every run of one or more whitespace characters becomes a
//!    single U+0020 space.
//! 3. **Copy**: every other character passes through unchanged and in order.
//!
//! "Whitespace" is [`is_license_whitespace`]. The set is frozen: changing it
//! changes digests, and digests are persisted and compared across stores.

use std::borrow::Cow;

/// Returns `true` if `c` separates words in license text.
///
/// The Unicode space, line and paragraph separators, minus the no-break
/// spaces (U+00A0, U+2007, U+202F), plus the ASCII layout controls
/// U+0009..=U+000D and the information separators U+001C..=U+001F.
pub fn is_license_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{001C}'..='\u{001F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Characters stripped from either end before collapsing.
fn is_trimmable(c: char) -> bool {
    c <= ' ' || is_license_whitespace(c)
}

/// License text in canonical whitespace form.
///
/// # Invariants
///
/// - No leading or trailing whitespace or ASCII control characters.
/// - Whitespace only ever appears as a single U+0020 between two
///   non-whitespace characters.
///
/// The inner value is private; `NormalizedText::new()` is the only
/// constructor. Already-canonical input is borrowed, not copied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText<'a>(Cow<'a, str>);

impl<'a> NormalizedText<'a> {
    /// Normalize `text` into canonical form.
    pub fn new(text: &'a str) -> Self {
        let trimmed = text.trim_matches(is_trimmable);
        if is_collapsed(trimmed) {
            return Self(Cow::Borrowed(trimmed));
        }

        let mut out = String::with_capacity(trimmed.len());
        let mut in_run = false;
        for c in trimmed.chars() {
            if is_license_whitespace(c) {
                if !in_run {
                    out.push(' ');
                    in_run = true;
                }
            } else {
                out.push(c);
                in_run = false;
            }
        }
        Self(Cow::Owned(out))
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes of the canonical text, the exact digest input.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Whether normalization had to rewrite the input.
    pub fn is_rewritten(&self) -> bool {
        matches!(self.0, Cow::Owned(_))
    }

    /// Take ownership of the canonical text.
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl AsRef<str> for NormalizedText<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for NormalizedText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replace every whitespace run in `text` with one space and trim the ends.
///
/// Convenience wrapper around [`NormalizedText::new`] for callers that want
/// an owned `String`.
pub fn normalize(text: &str) -> String {
    NormalizedText::new(text).into_string()
}

/// True when an already-trimmed string needs no collapsing.
fn is_collapsed(s: &str) -> bool {
    let mut prev_ws = false;
    for c in s.chars() {
        let ws = is_license_whitespace(c);
        if ws && (c != ' ' || prev_ws) {
            return false;
        }
        prev_ws = ws;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_interior_runs() {
        assert_eq!(normalize("MIT   License"), "MIT License");
        assert_eq!(normalize("a \t\r\n b"), "a b");
    }

    #[test]
    fn test_trims_both_ends() {
        assert_eq!(normalize("  MIT   License  "), "MIT License");
        assert_eq!(normalize("\n\tApache\n"), "Apache");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\t\n\r\u{000B}\u{000C}"), "");
        assert_eq!(normalize("\u{3000}\u{2003}"), "");
    }

    #[test]
    fn test_single_tab_becomes_space() {
        assert_eq!(normalize("a\tb"), "a b");
        assert_eq!(normalize("a\u{2028}b"), "a b");
    }

    #[test]
    fn test_no_break_spaces_are_content() {
        assert_eq!(normalize("a\u{00A0}b"), "a\u{00A0}b");
        assert_eq!(normalize("a \u{202F} b"), "a \u{202F} b");
        assert_eq!(normalize("\u{2007}x\u{2007}"), "\u{2007}x\u{2007}");
    }

    #[test]
    fn test_edge_control_characters_trimmed() {
        assert_eq!(normalize("\u{0000}\u{0001}text\u{0007}"), "text");
    }

    #[test]
    fn test_interior_control_characters_preserved() {
        assert_eq!(normalize("a\u{0001}b"), "a\u{0001}b");
        assert_eq!(normalize("a \u{0001} b"), "a \u{0001} b");
    }

    #[test]
    fn test_separator_controls_are_whitespace() {
        assert_eq!(normalize("a\u{001C}\u{001F}b"), "a b");
    }

    #[test]
    fn test_non_ascii_content_preserved() {
        assert_eq!(normalize("  Lizenz  für   Ökonomen "), "Lizenz für Ökonomen");
    }

    #[test]
    fn test_canonical_input_is_borrowed() {
        let text = NormalizedText::new("already canonical");
        assert!(!text.is_rewritten());
        assert_eq!(text.as_str(), "already canonical");

        let text = NormalizedText::new("  padded");
        assert!(!text.is_rewritten());
        assert_eq!(text.as_str(), "padded");

        let text = NormalizedText::new("two  spaces");
        assert!(text.is_rewritten());
        assert_eq!(text.as_str(), "two spaces");
    }

    #[test]
    fn test_as_bytes_is_utf8_of_text() {
        let text = NormalizedText::new(" é ");
        assert_eq!(text.as_bytes(), "é".as_bytes());
    }
}
