//! Character encoding detection for saved HTML snapshots.
//!
//! Snapshots written by browsers are usually UTF-8, but pages saved from
//! older tooling may carry a legacy charset. The declared encoding is taken
//! from a byte-order mark, then from a `<meta>` declaration near the top of
//! the file, and defaults to UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes scanned for a `<meta>` charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Matches `<meta charset="...">` and the `http-equiv` form
/// `content="text/html; charset=..."`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?\bcharset\s*=\s*["']?([A-Za-z0-9._:-]+)"#)
        .expect("META_CHARSET regex")
});

/// Charset label declared in the first bytes of a document, if any.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect the encoding of HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to UTF-8.
///
/// Invalid sequences become U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use rs_mdcopy::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("replaced invalid {} sequences while decoding", used.name());
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{SHIFT_JIS, UTF_16LE, WINDOWS_1252};

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(detect_encoding(b"<p>plain</p>"), UTF_8);
    }

    #[test]
    fn test_meta_charset() {
        let html = br#"<html><head><meta charset="Shift_JIS"></head></html>"#;
        assert_eq!(declared_charset(html).as_deref(), Some("Shift_JIS"));
        assert_eq!(detect_encoding(html), SHIFT_JIS);
    }

    #[test]
    fn test_http_equiv_charset() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=iso-8859-1">"#;
        // encoding_rs maps latin1 labels to windows-1252, as browsers do
        assert_eq!(detect_encoding(html), WINDOWS_1252);
    }

    #[test]
    fn test_bom_wins_over_meta() {
        let mut html = vec![0xFF, 0xFE];
        html.extend_from_slice(b"<\0m\0");
        assert_eq!(detect_encoding(&html), UTF_16LE);
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let html = br#"<meta charset="not-a-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn test_declaration_past_limit_is_ignored() {
        let mut html = vec![b' '; SNIFF_LIMIT];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert!(declared_charset(&html).is_none());
    }

    #[test]
    fn test_transcode_windows_1252() {
        let html = b"<meta charset=\"windows-1252\"><p>na\xEFve</p>";
        assert!(transcode_to_utf8(html).contains("naïve"));
    }

    #[test]
    fn test_transcode_invalid_utf8_is_lossy() {
        let html = b"<p>bad \xFF byte</p>";
        assert!(transcode_to_utf8(html).contains('\u{FFFD}'));
    }
}
