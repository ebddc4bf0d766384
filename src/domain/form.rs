//! Form fields and the text conventions of the form controls.

use regex::Regex;
use std::sync::LazyLock;

/// Leading `http://` or `https://` removed from a short link's visible text.
static SCHEME_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("scheme prefix pattern is valid"));

pub const SUBMIT_LABEL: &str = "Shorten URL";
pub const SUBMIT_BUSY_LABEL: &str = "Shortening...";

pub const COPY_LABEL: &str = "Copy";
pub const COPY_DONE_LABEL: &str = "Copied!";
pub const COPY_FAILED_LABEL: &str = "Failed";
pub const COPY_SUCCESS_BACKGROUND: &str = "#03dac6";

/// Raw text of the three form inputs.
///
/// The default value is the reset state: every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub url: String,
    pub custom_short: String,
    pub expiry: String,
}

impl FormFields {
    pub fn new(
        url: impl Into<String>,
        custom_short: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            custom_short: custom_short.into(),
            expiry: expiry.into(),
        }
    }

    pub fn parsed_expiry(&self) -> Option<i64> {
        parse_expiry(&self.expiry)
    }
}

/// Parses the expiry field as a base-10 integer prefix.
///
/// Leading whitespace and a single sign are accepted, then as many digits as
/// follow; anything after the digits is ignored. Returns `None` when no digit
/// is found or the value does not fit in `i64`.
///
/// # Examples
///
/// ```
/// use shortener_form::domain::form::parse_expiry;
///
/// assert_eq!(parse_expiry("24"), Some(24));
/// assert_eq!(parse_expiry("  12h"), Some(12));
/// assert_eq!(parse_expiry(""), None);
/// ```
pub fn parse_expiry(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Returns `url` without a leading `http://` or `https://`.
pub fn strip_scheme(url: &str) -> &str {
    match SCHEME_PREFIX_REGEX.find(url) {
        Some(prefix) => &url[prefix.end()..],
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expiry_plain_integer() {
        assert_eq!(parse_expiry("0"), Some(0));
        assert_eq!(parse_expiry("48"), Some(48));
        assert_eq!(parse_expiry("-3"), Some(-3));
        assert_eq!(parse_expiry("+7"), Some(7));
    }

    #[test]
    fn test_parse_expiry_ignores_trailing_text() {
        assert_eq!(parse_expiry("12 hours"), Some(12));
        assert_eq!(parse_expiry("3.9"), Some(3));
        assert_eq!(parse_expiry("\t 5"), Some(5));
    }

    #[test]
    fn test_parse_expiry_not_a_number() {
        assert_eq!(parse_expiry(""), None);
        assert_eq!(parse_expiry("abc"), None);
        assert_eq!(parse_expiry("-"), None);
        assert_eq!(parse_expiry("- 4"), None);
        assert_eq!(parse_expiry("99999999999999999999"), None);
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://short.ly/abc"), "short.ly/abc");
        assert_eq!(strip_scheme("http://short.ly/abc"), "short.ly/abc");
        assert_eq!(strip_scheme("short.ly/abc"), "short.ly/abc");
        assert_eq!(strip_scheme("ftp://short.ly/abc"), "ftp://short.ly/abc");
    }

    #[test]
    fn test_strip_scheme_only_removes_leading_prefix() {
        assert_eq!(
            strip_scheme("https://short.ly/https://x"),
            "short.ly/https://x"
        );
        assert_eq!(strip_scheme("HTTPS://short.ly"), "HTTPS://short.ly");
    }

    #[test]
    fn test_default_fields_are_empty() {
        let fields = FormFields::default();
        assert!(fields.url.is_empty());
        assert!(fields.custom_short.is_empty());
        assert!(fields.expiry.is_empty());
        assert_eq!(fields.parsed_expiry(), None);
    }
}
