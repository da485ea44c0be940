//! Input validation for candidate URLs.
//!
//! Validation is deliberately minimal: the string is trimmed, then checked to
//! be an absolute http(s) URL with a non-empty host. The accepted string is
//! passed through verbatim — no punycode, no trailing-slash policy, no case
//! folding. Canonicalization beyond whitespace trimming belongs to the
//! service, not the client.

use url::Url;

use crate::error::ShortenError;

/// A validated, whitespace-trimmed URL accepted for submission.
///
/// Can only be obtained through [`validate`], so holding one is proof the
/// string passed the scheme and host checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates a raw input string as a shortenable URL.
///
/// # Rules
///
/// 1. Leading and trailing whitespace is trimmed.
/// 2. The trimmed string must parse as an absolute URL.
/// 3. The scheme must be `http` or `https` (case-insensitive on input; the
///    parser reports schemes lowercased).
/// 4. The host component must be present and non-empty.
///
/// The returned [`CanonicalUrl`] carries the trimmed input unchanged, so the
/// function is idempotent over its own output.
///
/// # Errors
///
/// Returns [`ShortenError::InvalidInput`] for anything failing the rules.
pub fn validate(raw: &str) -> Result<CanonicalUrl, ShortenError> {
    let trimmed = raw.trim();

    let parsed = Url::parse(trimmed).map_err(|_| ShortenError::InvalidInput)?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ShortenError::InvalidInput);
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(CanonicalUrl(trimmed.to_string())),
        _ => Err(ShortenError::InvalidInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_https() {
        let result = validate("https://example.com/page");
        assert_eq!(result.unwrap().as_str(), "https://example.com/page");
    }

    #[test]
    fn test_accepts_plain_http() {
        assert!(validate("http://example.com").is_ok());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let result = validate("   https://example.com/page  ");
        assert_eq!(result.unwrap().as_str(), "https://example.com/page");
    }

    #[test]
    fn test_trims_newlines_and_tabs() {
        let result = validate("\n\thttps://example.com\t\n");
        assert_eq!(result.unwrap().as_str(), "https://example.com");
    }

    #[test]
    fn test_scheme_check_is_case_insensitive() {
        assert!(validate("HTTPS://example.com").is_ok());
        assert!(validate("HtTp://example.com").is_ok());
    }

    #[test]
    fn test_rejects_ftp_scheme() {
        assert_eq!(validate("ftp://example.com"), Err(ShortenError::InvalidInput));
    }

    #[test]
    fn test_rejects_javascript_scheme() {
        assert_eq!(
            validate("javascript:alert(1)"),
            Err(ShortenError::InvalidInput)
        );
    }

    #[test]
    fn test_rejects_relative_url() {
        assert_eq!(validate("example.com/page"), Err(ShortenError::InvalidInput));
        assert_eq!(validate("/just/a/path"), Err(ShortenError::InvalidInput));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert_eq!(validate("http://"), Err(ShortenError::InvalidInput));
        assert_eq!(validate("https:///path"), Err(ShortenError::InvalidInput));
    }

    #[test]
    fn test_rejects_empty_and_blank_input() {
        assert_eq!(validate(""), Err(ShortenError::InvalidInput));
        assert_eq!(validate("   "), Err(ShortenError::InvalidInput));
    }

    #[test]
    fn test_preserves_query_and_fragment() {
        let result = validate("https://example.com/a?b=c#frag");
        assert_eq!(result.unwrap().as_str(), "https://example.com/a?b=c#frag");
    }

    #[test]
    fn test_idempotent_over_own_output() {
        let once = validate("  https://example.com/page ").unwrap();
        let twice = validate(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }
}
