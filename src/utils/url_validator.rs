//! URL 验证模块
//!
//! Accepts absolute `http`/`https` URLs with a host, the same shape the
//! shortener has always accepted.

use url::Url;

/// 最大 URL 长度
pub const MAX_URL_LENGTH: usize = 2083;

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    TooLong(usize),
    UnsupportedScheme(String),
    MissingHost,
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::TooLong(len) => write!(
                f,
                "URL is too long: {} characters (maximum {})",
                len, MAX_URL_LENGTH
            ),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "URL scheme '{}' is not allowed. Only http and https are supported",
                scheme
            ),
            Self::MissingHost => write!(f, "URL must contain a host"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证并规范化一个绝对 URL
///
/// Returns the trimmed input on success. The original spelling is kept
/// (no trailing slash is added, case is untouched), so what the caller
/// stores is what they submitted.
pub fn validate_url(url: &str) -> Result<&str, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong(url.len()));
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert_eq!(validate_url("https://example.com"), Ok("https://example.com"));
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("https://example.com/path?query=1#frag").is_ok());
        assert!(validate_url("HTTPS://Example.com/Path").is_ok());
    }

    #[test]
    fn test_input_spelling_is_preserved() {
        assert_eq!(
            validate_url("  https://Example.com/A  "),
            Ok("https://Example.com/A")
        );
    }

    #[test]
    fn test_unsupported_schemes() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::UnsupportedScheme(s)) if s == "ftp"
        ));
        assert!(matches!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            validate_url("mailto:test@example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_relative_and_malformed() {
        assert!(matches!(
            validate_url("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(validate_url(""), Err(UrlValidationError::EmptyUrl));
        assert_eq!(validate_url("   "), Err(UrlValidationError::EmptyUrl));
    }

    #[test]
    fn test_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            validate_url(&url),
            Err(UrlValidationError::TooLong(_))
        ));
    }
}
