//! Input guard applied before a check is sent

use crate::ValidationError;

const ALLOWED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Trim the input and require an `http://` or `https://` prefix (any case).
///
/// Returns the trimmed URL that should be submitted.
pub fn validate_url(input: &str) -> Result<&str, ValidationError> {
    let url = input.trim();

    if url.is_empty() {
        return Err(ValidationError::Empty);
    }

    let has_scheme = ALLOWED_SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });

    if has_scheme {
        Ok(url)
    } else {
        Err(ValidationError::MissingScheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(validate_url(""), Err(ValidationError::Empty));
        assert_eq!(validate_url("   \t"), Err(ValidationError::Empty));
    }

    #[test]
    fn test_missing_scheme() {
        assert_eq!(validate_url("ftp://x.com"), Err(ValidationError::MissingScheme));
        assert_eq!(validate_url("x.com"), Err(ValidationError::MissingScheme));
        assert_eq!(validate_url("http:/x.com"), Err(ValidationError::MissingScheme));
        assert_eq!(validate_url("ção"), Err(ValidationError::MissingScheme));
    }

    #[test]
    fn test_accepted_urls() {
        assert_eq!(validate_url("http://x.com"), Ok("http://x.com"));
        assert_eq!(validate_url("https://x.com"), Ok("https://x.com"));
        assert_eq!(validate_url("  HTTPS://X.COM  "), Ok("HTTPS://X.COM"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "Por favor, insira uma URL para análise."
        );
        assert_eq!(
            ValidationError::MissingScheme.to_string(),
            "A URL deve começar com http:// ou https://"
        );
    }
}
