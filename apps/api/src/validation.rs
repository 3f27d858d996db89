//! Field rules shared by the resource handlers.

use reqwest::Url;

/// An absolute http(s) URL whose host has at least one dot.
pub fn is_web_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match Url::parse(value) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| {
                    h.contains('.') && !h.starts_with('.') && !h.ends_with('.')
                })
        }
        Err(_) => false,
    }
}

/// `local@domain.tld` with no whitespace.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Pushes a message when `value` (trimmed) is outside `min..=max` characters.
pub fn check_length(errors: &mut Vec<String>, field: &str, value: &str, min: usize, max: usize) {
    let len = value.trim().chars().count();
    if len < min || len > max {
        errors.push(format!("{field} must be between {min} and {max} characters"));
    }
}

/// Turns collected messages into one validation error.
pub fn finish(errors: Vec<String>) -> Result<(), crate::errors::AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::errors::AppError::Validation(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_urls() {
        assert!(is_web_url("https://github.com/ada"));
        assert!(is_web_url("http://www.linkedin.com/in/ada?x=1"));
        assert!(!is_web_url("ftp://github.com/ada"));
        assert!(!is_web_url("github.com/ada"));
        assert!(!is_web_url("https://localhost/ada"));
        assert!(!is_web_url("https://git hub.com"));
        assert!(!is_web_url(""));
    }

    #[test]
    fn test_emails() {
        assert!(is_email("ada@example.com"));
        assert!(!is_email("ada@example"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("ada@@example.com"));
        assert!(!is_email("ada @example.com"));
    }

    #[test]
    fn test_length_counts_characters() {
        let mut errors = Vec::new();
        check_length(&mut errors, "title", "Été", 3, 200);
        assert!(errors.is_empty());
        check_length(&mut errors, "title", "  ab  ", 3, 200);
        assert_eq!(errors.len(), 1);
        assert!(finish(errors).is_err());
    }
}
