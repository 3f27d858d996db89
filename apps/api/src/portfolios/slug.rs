use chrono::Utc;

const FALLBACK_SLUG: &str = "portfolio";

/// Lowercases, keeps ASCII word characters, whitespace and hyphens, collapses
/// every run of whitespace, underscores or hyphens into one hyphen, and trims
/// hyphens from both ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// `slug(title)-<epoch millis>`.
pub fn public_url_for(title: &str) -> String {
    format!("{}-{}", slugify(title), Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Ada Lovelace Portfolio"), "ada-lovelace-portfolio");
        assert_eq!(slugify("  --Hello,   World!__ "), "hello-world");
        assert_eq!(slugify("snake_case - name"), "snake-case-name");
        assert_eq!(slugify("Café Déjà"), "caf-dj");
    }

    #[test]
    fn test_dropped_chars_do_not_split_words() {
        assert_eq!(slugify("C++ & Rust"), "c-rust");
        assert_eq!(slugify("o'neil"), "oneil");
    }

    #[test]
    fn test_empty_slug_falls_back() {
        assert_eq!(slugify(""), "portfolio");
        assert_eq!(slugify("!!! ---"), "portfolio");
    }

    #[test]
    fn test_public_url_shape() {
        let url = public_url_for("My Site");
        let suffix = url.strip_prefix("my-site-").unwrap();
        assert!(suffix.parse::<i64>().is_ok());
    }
}
