//! Image URL resolution. Purely string-based; reachability is left to the
//! browser's `onerror` fallback.

pub const UPLOADS_BASE: &str = "/uploads/";
pub const PROJECT_UPLOADS_BASE: &str = "/uploads/images/";

pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/300";
pub const DEFAULT_PROJECT_PHOTO_URL: &str = "https://images.unsplash.com/photo-1551650975-87deedd944c3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

fn resolve(stored: &str, base: &str, placeholder: &str) -> String {
    if stored.is_empty() {
        placeholder.to_string()
    } else if stored.starts_with("http") {
        stored.to_string()
    } else {
        format!("{base}{stored}")
    }
}

pub fn profile_image_url(stored: &str) -> String {
    resolve(stored, UPLOADS_BASE, DEFAULT_AVATAR_URL)
}

pub fn project_image_url(stored: &str) -> String {
    resolve(stored, PROJECT_UPLOADS_BASE, DEFAULT_PROJECT_PHOTO_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_passes_through() {
        assert_eq!(
            profile_image_url("https://cdn.example.com/me.png"),
            "https://cdn.example.com/me.png"
        );
        assert_eq!(project_image_url("http://x/y.jpg"), "http://x/y.jpg");
    }

    #[test]
    fn test_filename_goes_under_uploads() {
        assert_eq!(profile_image_url("me.png"), "/uploads/me.png");
        assert_eq!(project_image_url("shot.jpg"), "/uploads/images/shot.jpg");
    }

    #[test]
    fn test_empty_uses_placeholder() {
        assert_eq!(profile_image_url(""), DEFAULT_AVATAR_URL);
        assert_eq!(project_image_url(""), DEFAULT_PROJECT_PHOTO_URL);
    }
}
