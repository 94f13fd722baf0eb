//! Generated avatar images.

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/8.x/thumbs/svg";

/// Deterministic DiceBear avatar URL for `username`.
///
/// No request is made; the username is percent-encoded into the `seed`
/// query parameter.
pub fn avatar_url(username: &str) -> String {
    format!("{}?seed={}", AVATAR_BASE_URL, urlencoding::encode(username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url_plain() {
        assert_eq!(
            avatar_url("bob"),
            "https://api.dicebear.com/8.x/thumbs/svg?seed=bob"
        );
    }

    #[test]
    fn test_avatar_url_encodes_space() {
        assert_eq!(
            avatar_url("a b"),
            "https://api.dicebear.com/8.x/thumbs/svg?seed=a%20b"
        );
    }

    #[test]
    fn test_avatar_url_encodes_reserved_chars() {
        let url = avatar_url("x&seed=y");
        assert!(url.ends_with("?seed=x%26seed%3Dy"));
    }
}
