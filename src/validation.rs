use url::Url;

/// Syntactic URL check: scheme plus host, nothing else. Reachability and
/// site support are yt-dlp's problem.
pub fn is_valid_url(text: &str) -> bool {
    Url::parse(text).map(|u| u.has_host()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(is_valid_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_valid_url("http://youtu.be/dQw4w9WgXcQ"));
        assert!(is_valid_url("https://vimeo.com/12345"));
        assert!(is_valid_url("https://example.com/not-a-video"));
    }

    #[test]
    fn rejects_plain_text() {
        assert!(!is_valid_url("hello"));
        assert!(!is_valid_url("download this video please"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn rejects_urls_without_scheme() {
        assert!(!is_valid_url("www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!is_valid_url("example.com"));
    }

    #[test]
    fn rejects_hostless_schemes() {
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("data:text/plain,hi"));
    }
}
