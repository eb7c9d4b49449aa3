//! File extension from a URL path.

/// Returns the suffix (with its dot) of the last path segment of `url`.
///
/// Leading dots of the segment do not start an extension (`/.hidden` has
/// none), query and fragment are ignored. `None` when the URL does not parse
/// or the last segment has no suffix.
pub fn extension_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next().unwrap_or("");
    let stem_start = segment.len() - segment.trim_start_matches('.').len();
    let dot = segment[stem_start..].rfind('.')?;
    Some(segment[stem_start + dot..].to_string())
}

/// [`extension_from_url`] with a fallback.
pub fn extension_or(url: &str, default_ext: &str) -> String {
    extension_from_url(url).unwrap_or_else(|| default_ext.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_suffix_of_last_segment() {
        let ext = |u: &str| extension_from_url(u);
        assert_eq!(
            ext("https://cdn.example.com/a/b/photo.png").as_deref(),
            Some(".png")
        );
        assert_eq!(
            ext("https://example.com/archive.tar.gz").as_deref(),
            Some(".gz")
        );
        assert_eq!(ext("https://example.com/v1.2/photo"), None);
    }

    #[test]
    fn query_and_fragment_ignored() {
        assert_eq!(
            extension_from_url("https://example.com/img.webp?w=200&fmt=.jpg#x.gif").as_deref(),
            Some(".webp")
        );
        assert_eq!(extension_from_url("https://example.com/img?name=a.png"), None);
    }

    #[test]
    fn root_hidden_and_trailing_dot() {
        assert_eq!(extension_from_url("https://example.com"), None);
        assert_eq!(extension_from_url("https://example.com/"), None);
        assert_eq!(extension_from_url("https://example.com/dir/"), None);
        assert_eq!(extension_from_url("https://example.com/.hidden"), None);
        assert_eq!(extension_from_url("https://example.com/..x.jpeg").as_deref(), Some(".jpeg"));
        assert_eq!(extension_from_url("https://example.com/file.").as_deref(), Some("."));
    }

    #[test]
    fn unparseable_falls_back() {
        assert_eq!(extension_from_url("http//broken"), None);
        assert_eq!(extension_or("http//broken.png", ".jpg"), ".jpg");
        assert_eq!(extension_or("https://x.com/a.PNG", ".jpg"), ".PNG");
    }
}
