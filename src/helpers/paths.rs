//! Mapping between site-absolute URL paths and output-directory paths.

use std::path::PathBuf;

/// Map a page URL path to the file it is written to.
///
/// Pages render as directory indexes so that URLs stay extension-free:
/// `/case-study/counterflow/` becomes `case-study/counterflow/index.html`,
/// and the site root `/` becomes `index.html`.
pub fn page_output_path(url_path: &str) -> PathBuf {
    let trimmed = url_path.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        PathBuf::from(trimmed).join("index.html")
    }
}

/// Map an asset URL path to its path under the output directory.
///
/// Assets keep their URL structure verbatim: `/img/icons/dollar.svg`
/// becomes `img/icons/dollar.svg`.
pub fn asset_output_path(url_path: &str) -> PathBuf {
    PathBuf::from(url_path.trim_start_matches('/'))
}

/// Whether the final segment of a URL path carries a file extension.
///
/// Distinguishes asset references (`/img/logo.svg`) from page routes
/// (`/case-study/counterflow/`) when scanning rendered HTML.
pub fn has_extension(url_path: &str) -> bool {
    url_path
        .rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_path_nested() {
        assert_eq!(
            page_output_path("/case-study/counterflow/"),
            PathBuf::from("case-study/counterflow/index.html")
        );
    }

    #[test]
    fn test_page_path_root() {
        assert_eq!(page_output_path("/"), PathBuf::from("index.html"));
    }

    #[test]
    fn test_asset_path_strips_leading_slash() {
        assert_eq!(
            asset_output_path("/img/pages/case-study/icons/dollar.svg"),
            PathBuf::from("img/pages/case-study/icons/dollar.svg")
        );
    }

    #[test]
    fn test_extension_detection() {
        assert!(has_extension("/css/theme.css"));
        assert!(has_extension("/img/logo.svg"));
        assert!(!has_extension("/case-study/counterflow/"));
        assert!(!has_extension("/"));
    }
}
