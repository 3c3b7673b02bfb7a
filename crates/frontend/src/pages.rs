/// Subdirectory of the frontend root holding the page documents.
pub const HTML_DIR: &str = "html";

/// A fixed path served by one HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRoute {
    pub path: &'static str,
    /// File name relative to [`HTML_DIR`].
    pub file: &'static str,
}

/// Page routes, checked in order before the static file fallback.
pub const PAGE_ROUTES: &[PageRoute] = &[
    PageRoute {
        path: "/",
        file: "index.html",
    },
    PageRoute {
        path: "/creative-generation",
        file: "creative-generation.html",
    },
    PageRoute {
        path: "/script-editing",
        file: "script-editing.html",
    },
    PageRoute {
        path: "/quadrant-validation",
        file: "quadrant-validation.html",
    },
];

/// Look up the page for a request path.
///
/// Matching ignores ASCII case and one trailing slash, so
/// `/Script-Editing/` resolves to the `/script-editing` page.
pub fn find_page(path: &str) -> Option<&'static PageRoute> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    PAGE_ROUTES
        .iter()
        .find(|page| page.path.eq_ignore_ascii_case(trimmed))
}

/// True when any segment of `path` names a dotfile or dot-directory,
/// including a percent-encoded leading dot.
pub fn is_hidden_path(path: &str) -> bool {
    path.split('/').any(|segment| {
        segment.starts_with('.')
            || segment
                .get(..3)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("%2e"))
    })
}
