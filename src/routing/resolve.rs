//! Front-controller resolution module
//!
//! Pure request resolution against the document root. Every branch either
//! yields a decision or falls through silently to the next strategy; the
//! final fallback is always the application.

use std::path::{Path, PathBuf};

/// Presence of this file at the document root disables pre-rendered page
/// serving (redirects and exact file hits are unaffected).
pub const NOSTATIC_SENTINEL: &str = ".nostatic";

/// Index file looked up for directory requests
pub const INDEX_FILE: &str = "index.html";

const HTML_EXT: &str = ".html";

/// Outcome of resolving a request path against the document root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Permanent redirect to the extensionless form of a `.html` URI
    Redirect(String),
    /// Pre-rendered fallback page, served verbatim as HTML
    Page(PathBuf),
    /// Exact file hit: the resolver stays silent and the default static
    /// handler serves the file
    StaticFile(PathBuf),
    /// Nothing matched: hand the request to the application
    Application,
}

/// Resolve a request path against the document root.
///
/// Strategies are tried in order:
/// 1. `.html` URIs naming an existing page redirect to the extensionless form
/// 2. pre-rendered page lookup (`<path>.html`, or `<dir>/index.html` for
///    directories), unless the sentinel disables it
/// 3. exact file hits are deferred to the static handler
/// 4. everything else is delegated to the application
pub fn resolve_request(document_root: &Path, request_path: &str) -> RouteDecision {
    let mapped = map_onto_root(document_root, request_path);

    if request_path.ends_with(HTML_EXT) && mapped.is_file() {
        let clean = &request_path[..request_path.len() - HTML_EXT.len()];
        return RouteDecision::Redirect(clean.to_string());
    }

    if !document_root.join(NOSTATIC_SENTINEL).is_file() {
        if mapped.is_dir() {
            let index = mapped.join(INDEX_FILE);
            if index.is_file() {
                return RouteDecision::Page(index);
            }
        } else {
            let page = append_html(&mapped);
            if page.is_file() {
                return RouteDecision::Page(page);
            }
        }
    }

    if mapped.is_file() {
        return RouteDecision::StaticFile(mapped);
    }

    RouteDecision::Application
}

/// Map a request path onto the document root.
///
/// Strips the leading slash and any `..` sequences; the static handler
/// additionally verifies containment via canonicalisation before reading.
fn map_onto_root(document_root: &Path, request_path: &str) -> PathBuf {
    let clean = request_path.trim_start_matches('/').replace("..", "");
    // Stripping ".." can leave a leading slash, and joining an absolute
    // path would replace the document root outright
    document_root.join(clean.trim_start_matches('/'))
}

/// Append the `.html` extension without replacing an existing one
fn append_html(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(HTML_EXT);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn docroot() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    fn touch(root: &TempDir, relative: &str, content: &str) {
        let path = root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn html_uri_with_existing_page_redirects_to_extensionless_form() {
        let root = docroot();
        touch(&root, "about.html", "<h1>About</h1>");

        let decision = resolve_request(root.path(), "/about.html");
        assert_eq!(decision, RouteDecision::Redirect("/about".to_string()));
    }

    #[test]
    fn html_uri_without_file_falls_through() {
        let root = docroot();

        let decision = resolve_request(root.path(), "/missing.html");
        assert_eq!(decision, RouteDecision::Application);
    }

    #[test]
    fn extensionless_uri_serves_prerendered_page() {
        let root = docroot();
        touch(&root, "about.html", "<h1>About</h1>");

        let decision = resolve_request(root.path(), "/about");
        assert_eq!(
            decision,
            RouteDecision::Page(root.path().join("about.html"))
        );
    }

    #[test]
    fn directory_uri_serves_its_index_file() {
        let root = docroot();
        touch(&root, "docs/index.html", "<h1>Docs</h1>");

        let decision = resolve_request(root.path(), "/docs");
        assert_eq!(
            decision,
            RouteDecision::Page(root.path().join("docs").join("index.html"))
        );
    }

    #[test]
    fn directory_uri_without_index_delegates() {
        let root = docroot();
        fs::create_dir_all(root.path().join("empty")).unwrap();

        let decision = resolve_request(root.path(), "/empty");
        assert_eq!(decision, RouteDecision::Application);
    }

    #[test]
    fn sentinel_skips_page_fallback_entirely() {
        let root = docroot();
        touch(&root, NOSTATIC_SENTINEL, "");
        touch(&root, "about.html", "<h1>About</h1>");
        touch(&root, "docs/index.html", "<h1>Docs</h1>");

        assert_eq!(
            resolve_request(root.path(), "/about"),
            RouteDecision::Application
        );
        assert_eq!(
            resolve_request(root.path(), "/docs"),
            RouteDecision::Application
        );
    }

    #[test]
    fn sentinel_leaves_redirect_and_exact_hits_alone() {
        let root = docroot();
        touch(&root, NOSTATIC_SENTINEL, "");
        touch(&root, "about.html", "<h1>About</h1>");
        touch(&root, "style.css", "body {}");

        assert_eq!(
            resolve_request(root.path(), "/about.html"),
            RouteDecision::Redirect("/about".to_string())
        );
        assert_eq!(
            resolve_request(root.path(), "/style.css"),
            RouteDecision::StaticFile(root.path().join("style.css"))
        );
    }

    #[test]
    fn exact_file_hit_defers_to_static_handler() {
        let root = docroot();
        touch(&root, "style.css", "body {}");

        let decision = resolve_request(root.path(), "/style.css");
        assert_eq!(
            decision,
            RouteDecision::StaticFile(root.path().join("style.css"))
        );
    }

    #[test]
    fn unmatched_path_delegates_to_application() {
        let root = docroot();

        let decision = resolve_request(root.path(), "/no/such/thing");
        assert_eq!(decision, RouteDecision::Application);
    }

    #[test]
    fn parent_traversal_is_stripped_before_mapping() {
        let root = docroot();
        touch(&root, "secret.css", "body {}");

        // "/../secret.css" must not escape the document root
        let decision = resolve_request(root.path(), "/../secret.css");
        assert_eq!(
            decision,
            RouteDecision::StaticFile(root.path().join("secret.css"))
        );
    }
}
