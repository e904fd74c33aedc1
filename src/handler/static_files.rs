//! Static file serving module
//!
//! Serves pre-rendered pages verbatim and document-root assets with MIME
//! detection, `ETag` support, and containment checks.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;

/// Serve a pre-rendered fallback page verbatim
pub async fn serve_page(ctx: &RequestContext<'_>, page: &Path) -> Response<Full<Bytes>> {
    match fs::read(page).await {
        Ok(content) => build_file_response(
            &content,
            "text/html; charset=utf-8",
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        Err(e) => {
            logger::log_error(&format!("Failed to read page '{}': {e}", page.display()));
            http::build_404_response()
        }
    }
}

/// Serve an exact file hit from the document root.
///
/// The resolver has already declined the request; containment in the
/// document root is re-checked via canonicalisation before reading.
pub async fn serve_file(
    ctx: &RequestContext<'_>,
    document_root: &Path,
    file: &Path,
) -> Response<Full<Bytes>> {
    match load_from_root(document_root, file).await {
        Some((content, content_type)) => build_file_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        None => http::build_404_response(),
    }
}

/// Load a file, verifying it stays inside the document root
async fn load_from_root(document_root: &Path, file: &Path) -> Option<(Vec<u8>, &'static str)> {
    let root = match document_root.canonicalize() {
        Ok(root) => root,
        Err(e) => {
            logger::log_warning(&format!(
                "Document root not found or inaccessible '{}': {e}",
                document_root.display()
            ));
            return None;
        }
    };

    let Ok(canonical) = file.canonicalize() else {
        return None;
    };
    if !canonical.starts_with(&root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {}",
            canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&canonical).await {
        Ok(content) => content,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                canonical.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type(canonical.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Build a 200/304 response with `ETag` support
fn build_file_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::etag(data);

    if cache::etag_matches(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let body = Bytes::from(data.to_owned());
    http::response::build_cached_response(body, content_type, &etag, is_head)
}
