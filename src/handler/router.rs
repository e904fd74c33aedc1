//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, dispatch of
//! the front-controller decision, and access logging.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};

use crate::app::welcome;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{self, RouteDecision};

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let access_log = state.cached_access_log.load(Ordering::Relaxed);

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        method.to_string(),
        path.to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = format_version(req.version());
    entry.referer = header_value(&req, "referer");
    entry.user_agent = header_value(&req, "user-agent");

    let response = match check_http_method(method, state.config.http.enable_cors) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path,
                is_head: *method == Method::HEAD,
                if_none_match: header_value(&req, "if-none-match"),
            };
            dispatch(&ctx, &state).await
        }
    };

    if access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = body_len(&response);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Dispatch the front-controller decision
///
/// Resolution order mirrors the resolver: redirect, pre-rendered page,
/// exact file, and finally the application welcome page.
async fn dispatch(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    match routing::resolve_request(&state.document_root, ctx.path) {
        RouteDecision::Redirect(location) => http::build_redirect_response(&location),
        RouteDecision::Page(page) => static_files::serve_page(ctx, &page).await,
        RouteDecision::StaticFile(file) => {
            static_files::serve_file(ctx, &state.document_root, &file).await
        }
        RouteDecision::Application => serve_welcome(ctx, state).await,
    }
}

/// Final fallback: the application's welcome page
async fn serve_welcome(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    {
        let cache = state.welcome_cache.read().await;
        if let Some(html) = cache.as_ref() {
            return http::build_html_response(html.clone(), ctx.is_head);
        }
    }

    let html = welcome::render(&state.app).await;
    {
        let mut cache = state.welcome_cache.write().await;
        *cache = Some(html.clone());
    }

    http::build_html_response(html, ctx.is_head)
}

/// Extract a header as an owned string, skipping non-UTF-8 values
fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// HTTP version as it appears in the access log request line
fn format_version(version: Version) -> String {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
    .to_string()
}

/// Body size of an outgoing response
fn body_len(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body;
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(0)
}
