//! Routing module
//!
//! Front-controller resolution: decides per request whether to redirect,
//! serve a pre-rendered page, defer to the static handler, or hand the
//! request to the application.

mod resolve;

pub use resolve::{resolve_request, RouteDecision, INDEX_FILE, NOSTATIC_SENTINEL};
