//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the static handler and the
//! application fallback: response builders, MIME detection, conditional
//! request support.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_html_response,
    build_options_response, build_redirect_response,
};
