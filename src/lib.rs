//! Front-controller development server.
//!
//! Resolves each request against a document root: canonical redirects for
//! `.html` URIs, pre-rendered page fallback, plain static serving, and a
//! final delegation to the bootstrapped application's welcome page.

pub mod app;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
