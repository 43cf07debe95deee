//! # Cross-Origin Resource Sharing
//!
//! Browser clients on any origin may call every endpoint.

use tower_http::cors::{Any, CorsLayer};

/// Build a `CorsLayer` that allows any origin, method, and header.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
