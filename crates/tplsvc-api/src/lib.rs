//! # tplsvc-api — HTTP Surface for the Template Registry
//!
//! Thin Axum adapters over [`tplsvc_registry::Registry`]. The registry is
//! loaded once before the server starts and shared read-only by every
//! handler through [`AppState`].
//!
//! ## API Surface
//!
//! | Method | Path                 | Module                  |
//! |--------|----------------------|-------------------------|
//! | GET    | `/schema/{name}`     | [`routes::schemas`]     |
//! | GET    | `/templates`         | [`routes::templates`]   |
//! | POST   | `/render`            | [`routes::render`]      |
//! | GET    | `/openapi.json`      | [`openapi`]             |
//! | GET    | `/health/liveness`   | this module             |
//! | GET    | `/health/readiness`  | this module             |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer (any origin) → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::schemas::router())
        .merge(routes::templates::router())
        .merge(routes::render::router())
        .merge(openapi::router())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(middleware::cors::layer())
        .layer(middleware::tracing_layer::layer())
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The registry is loaded before the listener is bound, so
/// a serving process is always ready.
async fn readiness() -> &'static str {
    "ready"
}
