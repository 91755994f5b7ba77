//! HTTP surface.
//!
//! Five JSON routes over shared [`AppState`]:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | [`handlers::root`] |
//! | GET | `/api/hello` | [`handlers::hello`] |
//! | GET | `/test` | [`handlers::diagnostics`] |
//! | GET | `/api/projects` | [`handlers::projects`] |
//! | POST | `/api/contact` | [`handlers::submit_contact`] |
//!
//! Cross-origin requests are accepted from any origin with credentials, so
//! origin, methods and headers are mirrored from the request rather than
//! answered with a wildcard.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/test", get(handlers::diagnostics))
        .route("/api/projects", get(handlers::projects))
        .route("/api/contact", post(handlers::submit_contact))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests;
