//! REST API module using Axum
//!
//! Provides the presentation boundary of the form application:
//! - /api/v1 endpoints with a consistent envelope
//! - the single-page bilingual form (embedded at compile time)

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::ApiState;

use axum::http::{header, Method};
use axum::response::Html;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Form page HTML (embedded at compile time).
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / — serve the single-page form.
async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `SOILSENSE_CORS_ORIGINS` to a comma-separated list of allowed
/// origins for development.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("SOILSENSE_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        Err(_) => {
            // No cross-origin allowed — the form page is same-origin
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
    }
}

/// Create the complete application router with API and form page.
pub fn create_app(state: ApiState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .route("/", axum::routing::get(serve_index))
        .nest("/api/v1", routes::api_routes(state))
        .merge(routes::legacy_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
