//! Router setup with all routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression,
//! and all page and API handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use domojca_core::{DomOjcaConfig, DomOjcaError};

use crate::handlers;
use crate::state::AppState;

/// Request bodies are small JSON documents; chat text is capped well below this.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Same-site pages need no CORS; allow the local origins for development.
    let port = state.config.general.port;
    let origins: Vec<HeaderValue> = ["127.0.0.1", "localhost"]
        .iter()
        .filter_map(|host| format!("http://{}:{}", host, port).parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let pages = Router::new()
        .route("/", get(handlers::index))
        .route("/{page}", get(handlers::page))
        .route("/assets/site.css", get(handlers::site_css))
        .route("/assets/site.js", get(handlers::site_js))
        .route("/health", get(handlers::health));

    let api = Router::new()
        .route("/content/{lang}", get(handlers::content))
        .route("/translations/{lang}", get(handlers::translation_bundle))
        .route("/chat/sessions", post(handlers::create_session))
        .route(
            "/chat/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route(
            "/chat/sessions/{id}/language",
            put(handlers::change_language),
        )
        .route(
            "/chat/sessions/{id}/messages",
            post(handlers::send_message),
        )
        .route(
            "/chat/sessions/{id}/commands",
            post(handlers::send_command),
        )
        .route("/contact", post(handlers::contact))
        .route("/theme/toggle", post(handlers::toggle_theme));

    pages
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind to the configured address and serve until the server fails.
pub async fn start_server(config: &DomOjcaConfig, state: AppState) -> Result<(), DomOjcaError> {
    let addr = format!("{}:{}", config.general.bind_address, config.general.port);

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DomOjcaError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, "HTTP server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| DomOjcaError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
