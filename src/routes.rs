// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    config::MAX_JSON_BODY_BYTES,
    handlers::{certificate, linkedin},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Nests the OAuth and API sub-routers.
/// * Serves the certificate store directory statically under `/certificates`.
/// * Applies global middleware (Trace, CORS, body size limit).
/// * Injects global state (config, HTTP client, certificate store).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let linkedin_routes = Router::new()
        .route("/login", get(linkedin::login))
        .route("/callback", get(linkedin::callback));

    let api_routes = Router::new()
        .route("/download", get(certificate::download))
        .route("/linkedin/share", post(linkedin::share));

    // Anything written into the store is publicly downloadable by file name.
    let certificates_dir = state.certificates.dir().to_path_buf();

    Router::new()
        .nest("/linkedin", linkedin_routes)
        .nest("/api", api_routes)
        .nest_service("/certificates", ServeDir::new(certificates_dir))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_JSON_BODY_BYTES))
        .with_state(state)
}
