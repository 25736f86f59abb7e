pub mod config;
pub mod error;
pub mod state;
pub mod content;
pub mod dialog;
pub mod models;
pub mod relay;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::relay::Relay;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config) -> Router {
    let relay = Relay::new(config.webhook_url.clone());
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { config, relay });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
