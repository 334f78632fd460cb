use std::sync::Arc;

#[macro_use]
extern crate lazy_static;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    app::env::Envy,
    relay::{client::RelayClient, errors::RelayError},
};

pub mod app;
pub mod comics;
pub mod relay;
pub mod screen;
pub mod stories;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub relay: RelayClient,
}

impl AppState {
    pub fn new(envy: Envy) -> Result<Self, RelayError> {
        let relay = RelayClient::new(envy.relay_timeout())?;

        Ok(Self {
            envy: Arc::new(envy),
            relay,
        })
    }
}

pub fn router(state: AppState) -> Router {
    let body_limit = state.envy.request_body_limit();
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // relay
        .route("/api/generate-story", post(stories::controller::generate_story))
        .route("/api/generate-comic", post(comics::controller::generate_comic))
        // layers
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
