#![allow(dead_code)]

use std::{net::TcpListener, time::Duration};

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use comic_api::{app::env::Envy, router, AppState};
use serde_json::Value;
use tower::ServiceExt;

pub fn state_for(generator_url: &str) -> AppState {
    state_with_timeout(generator_url, 5)
}

pub fn state_with_timeout(generator_url: &str, relay_timeout_secs: u64) -> AppState {
    let envy = Envy {
        generator_url: generator_url.to_string(),
        relay_timeout_secs: Some(relay_timeout_secs),
        ..Envy::default()
    };

    AppState::new(envy).expect("relay client")
}

/// Sends one JSON request through the router and returns status plus body.
pub async fn post_json(state: AppState, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

/// Serves the router on an ephemeral port and returns its base url.
pub fn spawn_app(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router(state).into_make_service());

    tokio::spawn(async move {
        let _ = server.await;
    });

    format!("http://{}", addr)
}

pub const SLOW: Duration = Duration::from_secs(3);

pub fn state_with_body_limit(generator_url: &str, request_body_limit: usize) -> AppState {
    let envy = Envy {
        generator_url: generator_url.to_string(),
        request_body_limit: Some(request_body_limit),
        ..Envy::default()
    };

    AppState::new(envy).expect("relay client")
}
