// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use backlog_feed::config::Config;
use backlog_feed::routes::create_router;
use backlog_feed::services::{ActivityService, BacklogClient};
use backlog_feed::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// Create a test app wired to a fake upstream at `base_url`.
#[allow(dead_code)]
pub fn create_test_app(base_url: &str) -> axum::Router {
    let config = Config::test_default();
    let client = BacklogClient::with_base_url(base_url.to_string(), config.backlog_api_key.clone());
    let activity_service = ActivityService::new(client);

    let state = Arc::new(AppState {
        config,
        activity_service,
    });

    create_router(state)
}

/// Spawn a fake Backlog API on an ephemeral port serving `activities` for
/// `GET /space/activities`, and return its base URL.
///
/// Requests without the test API key get a 401, so any test that sees a
/// successful feed also proves the key was merged into the upstream query.
#[allow(dead_code)]
pub async fn spawn_fake_backlog(activities: serde_json::Value) -> String {
    let app = axum::Router::new().route(
        "/space/activities",
        axum::routing::get(move |Query(params): Query<HashMap<String, String>>| {
            let activities = activities.clone();
            async move {
                if params.get("apiKey").map(String::as_str) != Some("test_api_key") {
                    return (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"errors": [{"message": "Authentication failure."}]})),
                    );
                }
                (StatusCode::OK, Json(activities))
            }
        }),
    );

    serve_ephemeral(app).await
}

/// Spawn a fake Backlog API that always fails with the given status.
#[allow(dead_code)]
pub async fn spawn_failing_backlog(status: StatusCode) -> String {
    let app = axum::Router::new().route(
        "/space/activities",
        axum::routing::get(move || async move {
            (status, Json(json!({"errors": [{"message": "boom"}]})))
        }),
    );

    serve_ephemeral(app).await
}

async fn serve_ephemeral(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream");
    });

    format!("http://{}", addr)
}
