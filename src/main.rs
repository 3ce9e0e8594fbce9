// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backlog-Feed API Server
//!
//! Fetches space activities from the Backlog API and serves them as a
//! simplified, keyword-searchable JSON feed.

use backlog_feed::{
    config::Config,
    services::{ActivityService, BacklogClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        space = %config.backlog_space_id,
        "Starting Backlog-Feed API"
    );

    // Initialize Backlog client and activity service
    let client = BacklogClient::new(&config.backlog_space_id, config.backlog_api_key.clone());
    let activity_service = ActivityService::new(client);

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        activity_service,
    });

    // Build router
    let app = backlog_feed::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("backlog_feed=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
