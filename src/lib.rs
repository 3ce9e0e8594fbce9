// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backlog-Feed: a searchable activity feed over the Backlog API
//!
//! This crate provides the backend API that pulls space activities from
//! Backlog and re-exposes them as a simplified, keyword-filterable JSON feed.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::ActivityService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub activity_service: ActivityService,
}
