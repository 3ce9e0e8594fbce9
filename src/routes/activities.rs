// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity feed route.

use crate::error::Result;
use crate::models::ActivityRecord;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/activities", get(get_activities))
}

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Case-insensitive keyword; empty matches everything
    #[serde(default)]
    keyword: String,
    /// 0-based index into the filtered list
    #[serde(default)]
    offset: i64,
    /// Maximum records to return
    #[serde(default = "default_count")]
    count: i64,
}

fn default_count() -> i64 {
    100
}

/// Get the filtered, paginated activity feed.
///
/// Each request triggers exactly one upstream fetch; upstream failures
/// surface as a 502 via [`crate::error::AppError`].
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActivitiesQuery>,
) -> Result<Json<Vec<ActivityRecord>>> {
    let records = state
        .activity_service
        .get_activities(&query.keyword, query.offset, query.count)
        .await?;

    Ok(Json(records))
}
