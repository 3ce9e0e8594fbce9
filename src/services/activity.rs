// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity feed service.
//!
//! The per-request pipeline:
//! 1. Fetch all space activities from Backlog (no upstream filtering)
//! 2. Keep activities matching the keyword, preserving order
//! 3. Window the filtered list by offset/count
//! 4. Map each raw activity into an ActivityRecord, skipping malformed ones

use crate::error::Result;
use crate::models::ActivityRecord;
use crate::services::BacklogClient;
use serde_json::Value;

/// Filters, paginates, and maps raw Backlog activities.
///
/// Stateless per request; safe to share across concurrent requests.
#[derive(Clone)]
pub struct ActivityService {
    client: BacklogClient,
}

impl ActivityService {
    pub fn new(client: BacklogClient) -> Self {
        Self { client }
    }

    /// Fetch the activity feed, filtered by `keyword` and windowed by
    /// `offset`/`count`.
    ///
    /// Malformed upstream records are logged and skipped, so the result may
    /// hold fewer than `count` records even when more matches exist.
    pub async fn get_activities(
        &self,
        keyword: &str,
        offset: i64,
        count: i64,
    ) -> Result<Vec<ActivityRecord>> {
        let all_activities = self.client.get("space/activities", &[]).await?;
        Ok(build_feed(&all_activities, keyword, offset, count))
    }
}

/// Filter, window, and map raw activities into feed records.
pub fn build_feed(
    activities: &[Value],
    keyword: &str,
    offset: i64,
    count: i64,
) -> Vec<ActivityRecord> {
    // An empty keyword vacuously matches everything, so skip the filter pass
    let filtered: Vec<&Value> = if keyword.is_empty() {
        activities.iter().collect()
    } else {
        activities.iter().filter(|a| matches(a, keyword)).collect()
    };

    window(&filtered, offset, count)
        .iter()
        .filter_map(|raw| match ActivityRecord::from_raw(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    raw = %raw,
                    "Skipping activity with missing or invalid field"
                );
                None
            }
        })
        .collect()
}

/// True iff `keyword` is a case-insensitive substring of any searchable
/// field: id, type code, content summary, project name, or creator name.
pub fn matches(item: &Value, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();

    let text_fields = [
        value_text(item.get("id")),
        value_text(item.get("type")),
        value_text(item.pointer("/content/summary")),
        value_text(item.pointer("/project/name")),
        value_text(item.pointer("/createdUser/name")),
    ];

    text_fields
        .iter()
        .any(|field| field.to_lowercase().contains(&keyword))
}

/// Render a JSON value as text for keyword matching. Absent or null fields
/// match as the empty string; non-strings use their JSON rendering.
fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Select the `offset`/`count` window of `items` with slice semantics: a
/// negative offset indexes from the end, a negative count yields an empty
/// window, and the window truncates at the end of the list. Never panics.
pub fn window<T>(items: &[T], offset: i64, count: i64) -> &[T] {
    if count < 0 {
        return &items[0..0];
    }
    let len = items.len() as i64;
    let start = if offset < 0 {
        (len + offset).max(0)
    } else {
        offset.min(len)
    };
    let end = start.saturating_add(count).min(len);
    &items[start as usize..end as usize]
}
