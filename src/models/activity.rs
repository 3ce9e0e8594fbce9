// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity record mapped from raw Backlog activity JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::models::type_labels::type_label;

/// A single entry in the simplified activity feed.
///
/// Built per request from a raw upstream activity; never persisted and never
/// mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecord {
    /// Backlog activity ID
    pub id: i64,
    /// Content summary, absent for activity kinds that carry none
    pub summary: Option<String>,
    /// Project the activity belongs to
    pub project_name: String,
    /// User who triggered the activity
    pub user_name: String,
    /// Numeric activity type code
    #[serde(rename = "type")]
    pub type_code: i64,
    /// When the activity happened (ISO 8601)
    pub created: DateTime<Utc>,
    /// Human-readable label for the type code
    pub type_label: String,
}

/// Why a raw activity could not be mapped into an [`ActivityRecord`].
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("missing required field: {0}")]
    Missing(&'static str),

    #[error("invalid created timestamp: {0}")]
    InvalidTimestamp(String),
}

impl ActivityRecord {
    /// Map a raw Backlog activity into a feed record.
    ///
    /// Required upstream fields: `id`, `type`, `created`, `project.name`,
    /// `createdUser.name`. `content.summary` is optional.
    pub fn from_raw(raw: &Value) -> Result<Self, FieldError> {
        let id = raw
            .get("id")
            .and_then(Value::as_i64)
            .ok_or(FieldError::Missing("id"))?;

        let type_code = raw
            .get("type")
            .and_then(Value::as_i64)
            .ok_or(FieldError::Missing("type"))?;

        let project_name = raw
            .pointer("/project/name")
            .and_then(Value::as_str)
            .ok_or(FieldError::Missing("project.name"))?
            .to_string();

        let user_name = raw
            .pointer("/createdUser/name")
            .and_then(Value::as_str)
            .ok_or(FieldError::Missing("createdUser.name"))?
            .to_string();

        let created_str = raw
            .get("created")
            .and_then(Value::as_str)
            .ok_or(FieldError::Missing("created"))?;
        let created = DateTime::parse_from_rfc3339(created_str)
            .map_err(|e| FieldError::InvalidTimestamp(format!("{}: {}", created_str, e)))?
            .with_timezone(&Utc);

        let summary = raw
            .pointer("/content/summary")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            id,
            summary,
            project_name,
            user_name,
            type_code,
            created,
            type_label: type_label(type_code),
        })
    }
}
