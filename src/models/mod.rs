// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod type_labels;

pub use activity::{ActivityRecord, FieldError};
pub use type_labels::type_label;
