// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static table of Backlog activity type labels.
//!
//! The 26 type codes are fixed by the Backlog API protocol. The table is
//! built at compile time and never mutated.

use phf::Map;
use phf_macros::phf_map;

/// Activity type code -> human-readable label.
static TYPE_LABELS: Map<i64, &'static str> = phf_map! {
    1i64 => "Issue created",
    2i64 => "Issue updated",
    3i64 => "Issue commented",
    4i64 => "Issue deleted",
    5i64 => "Wiki created",
    6i64 => "Wiki updated",
    7i64 => "Wiki deleted",
    8i64 => "Shared file added",
    9i64 => "Shared file updated",
    10i64 => "Shared file deleted",
    11i64 => "Subversion committed",
    12i64 => "Git pushed",
    13i64 => "Git repository created",
    14i64 => "Issues bulk updated",
    15i64 => "User joined project",
    16i64 => "User left project",
    17i64 => "Comment notification added",
    18i64 => "Pull request added",
    19i64 => "Pull request updated",
    20i64 => "Pull request commented",
    21i64 => "Pull request deleted",
    22i64 => "Milestone added",
    23i64 => "Milestone updated",
    24i64 => "Milestone deleted",
    25i64 => "Group joined project",
    26i64 => "Group left project",
};

/// Look up the label for an activity type code.
///
/// Codes outside the known range yield a fallback label containing the raw
/// code rather than an error.
pub fn type_label(code: i64) -> String {
    match TYPE_LABELS.get(&code) {
        Some(label) => (*label).to_string(),
        None => format!("Unknown type ({})", code),
    }
}
