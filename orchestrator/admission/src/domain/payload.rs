// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Payload Field Extraction Domain Service
//!
//! Workload and trait payloads are polymorphic: the validator must read a
//! handful of well-known fields out of them without knowing the payload's
//! kind. This module provides a generic dotted-path traversal over
//! [`serde_json::Value`] — the same path convention
//! `ParameterDefinition.fieldPaths` uses — rather than kind-specific parsing.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Generic field access into opaque payloads

use serde_json::Value;

/// Field path of the workload's identity field. Its value becomes the
/// deployed resource's generated name and must stay orchestrator-assigned.
pub const WORKLOAD_NAME_FIELD_PATH: &str = "metadata.name";

/// Field path naming a trait payload's kind
pub const TRAIT_KIND_FIELD_PATH: &str = "kind";

/// Walk a dotted path into a semi-structured payload.
///
/// Each segment indexes into a mapping by key; a segment that parses as an
/// integer also indexes into a sequence. Returns `None` as soon as a segment
/// cannot be followed.
pub fn lookup_path<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = payload;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// String value at `path`, or `None` if absent or not a string
pub fn extract_string<'a>(payload: &'a Value, path: &str) -> Option<&'a str> {
    lookup_path(payload, path).and_then(Value::as_str)
}

/// Literal workload name of a workload payload; empty string when the
/// identity field is absent or unset
pub fn extract_workload_name(payload: &Value) -> &str {
    extract_string(payload, WORKLOAD_NAME_FIELD_PATH).unwrap_or("")
}

/// Kind of a trait payload, or `None` for payloads that do not carry one
pub fn extract_trait_kind(payload: &Value) -> Option<&str> {
    extract_string(payload, TRAIT_KIND_FIELD_PATH)
}
