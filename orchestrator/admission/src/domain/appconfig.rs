// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Application Configuration Data Model
//!
//! Kubernetes-style manifest types for the application configuration object
//! and the resources it references: reusable component definitions, their
//! immutable historical revisions, and trait-kind definitions.
//!
//! Workload and trait payloads are polymorphic across kinds, so they are kept
//! as opaque [`serde_json::Value`]s; the validator only ever reads individual
//! fields out of them (see `crate::domain::payload`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Object metadata (Kubernetes-style)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Object name (unique within its namespace)
    #[serde(default)]
    pub name: String,

    /// Namespace the object lives in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Optional: labels for categorization and discovery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// Top-level application configuration manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfiguration {
    /// API version of the manifest
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,

    /// Resource kind (expected "ApplicationConfiguration")
    #[serde(default)]
    pub kind: String,

    /// Configuration metadata
    #[serde(default)]
    pub metadata: Metadata,

    /// Configuration specification
    pub spec: ApplicationConfigurationSpec,
}

/// Content under `spec:` of an application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationConfigurationSpec {
    /// Ordered component entries; validated in order, first failure wins
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// One component entry of an application configuration
///
/// References a component either live by name (`componentName`, tracks the
/// latest definition) or pinned to a historical snapshot (`revisionName`).
/// The two reference fields are mutually exclusive; the resolver rejects
/// entries that set both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    /// Live reference to the latest component definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,

    /// Pinned reference to an immutable component revision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_name: Option<String>,

    /// Trait attachments layered onto the component's workload
    #[serde(default)]
    pub traits: Vec<ComponentTrait>,

    /// Parameter bindings substituted into the resolved workload payload
    #[serde(default)]
    pub parameter_values: Vec<ParameterValue>,
}

impl ComponentEntry {
    /// Live component reference, treating an empty string as unset
    pub fn component_name(&self) -> Option<&str> {
        self.component_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Pinned revision reference, treating an empty string as unset
    pub fn revision_name(&self) -> Option<&str> {
        self.revision_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// A trait attachment on a component entry; the payload is an opaque typed
/// object whose `kind` field names the trait kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentTrait {
    #[serde(rename = "trait")]
    pub payload: Value,
}

/// A named parameter binding supplied at configuration time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterValue {
    pub name: String,

    /// String or numeric value (int-or-string on the wire)
    pub value: Value,
}

impl ParameterValue {
    /// The bound value rendered as a plain string, for substitution checks
    /// and decision reasons
    pub fn value_string(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Reusable component definition: a workload template plus the parameters a
/// configuration may override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDefinition {
    #[serde(default)]
    pub metadata: Metadata,

    pub spec: ComponentSpec,
}

/// Content under `spec:` of a component definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Opaque workload payload (polymorphic across workload kinds)
    pub workload: Value,

    /// Parameters a configuration may bind, each overwriting one or more
    /// field paths inside the workload payload
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
}

/// A user-overridable parameter declared by a component definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    pub name: String,

    /// Dotted locators into the workload payload this parameter overwrites
    /// when bound (e.g. `metadata.name`)
    #[serde(default)]
    pub field_paths: Vec<String>,
}

/// Immutable, time-stamped snapshot of a component definition
///
/// Revisions are created by the component reconciler and never mutated
/// afterwards; a configuration pins to one by name instead of
/// tracking the latest definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRevision {
    #[serde(default)]
    pub metadata: Metadata,

    /// Monotonic revision number within the component's history
    #[serde(default)]
    pub revision: i64,

    /// Time the snapshot was taken
    #[serde(default = "Utc::now")]
    pub snapshot_time: DateTime<Utc>,

    /// The component definition as it existed at snapshot time
    pub component: ComponentDefinition,
}

/// Metadata about a trait kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitDefinition {
    #[serde(default)]
    pub metadata: Metadata,

    pub spec: TraitDefinitionSpec,
}

/// Content under `spec:` of a trait definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDefinitionSpec {
    /// Whether instances of this trait kind are expected to bind to a pinned
    /// component revision rather than the latest definition
    #[serde(default)]
    pub revision_enabled: bool,
}
