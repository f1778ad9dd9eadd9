// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Resource Store Interface
//!
//! Read-only access to the objects an application configuration references.
//! The interface is defined in the domain layer and implemented in
//! `crate::infrastructure`: production wiring injects a networked/cached
//! client, tests inject `InMemoryResourceStore`.
//!
//! All three reads are point lookups by (namespace, name); `Ok(None)` means
//! the object does not exist, which is a terminal validation failure for the
//! caller, never retried here. Only backend unreachability surfaces as
//! [`StoreError`].

use async_trait::async_trait;

use crate::domain::appconfig::{ComponentDefinition, ComponentRevision, TraitDefinition};

/// Resource store failures distinct from not-found
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Read-only store of component definitions, component revisions, and trait
/// definitions
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Latest component definition by name
    async fn get_component_definition(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<ComponentDefinition>, StoreError>;

    /// Pinned component revision by name
    async fn get_component_revision(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<ComponentRevision>, StoreError>;

    /// Trait definition by trait kind
    async fn get_trait_definition(
        &self,
        namespace: &str,
        kind: &str,
    ) -> Result<Option<TraitDefinition>, StoreError>;
}
