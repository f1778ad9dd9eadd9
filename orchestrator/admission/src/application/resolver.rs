// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Component Reference Resolver
//!
//! Resolves one component entry to the single effective component definition
//! it implies: a live definition looked up by `componentName`, or the
//! definition embedded in a pinned `ComponentRevision` looked up by
//! `revisionName`. The two reference kinds are mutually exclusive and the
//! exclusivity check runs before any store access, so a conflicting entry is
//! rejected regardless of store contents.
//!
//! Resolution is a pure lookup-and-branch: no side effects, no retries.
//! Revisions are immutable snapshots, so resolving the same entry against an
//! unchanged store is deterministic and repeatable.

use std::sync::Arc;

use crate::domain::appconfig::{ComponentDefinition, ComponentEntry};
use crate::domain::store::ResourceStore;
use crate::domain::validation::ValidationError;

pub struct ReferenceResolver {
    store: Arc<dyn ResourceStore>,
}

impl ReferenceResolver {
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self { store }
    }

    /// Resolve an entry to its effective component definition
    pub async fn resolve(
        &self,
        namespace: &str,
        entry: &ComponentEntry,
    ) -> Result<ComponentDefinition, ValidationError> {
        match (entry.component_name(), entry.revision_name()) {
            (Some(component), Some(revision)) => {
                tracing::warn!(
                    component_name = %component,
                    revision_name = %revision,
                    "component entry sets both reference fields"
                );
                Err(ValidationError::ConflictingReference)
            }
            (None, None) => Err(ValidationError::EmptyReference),
            (None, Some(revision)) => {
                let snapshot = self
                    .store
                    .get_component_revision(namespace, revision)
                    .await
                    .map_err(|e| ValidationError::Store(e.to_string()))?;
                snapshot
                    .map(|r| r.component)
                    .ok_or_else(|| ValidationError::RevisionNotFound(revision.to_string()))
            }
            (Some(component), None) => {
                let definition = self
                    .store
                    .get_component_definition(namespace, component)
                    .await
                    .map_err(|e| ValidationError::Store(e.to_string()))?;
                definition.ok_or_else(|| ValidationError::ComponentNotFound(component.to_string()))
            }
        }
    }
}
