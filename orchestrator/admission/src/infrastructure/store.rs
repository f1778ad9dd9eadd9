// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! In-Memory Resource Store
//!
//! HashMap-backed [`ResourceStore`] used for development wiring and as the
//! injectable fixture in tests; production deployments inject a
//! networked/cached store behind the same trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::appconfig::{ComponentDefinition, ComponentRevision, TraitDefinition};
use crate::domain::store::{ResourceStore, StoreError};

type Keyed<T> = Arc<Mutex<HashMap<(String, String), T>>>;

#[derive(Clone, Default)]
pub struct InMemoryResourceStore {
    components: Keyed<ComponentDefinition>,
    revisions: Keyed<ComponentRevision>,
    trait_definitions: Keyed<TraitDefinition>,
}

impl InMemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(
        self,
        namespace: &str,
        name: &str,
        definition: ComponentDefinition,
    ) -> Self {
        Self::insert(&self.components, namespace, name, definition);
        self
    }

    pub fn with_revision(self, namespace: &str, revision: ComponentRevision) -> Self {
        let name = revision.metadata.name.clone();
        Self::insert(&self.revisions, namespace, &name, revision);
        self
    }

    pub fn with_trait_definition(
        self,
        namespace: &str,
        kind: &str,
        definition: TraitDefinition,
    ) -> Self {
        Self::insert(&self.trait_definitions, namespace, kind, definition);
        self
    }

    fn insert<T>(map: &Keyed<T>, namespace: &str, name: &str, value: T) {
        map.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert((namespace.to_string(), name.to_string()), value);
    }

    fn get<T: Clone>(map: &Keyed<T>, namespace: &str, name: &str) -> Result<Option<T>, StoreError> {
        let guard = map
            .lock()
            .map_err(|_| StoreError::Backend("mutex poisoned".to_string()))?;
        Ok(guard.get(&(namespace.to_string(), name.to_string())).cloned())
    }
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn get_component_definition(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<ComponentDefinition>, StoreError> {
        Self::get(&self.components, namespace, name)
    }

    async fn get_component_revision(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<ComponentRevision>, StoreError> {
        Self::get(&self.revisions, namespace, name)
    }

    async fn get_trait_definition(
        &self,
        namespace: &str,
        kind: &str,
    ) -> Result<Option<TraitDefinition>, StoreError> {
        Self::get(&self.trait_definitions, namespace, kind)
    }
}
