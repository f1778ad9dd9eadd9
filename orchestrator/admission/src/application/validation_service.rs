// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Admission Validation Service
//!
//! Orchestrates admission of an `ApplicationConfiguration`: for each
//! component entry, in order, resolve the reference, optionally enforce the
//! revision-enabled trait policy, then prove the workload-name invariant.
//! The first failing entry produces the deny decision; entries after it are
//! not evaluated (first-failure-wins, deterministic by entry order).
//!
//! Each call is independent, read-only, and stateless between calls; the
//! service shares only the injected [`ResourceStore`]. Dropping the returned
//! future cancels outstanding lookups without leaving partial state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::resolver::ReferenceResolver;
use crate::domain::appconfig::{ApplicationConfiguration, ComponentEntry};
use crate::domain::payload;
use crate::domain::store::ResourceStore;
use crate::domain::validation::{check_workload_name_unassigned, Decision, ValidationError};

/// Pluggable admission policy, selected by the consuming system at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdmissionPolicy {
    /// When true, an entry carrying a trait whose `TraitDefinition` is
    /// revision-enabled must reference a pinned `revisionName`. Off by
    /// default; the workload-name invariant is enforced either way.
    pub require_revision_for_versioned_traits: bool,
}

/// Admission validator for application configurations
pub struct AdmissionService {
    store: Arc<dyn ResourceStore>,
    resolver: ReferenceResolver,
    policy: AdmissionPolicy,
}

impl AdmissionService {
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self::with_policy(store, AdmissionPolicy::default())
    }

    pub fn with_policy(store: Arc<dyn ResourceStore>, policy: AdmissionPolicy) -> Self {
        let resolver = ReferenceResolver::new(store.clone());
        Self {
            store,
            resolver,
            policy,
        }
    }

    /// Validate a proposed create/update of an application configuration
    pub async fn validate(
        &self,
        namespace: &str,
        configuration: &ApplicationConfiguration,
    ) -> Decision {
        for (index, entry) in configuration.spec.components.iter().enumerate() {
            tracing::debug!(index, "validating component entry");
            if let Err(err) = self.validate_entry(namespace, entry).await {
                tracing::warn!(
                    index,
                    configuration = %configuration.metadata.name,
                    reason = %err,
                    "application configuration rejected"
                );
                return Decision::from(err);
            }
        }
        Decision::allow()
    }

    async fn validate_entry(
        &self,
        namespace: &str,
        entry: &ComponentEntry,
    ) -> Result<(), ValidationError> {
        let definition = self.resolver.resolve(namespace, entry).await?;
        if self.policy.require_revision_for_versioned_traits {
            self.check_versioned_traits(namespace, entry).await?;
        }
        check_workload_name_unassigned(&definition, &entry.parameter_values)
    }

    /// Secondary rule: entries carrying a revision-enabled trait must pin a
    /// component revision. Trait payloads without a `kind`, and kinds with no
    /// stored `TraitDefinition`, are skipped; this rule is auxiliary, not a
    /// reference check.
    async fn check_versioned_traits(
        &self,
        namespace: &str,
        entry: &ComponentEntry,
    ) -> Result<(), ValidationError> {
        if entry.revision_name().is_some() {
            return Ok(());
        }
        for attachment in &entry.traits {
            let Some(kind) = payload::extract_trait_kind(&attachment.payload) else {
                continue;
            };
            let definition = self
                .store
                .get_trait_definition(namespace, kind)
                .await
                .map_err(|e| ValidationError::Store(e.to_string()))?;
            if definition.is_some_and(|d| d.spec.revision_enabled) {
                return Err(ValidationError::RevisionRequiredByTrait(kind.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appconfig::{
        ApplicationConfigurationSpec, ComponentDefinition, ComponentSpec, ComponentTrait,
        Metadata, TraitDefinition, TraitDefinitionSpec,
    };
    use crate::infrastructure::store::InMemoryResourceStore;
    use serde_json::json;

    fn empty_definition() -> ComponentDefinition {
        ComponentDefinition {
            metadata: Metadata::default(),
            spec: ComponentSpec {
                workload: json!({"metadata": {"name": ""}}),
                parameters: vec![],
            },
        }
    }

    fn configuration(entries: Vec<ComponentEntry>) -> ApplicationConfiguration {
        ApplicationConfiguration {
            api_version: "stratus.dev/v1".to_string(),
            kind: "ApplicationConfiguration".to_string(),
            metadata: Metadata {
                name: "app".to_string(),
                namespace: Some("ns".to_string()),
                labels: None,
            },
            spec: ApplicationConfigurationSpec {
                components: entries,
            },
        }
    }

    fn versioned_trait_entry() -> ComponentEntry {
        ComponentEntry {
            component_name: Some("c1".to_string()),
            traits: vec![ComponentTrait {
                payload: json!({"kind": "ManualScalerTrait", "apiVersion": "stratus.dev/v1"}),
            }],
            ..Default::default()
        }
    }

    fn store_with_versioned_trait() -> InMemoryResourceStore {
        InMemoryResourceStore::new()
            .with_component("ns", "c1", empty_definition())
            .with_trait_definition(
                "ns",
                "ManualScalerTrait",
                TraitDefinition {
                    metadata: Metadata::default(),
                    spec: TraitDefinitionSpec {
                        revision_enabled: true,
                    },
                },
            )
    }

    #[tokio::test]
    async fn test_empty_configuration_is_allowed() {
        let service = AdmissionService::new(Arc::new(InMemoryResourceStore::new()));
        let decision = service.validate("ns", &configuration(vec![])).await;
        assert!(decision.allowed);
        assert!(decision.reason.is_empty());
    }

    #[tokio::test]
    async fn test_first_failure_wins_in_entry_order() {
        let store = InMemoryResourceStore::new().with_component("ns", "c1", empty_definition());
        let service = AdmissionService::new(Arc::new(store));
        let config = configuration(vec![
            ComponentEntry {
                component_name: Some("missing".to_string()),
                ..Default::default()
            },
            ComponentEntry {
                component_name: Some("c1".to_string()),
                revision_name: Some("r1".to_string()),
                ..Default::default()
            },
        ]);
        let decision = service.validate("ns", &config).await;
        assert!(!decision.allowed);
        assert_eq!(decision.reason, "component \"missing\" not found");
    }

    #[tokio::test]
    async fn test_versioned_trait_ignored_by_default_policy() {
        // Matches the upstream fixture: a revision-enabled trait on a live
        // component reference is allowed unless the policy opts in.
        let service = AdmissionService::new(Arc::new(store_with_versioned_trait()));
        let decision = service
            .validate("ns", &configuration(vec![versioned_trait_entry()]))
            .await;
        assert!(decision.allowed);
    }

    #[tokio::test]
    async fn test_versioned_trait_enforced_when_policy_enabled() {
        let service = AdmissionService::with_policy(
            Arc::new(store_with_versioned_trait()),
            AdmissionPolicy {
                require_revision_for_versioned_traits: true,
            },
        );
        let decision = service
            .validate("ns", &configuration(vec![versioned_trait_entry()]))
            .await;
        assert!(!decision.allowed);
        assert_eq!(
            decision.reason,
            "trait \"ManualScalerTrait\" is revision-enabled, the component entry must use revisionName"
        );
    }

    #[tokio::test]
    async fn test_unknown_trait_kind_skipped_by_policy() {
        let store = InMemoryResourceStore::new().with_component("ns", "c1", empty_definition());
        let service = AdmissionService::with_policy(
            Arc::new(store),
            AdmissionPolicy {
                require_revision_for_versioned_traits: true,
            },
        );
        let decision = service
            .validate("ns", &configuration(vec![versioned_trait_entry()]))
            .await;
        assert!(decision.allowed);
    }

    #[tokio::test]
    async fn test_policy_deserializes_from_camel_case() {
        let policy: AdmissionPolicy =
            serde_json::from_value(json!({"requireRevisionForVersionedTraits": true})).unwrap();
        assert!(policy.require_revision_for_versioned_traits);

        let default: AdmissionPolicy = serde_json::from_value(json!({})).unwrap();
        assert!(!default.require_revision_for_versioned_traits);
    }
}
