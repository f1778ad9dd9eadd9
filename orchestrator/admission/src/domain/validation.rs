// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Admission Validation Domain
//!
//! Typed validation errors, the admission [`Decision`], and the
//! workload-name invariant checker. The checker is a domain service (not
//! infrastructure) because keeping the workload's generated identity out of
//! author control is a core business rule, not a technical concern.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Validation error taxonomy and identity-invariant check
//!
//! All errors are terminal: a failed lookup or a violated invariant rejects
//! the configuration, and the caller re-submits after fixing it. Nothing in
//! this module retries or panics on malformed input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::appconfig::{ComponentDefinition, ParameterValue};
use crate::domain::payload::{self, WORKLOAD_NAME_FIELD_PATH};

/// Fixed reason for entries that set both reference fields
pub const REASON_CONFLICTING_REFERENCE: &str =
    "componentName and revisionName are mutually exclusive, you can only specify one of them";

/// Validation failures, one per rejected configuration; the display string is
/// the stable, human-readable decision reason
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Both `componentName` and `revisionName` set on one entry
    #[error("{}", REASON_CONFLICTING_REFERENCE)]
    ConflictingReference,

    /// Neither reference field set; the entry points at nothing
    #[error("a component entry must set one of componentName or revisionName")]
    EmptyReference,

    #[error("component \"{0}\" not found")]
    ComponentNotFound(String),

    #[error("component revision \"{0}\" not found")]
    RevisionNotFound(String),

    /// The workload's identity field is, or would become, non-empty — via a
    /// literal value in the payload or a parameter substitution
    #[error("workload name \"{0}\" is not empty, the workload name is generated by the orchestrator and must be left unassigned")]
    WorkloadNameNotEmpty(String),

    /// Secondary policy: a revision-enabled trait requires the entry to pin
    /// a component revision
    #[error("trait \"{0}\" is revision-enabled, the component entry must use revisionName")]
    RevisionRequiredByTrait(String),

    /// Store backend failure (not not-found); terminal from the admission
    /// core's perspective, the transport layer owns retries
    #[error("resource store failure: {0}")]
    Store(String),
}

/// Admission decision returned to the transport layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,

    /// Empty when allowed; otherwise the first failure's reason, in entry
    /// order
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: String::new(),
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for Decision {
    fn from(err: ValidationError) -> Self {
        Decision::deny(err.to_string())
    }
}

/// Prove the resolved workload's identity field stays unassigned.
///
/// Two paths can assign it: a literal value in the workload payload, and a
/// bound parameter whose declared field paths alias the identity path. Both
/// give the author control over a value the orchestrator must generate, so
/// both fail with the same [`ValidationError::WorkloadNameNotEmpty`] shape.
///
/// Bound parameters with no matching `ParameterDefinition` are ignored here;
/// unknown-parameter validation is a separate concern.
pub fn check_workload_name_unassigned(
    definition: &ComponentDefinition,
    bound_parameters: &[ParameterValue],
) -> Result<(), ValidationError> {
    let literal = payload::extract_workload_name(&definition.spec.workload);
    if !literal.is_empty() {
        tracing::warn!(
            workload_name = %literal,
            "workload payload carries a literal workload name"
        );
        return Err(ValidationError::WorkloadNameNotEmpty(literal.to_string()));
    }

    for binding in bound_parameters {
        let Some(parameter) = definition
            .spec
            .parameters
            .iter()
            .find(|p| p.name == binding.name)
        else {
            continue;
        };
        // Any aliasing path is sufficient, not just sole-target parameters.
        if parameter
            .field_paths
            .iter()
            .any(|path| path == WORKLOAD_NAME_FIELD_PATH)
        {
            let value = binding.value_string();
            tracing::warn!(
                parameter = %binding.name,
                value = %value,
                "parameter binding would assign the workload name at substitution time"
            );
            return Err(ValidationError::WorkloadNameNotEmpty(value));
        }
    }

    Ok(())
}
