// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Application Configuration Admission Core
//!
//! Admission-time validation for `ApplicationConfiguration` objects: before a
//! configuration is persisted, every component entry is resolved against the
//! resource store (live component definition or pinned revision) and checked
//! for the workload-name invariant — the workload's name is generated by the
//! orchestrator and must never be pre-assigned by the configuration, neither
//! literally in the workload payload nor indirectly through a parameter
//! binding.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Reference resolution and identity-invariant validation
//!
//! Transport framing (HTTP admission review, wire decoding) and client
//! construction live outside this crate; callers hand in fully decoded
//! objects and receive a [`Decision`](domain::validation::Decision).

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use domain::appconfig::{
    ApplicationConfiguration, ComponentDefinition, ComponentEntry, ComponentRevision,
    ComponentTrait, Metadata, ParameterDefinition, ParameterValue, TraitDefinition,
};
pub use domain::store::{ResourceStore, StoreError};
pub use domain::validation::{Decision, ValidationError};
pub use application::validation_service::{AdmissionPolicy, AdmissionService};
