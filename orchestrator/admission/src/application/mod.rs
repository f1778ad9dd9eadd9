// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

pub mod resolver;
pub mod validation_service;

pub use resolver::ReferenceResolver;
pub use validation_service::{AdmissionPolicy, AdmissionService};
