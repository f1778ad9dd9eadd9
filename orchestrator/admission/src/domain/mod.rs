// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

pub mod appconfig;
pub mod payload;
pub mod store;
pub mod validation;
