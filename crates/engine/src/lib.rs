// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod mutate;

pub use mutate::{DeleteMode, Deleter, Inserter, PartialIndexUpdateHelper};
pub use tessera_type::{Error, Result};
