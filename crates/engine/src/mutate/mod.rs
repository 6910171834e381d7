// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

mod delete;
mod family;
mod insert;
mod mode;
mod partial;

pub use delete::Deleter;
pub use insert::Inserter;
pub use mode::DeleteMode;
pub use partial::PartialIndexUpdateHelper;
