// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

pub use col_map::ColumnIdMap;
pub use config::RowConfig;
pub use helper::RowHelper;
pub use secondary::IndexEntry;

mod col_map;
mod config;
mod helper;
mod secondary;
