// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

mod column;
mod family;
mod id;
mod index;
mod table;

pub use column::ColumnDef;
pub use family::FamilyDef;
pub use id::{ColumnId, FamilyId, IndexId, TableId};
pub use index::{IndexColumn, IndexDef, IndexState, PRIMARY_INDEX_ID, SortDirection};
pub use table::TableDef;
