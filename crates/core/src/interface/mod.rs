// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

pub mod batch;
pub mod catalog;

pub use batch::{Batch, Mutation, MutationBatch, OriginTimestamp};
pub use catalog::{
	ColumnDef, ColumnId, FamilyDef, FamilyId, IndexColumn, IndexDef, IndexId, IndexState, PRIMARY_INDEX_ID,
	SortDirection, TableDef, TableId,
};
