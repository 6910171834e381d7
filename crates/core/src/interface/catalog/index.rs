// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::interface::catalog::{ColumnId, IndexId};

/// The primary index of every table has this id.
pub const PRIMARY_INDEX_ID: IndexId = IndexId(1);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexColumn {
	pub column: ColumnId,
	pub direction: SortDirection,
}

impl IndexColumn {
	pub fn asc(column: impl Into<ColumnId>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Asc,
		}
	}

	pub fn desc(column: impl Into<ColumnId>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Desc,
		}
	}
}

/// Schema change state of an index. Indexes being added or dropped are
/// maintained only partially until they become public.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndexState {
	#[default]
	Public,
	/// Receives writes and deletes but is not yet readable.
	WriteOnly,
	/// Receives deletes only.
	DeleteOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDef {
	pub id: IndexId,
	pub name: String,
	pub key_columns: Vec<IndexColumn>,
	/// Primary key columns appended to the key to make every entry unique.
	pub key_suffix_columns: Vec<ColumnId>,
	/// Columns carried in the entry value.
	pub store_columns: Vec<ColumnId>,
	pub unique: bool,
	/// The index has a predicate; rows that do not satisfy it have no entry.
	pub partial: bool,
	pub state: IndexState,
}

impl IndexDef {
	pub fn new(id: impl Into<IndexId>, name: impl Into<String>, key_columns: Vec<IndexColumn>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			key_columns,
			key_suffix_columns: vec![],
			store_columns: vec![],
			unique: false,
			partial: false,
			state: IndexState::Public,
		}
	}

	pub fn with_key_suffix(mut self, columns: impl IntoIterator<Item = impl Into<ColumnId>>) -> Self {
		self.key_suffix_columns = columns.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_store(mut self, columns: impl IntoIterator<Item = impl Into<ColumnId>>) -> Self {
		self.store_columns = columns.into_iter().map(Into::into).collect();
		self
	}

	pub fn unique(mut self) -> Self {
		self.unique = true;
		self
	}

	pub fn partial(mut self) -> Self {
		self.partial = true;
		self
	}

	pub fn with_state(mut self, state: IndexState) -> Self {
		self.state = state;
		self
	}

	pub fn key_column_ids(&self) -> impl Iterator<Item = ColumnId> + '_ {
		self.key_columns.iter().map(|c| c.column)
	}

	/// Directions of every column encoded into the key, suffix columns
	/// included (always ascending).
	pub fn key_directions(&self) -> SmallVec<[SortDirection; 8]> {
		self.key_columns
			.iter()
			.map(|c| c.direction)
			.chain(self.key_suffix_columns.iter().map(|_| SortDirection::Asc))
			.collect()
	}

	pub fn is_writable(&self) -> bool {
		matches!(self.state, IndexState::Public | IndexState::WriteOnly)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_key_directions_include_suffix() {
		let index = IndexDef::new(2u32, "by_b", vec![IndexColumn::desc(2u32)]).with_key_suffix([1u32]);
		assert_eq!(index.key_directions().as_slice(), &[SortDirection::Desc, SortDirection::Asc]);
	}

	#[test]
	fn test_writable_states() {
		let index = IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)]);
		assert!(index.is_writable());
		assert!(index.clone().with_state(IndexState::WriteOnly).is_writable());
		assert!(!index.with_state(IndexState::DeleteOnly).is_writable());
	}
}
