// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::collections::HashMap;

use crate::interface::catalog::{ColumnDef, ColumnId};

/// Maps a column id to the position of its value in a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnIdMap {
	positions: HashMap<ColumnId, usize>,
}

impl ColumnIdMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// A column listed twice maps to its last position.
	pub fn from_columns(columns: &[ColumnDef]) -> Self {
		let mut map = Self {
			positions: HashMap::with_capacity(columns.len()),
		};
		for (idx, column) in columns.iter().enumerate() {
			map.set(column.id, idx);
		}
		map
	}

	pub fn set(&mut self, column: ColumnId, position: usize) {
		self.positions.insert(column, position);
	}

	pub fn get(&self, column: ColumnId) -> Option<usize> {
		self.positions.get(&column).copied()
	}

	pub fn contains(&self, column: ColumnId) -> bool {
		self.positions.contains_key(&column)
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}
