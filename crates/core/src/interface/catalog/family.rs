// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use serde::{Deserialize, Serialize};

use crate::interface::catalog::{ColumnId, FamilyId};

/// A group of columns stored together under one key suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyDef {
	pub id: FamilyId,
	pub name: String,
	pub column_ids: Vec<ColumnId>,
	/// Column whose value is stored bare (without tuple framing) when it
	/// is the only column of the family.
	pub default_column_id: Option<ColumnId>,
}

impl FamilyDef {
	pub fn new(
		id: impl Into<FamilyId>,
		name: impl Into<String>,
		column_ids: impl IntoIterator<Item = impl Into<ColumnId>>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			column_ids: column_ids.into_iter().map(Into::into).collect(),
			default_column_id: None,
		}
	}

	pub fn with_default_column(mut self, column: impl Into<ColumnId>) -> Self {
		self.default_column_id = Some(column.into());
		self
	}

	/// Family 0 is the row sentinel and never uses the bare single
	/// value form.
	pub fn single_default_column(&self) -> Option<ColumnId> {
		match (self.column_ids.as_slice(), self.default_column_id) {
			([only], Some(default)) if *only == default && self.id != 0 => Some(default),
			_ => None,
		}
	}

	pub fn contains(&self, column: ColumnId) -> bool {
		self.column_ids.contains(&column)
	}
}
