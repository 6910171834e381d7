// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use serde::{Deserialize, Serialize};

use crate::{
	error::CatalogError,
	interface::catalog::{ColumnDef, ColumnId, FamilyDef, FamilyId, IndexDef, TableId},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
	pub id: TableId,
	pub name: String,
	pub columns: Vec<ColumnDef>,
	pub primary_index: IndexDef,
	/// Secondary indexes in declaration order.
	pub indexes: Vec<IndexDef>,
	pub families: Vec<FamilyDef>,
}

impl TableDef {
	pub fn find_column_by_id(&self, id: ColumnId) -> Result<&ColumnDef, CatalogError> {
		self.columns.iter().find(|c| c.id == id).ok_or_else(|| CatalogError::ColumnNotFound {
			table: self.id,
			table_name: self.name.clone(),
			column: id,
		})
	}

	pub fn find_family_by_id(&self, id: FamilyId) -> Result<&FamilyDef, CatalogError> {
		self.families.iter().find(|f| f.id == id).ok_or_else(|| CatalogError::FamilyNotFound {
			table: self.id,
			table_name: self.name.clone(),
			family: id,
		})
	}

	/// Every secondary index that must be cleaned up when a row goes away,
	/// whatever its schema change state.
	pub fn deletable_secondary_indexes(&self) -> Vec<IndexDef> {
		self.indexes.clone()
	}

	pub fn writable_secondary_indexes(&self) -> Vec<IndexDef> {
		self.indexes.iter().filter(|i| i.is_writable()).cloned().collect()
	}

	pub fn partial_indexes(&self) -> impl Iterator<Item = &IndexDef> {
		self.indexes.iter().filter(|i| i.partial)
	}

	/// Families in ascending id order, independent of declaration order.
	pub fn families_by_id(&self) -> Vec<&FamilyDef> {
		let mut families: Vec<&FamilyDef> = self.families.iter().collect();
		families.sort_by_key(|f| f.id);
		families
	}

	pub fn is_primary_key_column(&self, id: ColumnId) -> bool {
		self.primary_index.key_column_ids().any(|c| c == id)
	}
}

#[cfg(test)]
mod tests {
	use tessera_type::Type;

	use super::*;
	use crate::interface::catalog::{IndexColumn, IndexState, PRIMARY_INDEX_ID};

	fn table() -> TableDef {
		TableDef {
			id: TableId(51),
			name: "t".to_string(),
			columns: vec![ColumnDef::new(1u32, "a", Type::Int8), ColumnDef::new(2u32, "b", Type::Utf8)],
			primary_index: IndexDef::new(PRIMARY_INDEX_ID, "primary", vec![IndexColumn::asc(1u32)]),
			indexes: vec![
				IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)]),
				IndexDef::new(3u32, "by_b_dropping", vec![IndexColumn::asc(2u32)])
					.with_state(IndexState::DeleteOnly),
			],
			families: vec![FamilyDef::new(2u32, "f2", [2u32]), FamilyDef::new(0u32, "primary", [1u32])],
		}
	}

	#[test]
	fn test_find_column() {
		let table = table();
		assert_eq!(table.find_column_by_id(ColumnId(2)).unwrap().name, "b");
		assert_eq!(
			table.find_column_by_id(ColumnId(9)).unwrap_err(),
			CatalogError::ColumnNotFound {
				table: TableId(51),
				table_name: "t".to_string(),
				column: ColumnId(9),
			}
		);
	}

	#[test]
	fn test_families_by_id_are_sorted() {
		let table = table();
		let ids: Vec<u32> = table.families_by_id().iter().map(|f| *f.id).collect();
		assert_eq!(ids, vec![0, 2]);
	}

	#[test]
	fn test_index_states() {
		let table = table();
		assert_eq!(table.deletable_secondary_indexes().len(), 2);
		assert_eq!(table.writable_secondary_indexes().len(), 1);
	}

	#[test]
	fn test_primary_key_column() {
		let table = table();
		assert!(table.is_primary_key_column(ColumnId(1)));
		assert!(!table.is_primary_key_column(ColumnId(2)));
	}
}
