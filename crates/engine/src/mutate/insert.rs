// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::sync::Arc;

use tessera_core::{
	EncodedKey,
	encoding::keycode::render_index_key,
	interface::{ColumnDef, MutationBatch, TableDef},
	key::append_family_suffix,
	row::{ColumnIdMap, RowConfig, RowHelper},
};
use tessera_type::Value;
use tracing::{debug, instrument};

use super::{PartialIndexUpdateHelper, family::encode_family_value};

/// Turns the insertion of a row into the writes of its family keys and
/// secondary index entries.
#[derive(Debug)]
pub struct Inserter {
	helper: RowHelper,
	insert_cols: Vec<ColumnDef>,
	insert_col_map: ColumnIdMap,

	key_buf: Vec<u8>,
	value_buf: Vec<u8>,
}

impl Inserter {
	/// Rows are supplied with a value for every table column, in table
	/// order.
	pub fn new(table: Arc<TableDef>, config: RowConfig) -> Self {
		let indexes = table.writable_secondary_indexes();
		let insert_cols = table.columns.clone();
		let insert_col_map = ColumnIdMap::from_columns(&insert_cols);

		Self {
			helper: RowHelper::new(table, indexes, config),
			insert_cols,
			insert_col_map,
			key_buf: Vec::new(),
			value_buf: Vec::new(),
		}
	}

	pub fn insert_cols(&self) -> &[ColumnDef] {
		&self.insert_cols
	}

	#[instrument(name = "mutate::insert_row", level = "trace", skip_all, fields(table = %self.helper.table().name))]
	pub fn insert_row<B: MutationBatch>(
		&mut self,
		batch: &mut B,
		values: &[Value],
		partial_index: &PartialIndexUpdateHelper,
		trace_kv: bool,
	) -> crate::Result<()> {
		let helper = &self.helper;

		for (idx, index) in helper.indexes().iter().enumerate() {
			if partial_index.ignore_for_put.contains(&index.id) {
				continue;
			}

			let entries = helper.encode_secondary_index(index, &self.insert_col_map, values, false)?;
			let directions = helper.secondary_index_directions(idx);
			for entry in entries {
				if trace_kv {
					debug!("Put {} -> {:?}", render_index_key(&entry.key, directions), entry.value);
				}
				batch.put(&entry.key, entry.value)?;
			}
		}

		helper.encode_primary_index_key_into(&mut self.key_buf, &self.insert_col_map, values)?;
		let primary_key_len = self.key_buf.len();

		for family in helper.table().families_by_id() {
			let Some(value) =
				encode_family_value(helper, &self.insert_col_map, &mut self.value_buf, family, values)?
			else {
				continue;
			};

			self.key_buf.truncate(primary_key_len);
			append_family_suffix(&mut self.key_buf, family.id);
			let key = EncodedKey::snapshot(&self.key_buf);

			helper.check_row_size(&key, value.len(), family.id)?;
			if trace_kv {
				debug!("Put {} -> {:?}", render_index_key(&key, helper.primary_index_directions()), value);
			}
			batch.put(&key, value)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use tessera_core::interface::{
		Batch, FamilyDef, IndexColumn, IndexDef, IndexState, Mutation, PRIMARY_INDEX_ID, TableId,
	};
	use tessera_type::Type;

	use super::*;

	fn table() -> Arc<TableDef> {
		Arc::new(TableDef {
			id: TableId(51),
			name: "t".to_string(),
			columns: vec![
				ColumnDef::new(1u32, "a", Type::Int8),
				ColumnDef::new(2u32, "b", Type::Utf8),
				ColumnDef::new(3u32, "c", Type::Int8),
			],
			primary_index: IndexDef::new(PRIMARY_INDEX_ID, "primary", vec![IndexColumn::asc(1u32)]),
			indexes: vec![
				IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)]).with_key_suffix([1u32]),
				IndexDef::new(3u32, "by_c", vec![IndexColumn::asc(3u32)])
					.with_key_suffix([1u32])
					.with_state(IndexState::DeleteOnly),
			],
			families: vec![FamilyDef::new(0u32, "primary", [1u32, 2u32]), FamilyDef::new(1u32, "f1", [3u32])],
		})
	}

	#[test]
	fn test_skips_null_family_and_delete_only_index() {
		let mut inserter = Inserter::new(table(), RowConfig::default());
		let mut batch = Batch::new();
		inserter.insert_row(
			&mut batch,
			&[Value::Int8(1), Value::utf8("x"), Value::Undefined],
			&PartialIndexUpdateHelper::new(),
			true,
		)
		.unwrap();

		// by_b entry and family 0
		assert_eq!(batch.len(), 2);
		assert!(batch.iter().all(|m| matches!(m, Mutation::Put { .. })));
	}

	#[test]
	fn test_ignore_for_put() {
		let mut inserter = Inserter::new(table(), RowConfig::default());
		let mut batch = Batch::new();
		inserter.insert_row(
			&mut batch,
			&[Value::Int8(1), Value::utf8("x"), Value::Int8(2)],
			&PartialIndexUpdateHelper::new().with_ignore_for_put([2u32]),
			false,
		)
		.unwrap();

		// families 0 and 1 only
		assert_eq!(batch.len(), 2);
	}

	#[test]
	fn test_row_too_large() {
		let config = RowConfig::default().with_large_row_limits(None, Some(16));
		let mut inserter = Inserter::new(table(), config);
		let mut batch = Batch::new();
		let err = inserter
			.insert_row(
				&mut batch,
				&[Value::Int8(1), Value::utf8("a long enough string"), Value::Undefined],
				&PartialIndexUpdateHelper::new(),
				false,
			)
			.unwrap_err();
		assert_eq!(err.code(), "ENCODING_003");
	}
}
