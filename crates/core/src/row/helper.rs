// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::{
	collections::{HashMap, HashSet},
	sync::Arc,
};

use smallvec::SmallVec;
use tessera_type::Value;
use tracing::{debug, warn};

use crate::{
	EncodedKey,
	encoding::{
		keycode::{encode_value, render_index_key},
		value::encode_tuple_column,
	},
	error::EncodingError,
	interface::{
		MutationBatch,
		catalog::{ColumnId, FamilyId, IndexDef, SortDirection, TableDef},
	},
	key::IndexKey,
	row::{ColumnIdMap, RowConfig, secondary::IndexEntry},
};

/// Key and value encoding shared by every row mutation of one table.
#[derive(Debug, Clone)]
pub struct RowHelper {
	table: Arc<TableDef>,
	/// Secondary indexes maintained by the owning mutator.
	indexes: Vec<IndexDef>,
	config: RowConfig,

	prim_index_val_dirs: SmallVec<[SortDirection; 8]>,
	sec_index_val_dirs: Vec<SmallVec<[SortDirection; 8]>>,
	sorted_column_families: HashMap<FamilyId, Vec<ColumnId>>,
	primary_key_cols: HashSet<ColumnId>,
}

impl RowHelper {
	pub fn new(table: Arc<TableDef>, indexes: Vec<IndexDef>, config: RowConfig) -> Self {
		let prim_index_val_dirs = table.primary_index.key_directions();
		let sec_index_val_dirs = indexes.iter().map(IndexDef::key_directions).collect();

		let sorted_column_families = table
			.families
			.iter()
			.map(|family| {
				let mut columns = family.column_ids.clone();
				columns.sort();
				(family.id, columns)
			})
			.collect();

		let primary_key_cols = table.primary_index.key_column_ids().collect();

		Self {
			table,
			indexes,
			config,
			prim_index_val_dirs,
			sec_index_val_dirs,
			sorted_column_families,
			primary_key_cols,
		}
	}

	pub fn table(&self) -> &TableDef {
		&self.table
	}

	pub fn indexes(&self) -> &[IndexDef] {
		&self.indexes
	}

	pub fn config(&self) -> &RowConfig {
		&self.config
	}

	pub fn primary_index_directions(&self) -> &[SortDirection] {
		&self.prim_index_val_dirs
	}

	/// Key directions of the i-th maintained secondary index.
	pub fn secondary_index_directions(&self, idx: usize) -> &[SortDirection] {
		self.sec_index_val_dirs.get(idx).map(|d| d.as_slice()).unwrap_or(&[])
	}

	/// Looks up the value of a column that must have been fetched.
	pub(crate) fn required_value<'v>(
		&self,
		col_map: &ColumnIdMap,
		values: &'v [Value],
		column: ColumnId,
	) -> crate::Result<&'v Value> {
		let def = self.table.find_column_by_id(column)?;
		let value = col_map.get(column).and_then(|idx| values.get(idx)).ok_or_else(|| {
			EncodingError::MissingColumn {
				column,
				column_name: def.name.clone(),
			}
		})?;
		def.check_value(value)?;
		Ok(value)
	}

	/// Looks up the value of a column that may not have been fetched.
	pub(crate) fn optional_value<'v>(
		&self,
		col_map: &ColumnIdMap,
		values: &'v [Value],
		column: ColumnId,
	) -> crate::Result<Option<&'v Value>> {
		let Some(value) = col_map.get(column).and_then(|idx| values.get(idx)) else {
			return Ok(None);
		};
		self.table.find_column_by_id(column)?.check_value(value)?;
		Ok(Some(value))
	}

	/// Clears `buf` and writes the primary index key of the row into it.
	pub fn encode_primary_index_key_into(
		&self,
		buf: &mut Vec<u8>,
		col_map: &ColumnIdMap,
		values: &[Value],
	) -> crate::Result<()> {
		buf.clear();
		IndexKey::new(self.table.id, self.table.primary_index.id).encode_into(buf);
		for column in &self.table.primary_index.key_columns {
			let value = self.required_value(col_map, values, column.column)?;
			encode_value(buf, value, column.direction);
		}
		Ok(())
	}

	/// Column ids of a family in ascending order.
	pub fn sorted_column_family(&self, family: FamilyId) -> Option<&[ColumnId]> {
		self.sorted_column_families.get(&family).map(Vec::as_slice)
	}

	/// Primary key columns live in the key and are left out of the value,
	/// unless a composite value cannot be recovered from its key encoding.
	pub fn skip_column_not_in_primary_index_value(&self, column: ColumnId, value: &Value) -> bool {
		if !self.primary_key_cols.contains(&column) {
			return false;
		}
		let composite = self.table.find_column_by_id(column).map(|c| c.ty.is_composite()).unwrap_or(false);
		if !composite {
			return true;
		}
		match value {
			Value::Float8(v) => !v.is_negative_zero(),
			_ => true,
		}
	}

	/// Appends the tuple encoding of the fetched, stored, non NULL columns
	/// of `sorted_cols` to `buf`.
	pub fn encode_primary_index_values_to_buf(
		&self,
		buf: &mut Vec<u8>,
		col_map: &ColumnIdMap,
		values: &[Value],
		sorted_cols: &[ColumnId],
	) -> crate::Result<()> {
		let mut last = ColumnId(0);
		for &column in sorted_cols {
			let Some(value) = self.optional_value(col_map, values, column)? else {
				continue;
			};
			if self.skip_column_not_in_primary_index_value(column, value) || value.is_undefined() {
				continue;
			}
			encode_tuple_column(buf, column.0 - last.0, value);
			last = column;
		}
		Ok(())
	}

	/// Queues the removal of one secondary index entry.
	pub fn delete_index_entry<B: MutationBatch>(
		&self,
		batch: &mut B,
		directions: &[SortDirection],
		entry: &IndexEntry,
		trace_kv: bool,
	) -> crate::Result<()> {
		if trace_kv {
			debug!("Del {}", render_index_key(&entry.key, directions));
		}
		batch.remove(&entry.key)
	}

	/// Rejects rows whose key plus value exceed the configured maximum.
	pub fn check_row_size(&self, key: &EncodedKey, value_len: usize, family: FamilyId) -> crate::Result<()> {
		let size = key.len() + value_len;

		if let Some(max) = self.config.large_row_warn_bytes
			&& size > max
		{
			warn!(
				table = %self.table.name,
				family = %family,
				size,
				max,
				key = %render_index_key(key, &self.prim_index_val_dirs),
				"large row"
			);
		}

		if let Some(max) = self.config.large_row_error_bytes
			&& size > max
			&& !self.config.internal
		{
			return Err(EncodingError::RowTooLarge {
				table_name: self.table.name.clone(),
				size,
				max,
			}
			.into());
		}
		Ok(())
	}
}
