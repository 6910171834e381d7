// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::sync::Arc;

use tessera_core::{
	EncodedKey, EncodedValue,
	encoding::keycode::render_index_key,
	interface::{ColumnDef, ColumnId, FamilyId, MutationBatch, TableDef},
	key::append_family_suffix,
	row::{ColumnIdMap, RowConfig, RowHelper},
};
use tessera_type::{Value, util::hex};
use tracing::{debug, instrument};

use super::{DeleteMode, PartialIndexUpdateHelper, family::encode_family_value};

/// Turns the deletion of a row into the removal of every key the row was
/// written under: its secondary index entries and one key per column
/// family.
///
/// A deleter holds scratch buffers reused across rows and must not be
/// shared between concurrent row deletions.
#[derive(Debug)]
pub struct Deleter {
	helper: RowHelper,
	fetch_cols: Vec<ColumnDef>,
	fetch_col_map: ColumnIdMap,

	key_buf: Vec<u8>,
	value_buf: Vec<u8>,
}

impl Deleter {
	/// Without `requested`, the deleter fetches the primary key columns and
	/// the key and key suffix columns of every secondary index, each once.
	/// A requested column list is used as given.
	pub fn new(table: Arc<TableDef>, requested: Option<&[ColumnDef]>, config: RowConfig) -> crate::Result<Self> {
		let indexes = table.deletable_secondary_indexes();

		let (fetch_cols, fetch_col_map) = match requested {
			Some(columns) => (columns.to_vec(), ColumnIdMap::from_columns(columns)),
			None => {
				let mut fetch_cols = Vec::new();
				let mut fetch_col_map = ColumnIdMap::new();

				let needed = table
					.primary_index
					.key_column_ids()
					.chain(indexes.iter().flat_map(|index| {
						index.key_column_ids().chain(index.key_suffix_columns.iter().copied())
					}))
					.collect::<Vec<ColumnId>>();

				for id in needed {
					if fetch_col_map.contains(id) {
						continue;
					}
					let column = table.find_column_by_id(id)?;
					fetch_col_map.set(id, fetch_cols.len());
					fetch_cols.push(column.clone());
				}
				(fetch_cols, fetch_col_map)
			}
		};

		Ok(Self {
			helper: RowHelper::new(table, indexes, config),
			fetch_cols,
			fetch_col_map,
			key_buf: Vec::new(),
			value_buf: Vec::new(),
		})
	}

	/// Columns `delete_row` expects values for, in order.
	pub fn fetch_cols(&self) -> &[ColumnDef] {
		&self.fetch_cols
	}

	pub fn fetch_col_map(&self) -> &ColumnIdMap {
		&self.fetch_col_map
	}

	pub fn helper(&self) -> &RowHelper {
		&self.helper
	}

	/// Queues on `batch` the removal of everything the row with `values`
	/// (ordered as [`Deleter::fetch_cols`]) was stored under. Secondary
	/// index entries come first, then the family keys in ascending family
	/// id order.
	#[instrument(name = "mutate::delete_row", level = "trace", skip_all, fields(table = %self.helper.table().name))]
	pub fn delete_row<B: MutationBatch>(
		&mut self,
		batch: &mut B,
		values: &[Value],
		partial_index: &PartialIndexUpdateHelper,
		mode: DeleteMode,
		trace_kv: bool,
	) -> crate::Result<()> {
		for (idx, index) in self.helper.indexes().iter().enumerate() {
			if partial_index.ignore_for_del.contains(&index.id) {
				continue;
			}

			// Entries without a value are included so that covering
			// families are removed even when they were never fetched.
			let entries = self.helper.encode_secondary_index(index, &self.fetch_col_map, values, true)?;
			let directions = self.helper.secondary_index_directions(idx);
			for entry in &entries {
				self.helper.delete_index_entry(batch, directions, entry, trace_kv)?;
			}
		}

		self.delete_primary_index_families(batch, values, mode, trace_kv)
	}

	fn delete_primary_index_families<B: MutationBatch>(
		&mut self,
		batch: &mut B,
		values: &[Value],
		mode: DeleteMode,
		trace_kv: bool,
	) -> crate::Result<()> {
		let helper = &self.helper;
		helper.encode_primary_index_key_into(&mut self.key_buf, &self.fetch_col_map, values)?;
		let primary_key_len = self.key_buf.len();

		for family in helper.table().families_by_id() {
			self.key_buf.truncate(primary_key_len);
			append_family_suffix(&mut self.key_buf, family.id);
			let key = EncodedKey::snapshot(&self.key_buf);

			match mode {
				DeleteMode::Unconditional => {
					if trace_kv {
						debug!("Del {}", render_index_key(&key, helper.primary_index_directions()));
					}
					batch.remove(&key)?;
				}
				DeleteMode::ConditionalOnPriorValue {
					origin,
					previous_was_tombstone,
				} => {
					let expected = if previous_was_tombstone {
						None
					} else {
						encode_family_value(
							helper,
							&self.fetch_col_map,
							&mut self.value_buf,
							family,
							values,
						)?
					};

					if trace_kv {
						debug!(
							"CDel {} (expected {})",
							render_index_key(&key, helper.primary_index_directions()),
							expected.as_ref().map(|v| hex::encode(v.tag_and_data())).unwrap_or_else(
								|| "<absent>".to_string()
							)
						);
					}
					batch.remove_if(&key, expected.as_ref().map(EncodedValue::tag_and_data), origin)?;
				}
			}
		}
		Ok(())
	}

	/// The value a write of the row stores under `family`, as compared by a
	/// conditional delete. `None` when nothing is stored or nothing can be
	/// compared.
	pub fn encode_value_for_primary_index_family(
		&mut self,
		family: FamilyId,
		values: &[Value],
	) -> crate::Result<Option<EncodedValue>> {
		let family = self.helper.table().find_family_by_id(family)?;
		encode_family_value(&self.helper, &self.fetch_col_map, &mut self.value_buf, family, values)
	}
}
