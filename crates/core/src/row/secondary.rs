// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

//! Secondary index entries.
//!
//! The key is the index prefix followed by the key columns. Key suffix
//! columns follow in the key for non unique indexes and for unique indexes
//! where a key column is NULL (NULLs never collide); otherwise they are
//! stored in the value.
//!
//! The family 0 value is `uvarint(len)` and the key encoded suffix (empty
//! when the suffix lives in the key), then the tuple of stored columns.
//! Covering indexes on tables with several families split the stored
//! columns into one entry per family, suffixed like primary family keys;
//! entries other than family 0 hold only their stored columns and exist only
//! for families that contain a stored column.

use tessera_type::Value;

use crate::{
	EncodedKey, EncodedValue,
	encoding::{
		keycode::encode_value,
		value::{encode_tuple_column, put_uvarint},
	},
	interface::catalog::{ColumnId, FamilyId, IndexDef, SortDirection},
	key::{IndexKey, append_family_suffix},
	row::{ColumnIdMap, RowHelper},
};

#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
	pub key: EncodedKey,
	pub value: EncodedValue,
	pub family: FamilyId,
}

impl RowHelper {
	/// Every entry `index` holds for the row. With `include_empty`, families
	/// whose stored columns are all NULL or unfetched still produce an
	/// entry, which is what a delete needs to be sure nothing is left
	/// behind.
	pub fn encode_secondary_index(
		&self,
		index: &IndexDef,
		col_map: &ColumnIdMap,
		values: &[Value],
		include_empty: bool,
	) -> crate::Result<Vec<IndexEntry>> {
		let table = self.table();

		let mut key = Vec::new();
		IndexKey::new(table.id, index.id).encode_into(&mut key);

		let mut contains_null = false;
		for column in &index.key_columns {
			let value = self.required_value(col_map, values, column.column)?;
			contains_null |= value.is_undefined();
			encode_value(&mut key, value, column.direction);
		}

		let suffix_in_key = !index.unique || contains_null;
		let mut unique_suffix = Vec::new();
		for &column in &index.key_suffix_columns {
			let value = self.required_value(col_map, values, column)?;
			if suffix_in_key {
				encode_value(&mut key, value, SortDirection::Asc);
			} else {
				encode_value(&mut unique_suffix, value, SortDirection::Asc);
			}
		}

		let mut family_zero = Vec::new();
		put_uvarint(&mut family_zero, unique_suffix.len() as u64);
		family_zero.extend_from_slice(&unique_suffix);

		if index.store_columns.is_empty() || table.families.len() == 1 {
			let mut stored = index.store_columns.clone();
			stored.sort();
			self.encode_stored_columns(&mut family_zero, col_map, values, &stored)?;
			return Ok(vec![IndexEntry {
				key: EncodedKey::new(key),
				value: EncodedValue::tuple(&family_zero),
				family: FamilyId(0),
			}]);
		}

		let key_len = key.len();
		let mut entries = Vec::new();
		for family in table.families_by_id() {
			let mut stored: Vec<ColumnId> =
				family.column_ids.iter().copied().filter(|c| index.store_columns.contains(c)).collect();
			stored.sort();
			if family.id != 0 && stored.is_empty() {
				continue;
			}

			let mut data = if family.id == 0 {
				family_zero.clone()
			} else {
				Vec::new()
			};
			self.encode_stored_columns(&mut data, col_map, values, &stored)?;

			if family.id != 0 && data.is_empty() && !include_empty {
				continue;
			}

			key.truncate(key_len);
			append_family_suffix(&mut key, family.id);
			entries.push(IndexEntry {
				key: EncodedKey::snapshot(&key),
				value: EncodedValue::tuple(&data),
				family: family.id,
			});
		}
		Ok(entries)
	}

	fn encode_stored_columns(
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
			if value.is_undefined() {
				continue;
			}
			encode_tuple_column(buf, column.0 - last.0, value);
			last = column;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use tessera_type::Type;

	use super::*;
	use crate::{
		interface::catalog::{ColumnDef, FamilyDef, IndexColumn, PRIMARY_INDEX_ID, TableDef, TableId},
		key::FAMILY_SUFFIX_LEN,
		row::RowConfig,
	};

	fn table(families: Vec<FamilyDef>) -> Arc<TableDef> {
		Arc::new(TableDef {
			id: TableId(51),
			name: "t".to_string(),
			columns: vec![
				ColumnDef::new(1u32, "a", Type::Int8),
				ColumnDef::new(2u32, "b", Type::Utf8),
				ColumnDef::new(3u32, "c", Type::Int8),
			],
			primary_index: IndexDef::new(PRIMARY_INDEX_ID, "primary", vec![IndexColumn::asc(1u32)]),
			indexes: vec![],
			families,
		})
	}

	fn two_families() -> Vec<FamilyDef> {
		vec![FamilyDef::new(0u32, "primary", [1u32, 2u32]), FamilyDef::new(1u32, "f1", [3u32])]
	}

	fn encode(
		table: Arc<TableDef>,
		index: &IndexDef,
		values: &[Value],
		include_empty: bool,
	) -> crate::Result<Vec<IndexEntry>> {
		let col_map = ColumnIdMap::from_columns(&table.columns);
		let helper = RowHelper::new(table, vec![index.clone()], RowConfig::default());
		helper.encode_secondary_index(index, &col_map, values, include_empty)
	}

	fn prefix(index: u32) -> Vec<u8> {
		let mut buf = Vec::new();
		IndexKey::new(TableId(51), crate::interface::catalog::IndexId(index)).encode_into(&mut buf);
		buf
	}

	#[test]
	fn test_non_unique_appends_suffix_to_key() {
		let index = IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)]).with_key_suffix([1u32]);
		let entries =
			encode(table(two_families()), &index, &[Value::Int8(1), Value::utf8("x"), Value::Undefined], true)
				.unwrap();

		let mut expected = prefix(2);
		encode_value(&mut expected, &Value::utf8("x"), SortDirection::Asc);
		encode_value(&mut expected, &Value::Int8(1), SortDirection::Asc);

		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].key.as_slice(), expected.as_slice());
		assert_eq!(entries[0].family, FamilyId(0));
		assert_eq!(entries[0].value.data(), &[0x00]);
	}

	#[test]
	fn test_unique_stores_suffix_in_value() {
		let index = IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)]).with_key_suffix([1u32]).unique();
		let entries =
			encode(table(two_families()), &index, &[Value::Int8(1), Value::utf8("x"), Value::Undefined], true)
				.unwrap();

		let mut expected_key = prefix(2);
		encode_value(&mut expected_key, &Value::utf8("x"), SortDirection::Asc);
		assert_eq!(entries[0].key.as_slice(), expected_key.as_slice());

		let mut suffix = Vec::new();
		encode_value(&mut suffix, &Value::Int8(1), SortDirection::Asc);
		assert_eq!(entries[0].value.data()[0] as usize, suffix.len());
		assert_eq!(&entries[0].value.data()[1..], suffix.as_slice());
	}

	#[test]
	fn test_unique_with_null_keeps_suffix_in_key() {
		let index = IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)]).with_key_suffix([1u32]).unique();
		let entries =
			encode(table(two_families()), &index, &[Value::Int8(1), Value::Undefined, Value::Undefined], true)
				.unwrap();

		let mut expected = prefix(2);
		encode_value(&mut expected, &Value::Undefined, SortDirection::Asc);
		encode_value(&mut expected, &Value::Int8(1), SortDirection::Asc);
		assert_eq!(entries[0].key.as_slice(), expected.as_slice());
		assert_eq!(entries[0].value.data(), &[0x00]);
	}

	#[test]
	fn test_covering_index_splits_families() {
		let index = IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)])
			.with_key_suffix([1u32])
			.with_store([3u32]);
		let values = [Value::Int8(1), Value::utf8("x"), Value::Undefined];

		let without_empty = encode(table(two_families()), &index, &values, false).unwrap();
		assert_eq!(without_empty.len(), 1);
		assert_eq!(without_empty[0].family, FamilyId(0));

		let with_empty = encode(table(two_families()), &index, &values, true).unwrap();
		assert_eq!(with_empty.len(), 2);
		assert_eq!(with_empty[1].family, FamilyId(1));
		assert!(with_empty[1].value.data().is_empty());

		let base = &with_empty[0].key.as_slice()[..with_empty[0].key.len() - FAMILY_SUFFIX_LEN];
		assert!(with_empty[1].key.starts_with(base));
		assert_eq!(with_empty[0].key.len(), with_empty[1].key.len());
	}

	#[test]
	fn test_covering_index_with_value() {
		let index = IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)])
			.with_key_suffix([1u32])
			.with_store([3u32]);
		let entries =
			encode(table(two_families()), &index, &[Value::Int8(1), Value::utf8("x"), Value::Int8(7)], false)
				.unwrap();
		assert_eq!(entries.len(), 2);
		// (3 << 4) | Int, then 7
		assert_eq!(entries[1].value.data(), &[0x31, 0, 0, 0, 0, 0, 0, 0, 7]);
	}

	#[test]
	fn test_single_family_table_stores_inline() {
		let index = IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)])
			.with_key_suffix([1u32])
			.with_store([3u32]);
		let families = vec![FamilyDef::new(0u32, "primary", [1u32, 2u32, 3u32])];
		let entries =
			encode(table(families), &index, &[Value::Int8(1), Value::utf8("x"), Value::Int8(7)], false).unwrap();
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].value.data(), &[0x00, 0x31, 0, 0, 0, 0, 0, 0, 0, 7]);
	}

	#[test]
	fn test_missing_key_column() {
		let index = IndexDef::new(2u32, "by_b", vec![IndexColumn::asc(2u32)]).with_key_suffix([1u32]);
		let table = table(two_families());
		let helper = RowHelper::new(table.clone(), vec![index.clone()], RowConfig::default());
		let col_map = ColumnIdMap::from_columns(&table.columns[..1]);

		let err = helper.encode_secondary_index(&index, &col_map, &[Value::Int8(1)], true).unwrap_err();
		assert_eq!(err.code(), "ENCODING_001");
	}
}
