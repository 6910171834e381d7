// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

//! Table definitions shared by the row mutation tests.

use std::sync::Arc;

use tessera_core::interface::{
	ColumnDef, FamilyDef, IndexColumn, IndexDef, IndexId, IndexState, PRIMARY_INDEX_ID, TableDef, TableId,
};
use tessera_type::{Type, Value};

pub const TABLE_ID: TableId = TableId(51);

/// Secondary index on `b` of [`abc_table`].
pub const BY_B: IndexId = IndexId(2);

/// `t(a INT8 PRIMARY KEY, b UTF8, c INT8)` with an index on `b` and the
/// families `primary(a, b)` and `f1(c)`.
pub fn abc_table() -> Arc<TableDef> {
	Arc::new(TableDef {
		id: TABLE_ID,
		name: "t".to_string(),
		columns: vec![
			ColumnDef::new(1u32, "a", Type::Int8).not_null(),
			ColumnDef::new(2u32, "b", Type::Utf8),
			ColumnDef::new(3u32, "c", Type::Int8),
		],
		primary_index: IndexDef::new(PRIMARY_INDEX_ID, "primary", vec![IndexColumn::asc(1u32)]),
		indexes: vec![IndexDef::new(BY_B, "t_b_idx", vec![IndexColumn::asc(2u32)]).with_key_suffix([1u32])],
		families: vec![FamilyDef::new(0u32, "primary", [1u32, 2u32]), FamilyDef::new(1u32, "f1", [3u32])],
	})
}

pub mod wide {
	use super::*;

	pub const BY_B: IndexId = IndexId(2);
	pub const BY_C_STORING: IndexId = IndexId(3);
	pub const UNIQUE_B_C: IndexId = IndexId(4);
	pub const DROPPING_D: IndexId = IndexId(5);
	pub const PARTIAL_C: IndexId = IndexId(6);

	/// `w(a INT8, b UTF8, c INT8, d FLOAT8, e BLOB)` keyed on `(a, d DESC)`
	/// with:
	/// * `by_b` on `b`,
	/// * `by_c_storing` on `c DESC` storing `e` (covering),
	/// * `unique_b_c` unique on `(b, c)`,
	/// * `dropping_d` on `d`, delete only,
	/// * `partial_c` on `c` with a predicate,
	///
	/// and the families `primary(a, b)`, `f1(c)` with default column `c`,
	/// `f2(d, e)` declared out of order.
	pub fn table() -> Arc<TableDef> {
		let suffix = [1u32, 4u32];
		Arc::new(TableDef {
			id: TableId(52),
			name: "w".to_string(),
			columns: vec![
				ColumnDef::new(1u32, "a", Type::Int8).not_null(),
				ColumnDef::new(2u32, "b", Type::Utf8),
				ColumnDef::new(3u32, "c", Type::Int8),
				ColumnDef::new(4u32, "d", Type::Float8).not_null(),
				ColumnDef::new(5u32, "e", Type::Blob),
			],
			primary_index: IndexDef::new(
				PRIMARY_INDEX_ID,
				"primary",
				vec![IndexColumn::asc(1u32), IndexColumn::desc(4u32)],
			),
			indexes: vec![
				IndexDef::new(BY_B, "by_b", vec![IndexColumn::asc(2u32)]).with_key_suffix(suffix),
				IndexDef::new(BY_C_STORING, "by_c_storing", vec![IndexColumn::desc(3u32)])
					.with_key_suffix(suffix)
					.with_store([5u32]),
				IndexDef::new(UNIQUE_B_C, "unique_b_c", vec![IndexColumn::asc(2u32), IndexColumn::asc(3u32)])
					.with_key_suffix(suffix)
					.unique(),
				IndexDef::new(DROPPING_D, "dropping_d", vec![IndexColumn::asc(4u32)])
					.with_key_suffix([1u32])
					.with_state(IndexState::DeleteOnly),
				IndexDef::new(PARTIAL_C, "partial_c", vec![IndexColumn::asc(3u32)]).with_key_suffix(suffix).partial(),
			],
			families: vec![
				FamilyDef::new(2u32, "f2", [5u32, 4u32]),
				FamilyDef::new(0u32, "primary", [1u32, 2u32]),
				FamilyDef::new(1u32, "f1", [3u32]).with_default_column(3u32),
			],
		})
	}

	/// A row of [`table`] in column order.
	pub fn row(a: i64, b: Option<&str>, c: Option<i64>, d: f64, e: Option<&[u8]>) -> Vec<Value> {
		vec![
			Value::Int8(a),
			b.map(Value::utf8).unwrap_or(Value::Undefined),
			c.map(Value::Int8).unwrap_or(Value::Undefined),
			Value::float8(d),
			e.map(Value::blob).unwrap_or(Value::Undefined),
		]
	}
}
