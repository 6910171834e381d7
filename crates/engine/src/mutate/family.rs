// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use tessera_core::{
	EncodedValue,
	encoding::value::encode_legacy,
	interface::FamilyDef,
	row::{ColumnIdMap, RowHelper},
};
use tessera_type::{Value, return_internal_error};

/// The value a write of the row stores under `family`, or `None` when the
/// family key holds nothing. `buf` is scratch space and is cleared first.
pub(crate) fn encode_family_value(
	helper: &RowHelper,
	col_map: &ColumnIdMap,
	buf: &mut Vec<u8>,
	family: &FamilyDef,
	values: &[Value],
) -> crate::Result<Option<EncodedValue>> {
	if let Some(column) = family.single_default_column() {
		// An unfetched default column means there is nothing to compare.
		let Some(value) = col_map.get(column).and_then(|idx| values.get(idx)) else {
			return Ok(None);
		};
		helper.table().find_column_by_id(column)?.check_value(value)?;
		if helper.skip_column_not_in_primary_index_value(column, value) {
			return Ok(None);
		}
		return Ok(encode_legacy(value));
	}

	buf.clear();
	let Some(sorted) = helper.sorted_column_family(family.id) else {
		return_internal_error!("invalid family sorted column id map for family {}", family.id);
	};
	helper.encode_primary_index_values_to_buf(buf, col_map, values, sorted)?;

	// Family 0 marks that the row exists and is written even when empty.
	if family.id != 0 && buf.is_empty() {
		return Ok(None);
	}
	Ok(Some(EncodedValue::tuple(buf)))
}
