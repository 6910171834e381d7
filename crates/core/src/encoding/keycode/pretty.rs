// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::fmt::Write;

use tessera_type::util::hex;

use super::KeyDeserializer;
use crate::{
	interface::catalog::SortDirection,
	key::{FAMILY_SUFFIX_LEN, IndexKey},
};

/// Renders an index key as `/Table/{table}/{index}/{values..}[/{family}]`
/// for trace output. Values are decoded with `directions` until exactly a
/// family suffix is left; anything that cannot be decoded is shown as hex.
pub fn render_index_key(key: &[u8], directions: &[SortDirection]) -> String {
	let Some((prefix, rest)) = IndexKey::split(key) else {
		return format!("/{}", hex::encode(key));
	};

	let mut out = format!("/Table/{}/{}", prefix.table, prefix.index);
	let mut de = KeyDeserializer::from_bytes(rest);

	for direction in directions {
		let remaining = de.remaining().len();
		if remaining == 0 || remaining == FAMILY_SUFFIX_LEN {
			break;
		}
		let before = de.remaining();
		match de.read_value(*direction) {
			Ok(value) => {
				let _ = write!(out, "/{value}");
			}
			Err(_) => {
				de = KeyDeserializer::from_bytes(before);
				break;
			}
		}
	}

	let remaining = de.remaining();
	if remaining.len() == FAMILY_SUFFIX_LEN {
		let mut bytes = [0u8; FAMILY_SUFFIX_LEN];
		bytes.copy_from_slice(remaining);
		let _ = write!(out, "/{}", u32::from_be_bytes(bytes));
	} else if !remaining.is_empty() {
		let _ = write!(out, "/{}", hex::encode(remaining));
	}
	out
}
