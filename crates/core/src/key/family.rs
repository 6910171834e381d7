// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use crate::{EncodedKey, interface::catalog::FamilyId};

/// Width of the family id appended to a primary or covering index key.
pub const FAMILY_SUFFIX_LEN: usize = 4;

pub fn append_family_suffix(buf: &mut Vec<u8>, family: FamilyId) {
	buf.extend_from_slice(&family.0.to_be_bytes());
}

/// Returns a new key made of `prefix` followed by the family suffix.
pub fn make_family_key(prefix: &[u8], family: FamilyId) -> EncodedKey {
	let mut key = Vec::with_capacity(prefix.len() + FAMILY_SUFFIX_LEN);
	key.extend_from_slice(prefix);
	append_family_suffix(&mut key, family);
	EncodedKey::new(key)
}
