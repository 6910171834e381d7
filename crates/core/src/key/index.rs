// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use super::{EncodableKey, KEY_VERSION, KeyKind};
use crate::{
	EncodedKey,
	encoding::keycode::{KeyDeserializer, KeySerializer},
	interface::catalog::{IndexId, TableId},
};

/// `[version][kind][table u64][index u32]`, the prefix of every entry of
/// one index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexKey {
	pub table: TableId,
	pub index: IndexId,
}

impl IndexKey {
	pub const ENCODED_LEN: usize = 14;

	pub fn new(table: TableId, index: IndexId) -> Self {
		Self {
			table,
			index,
		}
	}

	/// Writes the prefix at the end of `buf`.
	pub fn encode_into(&self, buf: &mut Vec<u8>) {
		buf.reserve(Self::ENCODED_LEN);
		buf.push(KEY_VERSION);
		buf.push(Self::KIND as u8);
		buf.extend_from_slice(&self.table.0.to_be_bytes());
		buf.extend_from_slice(&self.index.0.to_be_bytes());
	}

	/// Splits `key` into its index prefix and the remaining bytes.
	pub fn split(key: &[u8]) -> Option<(Self, &[u8])> {
		let mut de = KeyDeserializer::from_bytes(key);

		let version = de.read_u8().ok()?;
		if version != KEY_VERSION {
			return None;
		}

		let kind: KeyKind = de.read_u8().ok()?.try_into().ok()?;
		if kind != Self::KIND {
			return None;
		}

		let table = TableId(de.read_u64().ok()?);
		let index = IndexId(de.read_u32().ok()?);
		Some((Self::new(table, index), de.remaining()))
	}
}

impl EncodableKey for IndexKey {
	const KIND: KeyKind = KeyKind::Index;

	fn encode(&self) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(Self::ENCODED_LEN);
		serializer.extend_u8(KEY_VERSION).extend_u8(Self::KIND as u8).extend_u64(self.table).extend_u32(self.index);
		serializer.to_encoded_key()
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		IndexKey::split(key.as_slice()).map(|(prefix, _)| prefix)
	}
}
