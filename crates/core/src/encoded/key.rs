// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::{
	fmt::{Debug, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};
use tessera_type::{CowVec, util::hex};

/// A fully encoded storage key. Once built it is immutable; every key queued
/// on a batch owns (or shares) its own bytes.
#[derive(Clone, PartialOrd, Ord, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedKey(pub CowVec<u8>);

impl Deref for EncodedKey {
	type Target = CowVec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(CowVec::new(key.into()))
	}

	/// Copies the bytes so that later writes to `bytes`' buffer cannot
	/// reach the key.
	pub fn snapshot(bytes: &[u8]) -> Self {
		Self(CowVec::from(bytes))
	}

	pub fn starts_with(&self, prefix: &[u8]) -> bool {
		self.as_slice().starts_with(prefix)
	}
}

impl Debug for EncodedKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "EncodedKey({})", hex::encode(self.as_slice()))
	}
}

#[cfg(test)]
mod tests {
	use super::EncodedKey;

	#[test]
	fn test_snapshot_is_independent() {
		let mut buf = vec![1u8, 2, 3];
		let key = EncodedKey::snapshot(&buf);
		buf.truncate(1);
		buf.extend_from_slice(&[9, 9]);
		assert_eq!(key.as_slice(), &[1, 2, 3]);
	}

	#[test]
	fn test_ordering_is_bytewise() {
		assert!(EncodedKey::new(vec![0x01, 0xff]) < EncodedKey::new(vec![0x02]));
		assert!(EncodedKey::new(vec![0x01]) < EncodedKey::new(vec![0x01, 0x00]));
	}

	#[test]
	fn test_debug_is_hex() {
		assert_eq!(format!("{:?}", EncodedKey::new(vec![0xab, 0x01])), "EncodedKey(ab01)");
	}
}
