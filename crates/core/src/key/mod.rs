// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

mod family;
mod index;

pub use family::{FAMILY_SUFFIX_LEN, append_family_suffix, make_family_key};
pub use index::IndexKey;

use crate::EncodedKey;

/// Version byte leading every key.
pub const KEY_VERSION: u8 = 1;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyKind {
	Index = 0x01,
}

impl TryFrom<u8> for KeyKind {
	type Error = u8;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0x01 => Ok(KeyKind::Index),
			other => Err(other),
		}
	}
}

pub trait EncodableKey {
	const KIND: KeyKind;

	fn encode(&self) -> EncodedKey;

	fn decode(key: &EncodedKey) -> Option<Self>
	where
		Self: Sized;
}
