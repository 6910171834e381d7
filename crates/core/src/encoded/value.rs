// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::{
	fmt::{Debug, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};
use tessera_type::{CowVec, util::hex};

/// Value type tags. They occupy the low nibble of a tuple column header, so
/// every tag must stay below 16.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueTag {
	Int = 1,
	Uint = 2,
	Float = 3,
	Bytes = 4,
	Utf8 = 5,
	True = 6,
	False = 7,
	Tuple = 10,
}

impl TryFrom<u8> for ValueTag {
	type Error = u8;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(ValueTag::Int),
			2 => Ok(ValueTag::Uint),
			3 => Ok(ValueTag::Float),
			4 => Ok(ValueTag::Bytes),
			5 => Ok(ValueTag::Utf8),
			6 => Ok(ValueTag::True),
			7 => Ok(ValueTag::False),
			10 => Ok(ValueTag::Tuple),
			other => Err(other),
		}
	}
}

/// A stored value: `[tag]:[data]`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedValue(pub CowVec<u8>);

impl Deref for EncodedValue {
	type Target = CowVec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl EncodedValue {
	pub fn new(tag: ValueTag, data: &[u8]) -> Self {
		let mut bytes = Vec::with_capacity(1 + data.len());
		bytes.push(tag as u8);
		bytes.extend_from_slice(data);
		Self(CowVec::new(bytes))
	}

	pub fn tuple(data: &[u8]) -> Self {
		Self::new(ValueTag::Tuple, data)
	}

	pub fn tag(&self) -> Option<ValueTag> {
		self.0.first().and_then(|t| ValueTag::try_from(*t).ok())
	}

	pub fn data(&self) -> &[u8] {
		self.0.as_slice().get(1..).unwrap_or(&[])
	}

	/// The bytes compared by a conditional write.
	pub fn tag_and_data(&self) -> &[u8] {
		self.0.as_slice()
	}
}

impl Debug for EncodedValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "EncodedValue({:?}:{})", self.tag(), hex::encode(self.data()))
	}
}
