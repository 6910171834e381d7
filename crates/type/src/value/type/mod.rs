// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tessera

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All possible column types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A UTF-8 encoded text
	Utf8,
	/// A binary large object
	Blob,
	/// Value is not defined
	Undefined,
}

impl Type {
	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8)
	}

	/// Types whose key encoding can lose information that the value
	/// encoding keeps, e.g. the sign of a floating point zero.
	pub fn is_composite(&self) -> bool {
		matches!(self, Type::Float8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Int1 => f.write_str("INT1"),
			Type::Int2 => f.write_str("INT2"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Uint1 => f.write_str("UINT1"),
			Type::Uint2 => f.write_str("UINT2"),
			Type::Uint4 => f.write_str("UINT4"),
			Type::Uint8 => f.write_str("UINT8"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Blob => f.write_str("BLOB"),
			Type::Undefined => f.write_str("UNDEFINED"),
		}
	}
}
