// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tessera

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod ordered_f64;
mod r#type;

pub use ordered_f64::OrderedF64;
pub use r#type::Type;

/// A column value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A binary large object
	Blob(Vec<u8>),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	/// Returns `Value::Undefined` for NaN.
	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn blob(v: impl Into<Vec<u8>>) -> Self {
		Value::Blob(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Utf8(_) => Type::Utf8,
			Value::Blob(_) => Type::Blob,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Int1(v) => Display::fmt(v, f),
			Value::Int2(v) => Display::fmt(v, f),
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Uint1(v) => Display::fmt(v, f),
			Value::Uint2(v) => Display::fmt(v, f),
			Value::Uint4(v) => Display::fmt(v, f),
			Value::Uint8(v) => Display::fmt(v, f),
			Value::Utf8(v) => write!(f, "\"{v}\""),
			Value::Blob(v) => write!(f, "0x{}", crate::util::hex::encode(v)),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i8> for Value {
	fn from(v: i8) -> Self {
		Value::Int1(v)
	}
}

impl From<i16> for Value {
	fn from(v: i16) -> Self {
		Value::Int2(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int4(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<u8> for Value {
	fn from(v: u8) -> Self {
		Value::Uint1(v)
	}
}

impl From<u16> for Value {
	fn from(v: u16) -> Self {
		Value::Uint2(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::Uint4(v)
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::Uint8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Undefined)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nan_is_undefined() {
		assert_eq!(Value::float8(f64::NAN), Value::Undefined);
	}

	#[test]
	fn test_option_into_value() {
		assert_eq!(Value::from(None::<i64>), Value::Undefined);
		assert_eq!(Value::from(Some(3i64)), Value::Int8(3));
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::utf8("x").to_string(), "\"x\"");
		assert_eq!(Value::blob(vec![0xab]).to_string(), "0xab");
		assert_eq!(Value::Int4(-2).to_string(), "-2");
	}
}
