// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

//! Value side encoding of primary index families and covering index entries.
//!
//! A family holding a single default column stores that column bare:
//! `[tag][payload]`. Every other family stores a tuple: for each non NULL
//! column in ascending column id order a header
//! `uvarint(column id delta << 4 | tag)` followed by the payload. Integers
//! and floats are 8 bytes big-endian, strings and blobs are length prefixed
//! in the tuple form, booleans are carried in the tag alone.

mod varint;

pub use varint::{get_uvarint, put_uvarint};
use tessera_type::Value;

use crate::{
	encoded::{EncodedValue, ValueTag},
	error::EncodingError,
	interface::catalog::ColumnId,
};

/// The tag a non NULL value is stored with.
pub fn value_tag(value: &Value) -> Option<ValueTag> {
	Some(match value {
		Value::Undefined => return None,
		Value::Boolean(true) => ValueTag::True,
		Value::Boolean(false) => ValueTag::False,
		Value::Int1(_) | Value::Int2(_) | Value::Int4(_) | Value::Int8(_) => ValueTag::Int,
		Value::Uint1(_) | Value::Uint2(_) | Value::Uint4(_) | Value::Uint8(_) => ValueTag::Uint,
		Value::Float8(_) => ValueTag::Float,
		Value::Utf8(_) => ValueTag::Utf8,
		Value::Blob(_) => ValueTag::Bytes,
	})
}

fn fixed_payload(value: &Value) -> Option<[u8; 8]> {
	Some(match value {
		Value::Int1(v) => (*v as i64).to_be_bytes(),
		Value::Int2(v) => (*v as i64).to_be_bytes(),
		Value::Int4(v) => (*v as i64).to_be_bytes(),
		Value::Int8(v) => v.to_be_bytes(),
		Value::Uint1(v) => (*v as u64).to_be_bytes(),
		Value::Uint2(v) => (*v as u64).to_be_bytes(),
		Value::Uint4(v) => (*v as u64).to_be_bytes(),
		Value::Uint8(v) => v.to_be_bytes(),
		Value::Float8(v) => v.value().to_bits().to_be_bytes(),
		_ => return None,
	})
}

/// Bare encoding of a single default column family. NULL is never stored.
pub fn encode_legacy(value: &Value) -> Option<EncodedValue> {
	let tag = value_tag(value)?;
	Some(match value {
		Value::Utf8(v) => EncodedValue::new(tag, v.as_bytes()),
		Value::Blob(v) => EncodedValue::new(tag, v),
		Value::Boolean(_) => EncodedValue::new(tag, &[]),
		other => EncodedValue::new(tag, &fixed_payload(other)?),
	})
}

/// Appends one tuple column. `column_delta` is the distance to the previous
/// encoded column id (or to zero for the first one). NULL writes nothing.
pub fn encode_tuple_column(buf: &mut Vec<u8>, column_delta: u32, value: &Value) {
	let Some(tag) = value_tag(value) else {
		return;
	};
	put_uvarint(buf, ((column_delta as u64) << 4) | tag as u64);

	match value {
		Value::Utf8(v) => {
			put_uvarint(buf, v.len() as u64);
			buf.extend_from_slice(v.as_bytes());
		}
		Value::Blob(v) => {
			put_uvarint(buf, v.len() as u64);
			buf.extend_from_slice(v);
		}
		other => {
			if let Some(payload) = fixed_payload(other) {
				buf.extend_from_slice(&payload);
			}
		}
	}
}

/// Decodes the data of a tuple value back into column ids and values.
/// Integers come back widened to `Int8` / `Uint8`.
pub fn decode_tuple(mut data: &[u8]) -> Result<Vec<(ColumnId, Value)>, EncodingError> {
	let invalid = |reason: &str| EncodingError::InvalidValue {
		reason: reason.to_string(),
	};

	let mut result = Vec::new();
	let mut column = 0u32;

	while !data.is_empty() {
		let (header, read) = get_uvarint(data).ok_or_else(|| invalid("truncated column header"))?;
		data = &data[read..];

		let delta = u32::try_from(header >> 4).map_err(|_| invalid("column id overflow"))?;
		column = column.checked_add(delta).ok_or_else(|| invalid("column id overflow"))?;
		let tag = ValueTag::try_from((header & 0x0f) as u8).map_err(|_| invalid("unknown value tag"))?;

		let value = match tag {
			ValueTag::True => Value::Boolean(true),
			ValueTag::False => Value::Boolean(false),
			ValueTag::Int | ValueTag::Uint | ValueTag::Float => {
				if data.len() < 8 {
					return Err(invalid("truncated fixed width payload"));
				}
				let mut bytes = [0u8; 8];
				bytes.copy_from_slice(&data[..8]);
				data = &data[8..];
				match tag {
					ValueTag::Int => Value::Int8(i64::from_be_bytes(bytes)),
					ValueTag::Uint => Value::Uint8(u64::from_be_bytes(bytes)),
					_ => Value::float8(f64::from_bits(u64::from_be_bytes(bytes))),
				}
			}
			ValueTag::Utf8 | ValueTag::Bytes => {
				let (len, read) = get_uvarint(data).ok_or_else(|| invalid("truncated length"))?;
				data = &data[read..];
				let len = usize::try_from(len).map_err(|_| invalid("length overflow"))?;
				if data.len() < len {
					return Err(invalid("truncated variable width payload"));
				}
				let (bytes, rest) = data.split_at(len);
				data = rest;
				if tag == ValueTag::Utf8 {
					let s = std::str::from_utf8(bytes).map_err(|_| invalid("invalid utf8"))?;
					Value::utf8(s)
				} else {
					Value::blob(bytes)
				}
			}
			ValueTag::Tuple => return Err(invalid("nested tuple")),
		};

		result.push((ColumnId(column), value));
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use tessera_type::util::hex;

	use super::*;

	#[test]
	fn test_legacy_layout() {
		assert_eq!(encode_legacy(&Value::Undefined), None);
		assert_eq!(hex::encode(encode_legacy(&Value::Int2(-2)).unwrap().tag_and_data()), "01fffffffffffffffe");
		assert_eq!(hex::encode(encode_legacy(&Value::utf8("hi")).unwrap().tag_and_data()), "056869");
		assert_eq!(hex::encode(encode_legacy(&Value::Boolean(true)).unwrap().tag_and_data()), "06");
	}

	#[test]
	fn test_legacy_float_keeps_sign_of_zero() {
		let neg = encode_legacy(&Value::float8(-0.0)).unwrap();
		let pos = encode_legacy(&Value::float8(0.0)).unwrap();
		assert_ne!(neg, pos);
		assert_eq!(hex::encode(neg.data()), "8000000000000000");
	}

	#[test]
	fn test_tuple_header() {
		let mut buf = Vec::new();
		encode_tuple_column(&mut buf, 2, &Value::utf8("x"));
		// (2 << 4) | 5, length 1, 'x'
		assert_eq!(hex::encode(&buf), "250178");
	}

	#[test]
	fn test_tuple_skips_null() {
		let mut buf = Vec::new();
		encode_tuple_column(&mut buf, 3, &Value::Undefined);
		assert!(buf.is_empty());
	}

	#[test]
	fn test_decode_tuple() {
		let mut buf = Vec::new();
		encode_tuple_column(&mut buf, 2, &Value::utf8("x"));
		encode_tuple_column(&mut buf, 1, &Value::Boolean(false));
		encode_tuple_column(&mut buf, 200, &Value::Uint1(9));

		assert_eq!(
			decode_tuple(&buf).unwrap(),
			vec![
				(ColumnId(2), Value::utf8("x")),
				(ColumnId(3), Value::Boolean(false)),
				(ColumnId(203), Value::Uint8(9)),
			]
		);
	}

	#[test]
	fn test_decode_truncated_tuple() {
		let mut buf = Vec::new();
		encode_tuple_column(&mut buf, 1, &Value::Int8(5));
		buf.pop();
		assert!(matches!(decode_tuple(&buf), Err(EncodingError::InvalidValue { .. })));
	}
}
