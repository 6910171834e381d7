// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use tessera_type::Value;

use super::{BYTES, ESCAPE, FALSE, FLOAT, INT, NULL, TERMINATOR, TRUE, UINT, UTF8};
use crate::{EncodedKey, interface::catalog::SortDirection};

/// Appends the keycode encoding of `value` to `buf`.
pub fn encode_value(buf: &mut Vec<u8>, value: &Value, direction: SortDirection) {
	let start = buf.len();
	match value {
		Value::Undefined => buf.push(NULL),
		Value::Boolean(false) => buf.push(FALSE),
		Value::Boolean(true) => buf.push(TRUE),
		Value::Int1(v) => encode_i64(buf, *v as i64),
		Value::Int2(v) => encode_i64(buf, *v as i64),
		Value::Int4(v) => encode_i64(buf, *v as i64),
		Value::Int8(v) => encode_i64(buf, *v),
		Value::Uint1(v) => encode_u64(buf, *v as u64),
		Value::Uint2(v) => encode_u64(buf, *v as u64),
		Value::Uint4(v) => encode_u64(buf, *v as u64),
		Value::Uint8(v) => encode_u64(buf, *v),
		Value::Float8(v) => encode_f64(buf, v.value()),
		Value::Blob(v) => encode_bytes(buf, BYTES, v),
		Value::Utf8(v) => encode_bytes(buf, UTF8, v.as_bytes()),
	}

	if direction == SortDirection::Desc {
		for byte in &mut buf[start..] {
			*byte = !*byte;
		}
	}
}

fn encode_i64(buf: &mut Vec<u8>, value: i64) {
	buf.push(INT);
	buf.extend_from_slice(&((value as u64) ^ (1 << 63)).to_be_bytes());
}

fn encode_u64(buf: &mut Vec<u8>, value: u64) {
	buf.push(UINT);
	buf.extend_from_slice(&value.to_be_bytes());
}

fn encode_f64(buf: &mut Vec<u8>, value: f64) {
	// -0.0 and 0.0 compare equal and must share a key
	let value = if value == 0.0 {
		0.0
	} else {
		value
	};
	let mut bits = value.to_bits();
	if bits >> 63 == 1 {
		bits = !bits;
	} else {
		bits ^= 1 << 63;
	}
	buf.push(FLOAT);
	buf.extend_from_slice(&bits.to_be_bytes());
}

fn encode_bytes(buf: &mut Vec<u8>, marker: u8, bytes: &[u8]) {
	buf.push(marker);
	for &byte in bytes {
		if byte == 0x00 {
			buf.extend_from_slice(&[0x00, ESCAPE]);
		} else {
			buf.push(byte);
		}
	}
	buf.extend_from_slice(&TERMINATOR);
}

/// Builds a key from fixed width identifiers and keycode encoded values.
#[derive(Debug, Clone, Default)]
pub struct KeySerializer {
	buffer: Vec<u8>,
}

impl KeySerializer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}

	pub fn extend_u8(&mut self, value: u8) -> &mut Self {
		self.buffer.push(value);
		self
	}

	pub fn extend_u32(&mut self, value: impl Into<u32>) -> &mut Self {
		self.buffer.extend_from_slice(&value.into().to_be_bytes());
		self
	}

	pub fn extend_u64(&mut self, value: impl Into<u64>) -> &mut Self {
		self.buffer.extend_from_slice(&value.into().to_be_bytes());
		self
	}

	pub fn extend_value(&mut self, value: &Value, direction: SortDirection) -> &mut Self {
		encode_value(&mut self.buffer, value, direction);
		self
	}

	pub fn extend_raw(&mut self, bytes: &[u8]) -> &mut Self {
		self.buffer.extend_from_slice(bytes);
		self
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.buffer
	}

	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	pub fn finish(self) -> Vec<u8> {
		self.buffer
	}

	pub fn to_encoded_key(self) -> EncodedKey {
		EncodedKey::new(self.buffer)
	}
}
