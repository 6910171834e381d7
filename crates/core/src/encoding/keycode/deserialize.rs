// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use tessera_type::Value;

use super::{BYTES, ESCAPE, FALSE, FLOAT, INT, NULL, TERMINATOR, TRUE, UINT, UTF8};
use crate::{error::EncodingError, interface::catalog::SortDirection};

/// Reads back keys written by [`super::KeySerializer`]. Integers come back
/// widened to `Int8` / `Uint8`.
pub struct KeyDeserializer<'a> {
	input: &'a [u8],
	key: &'a [u8],
}

impl<'a> KeyDeserializer<'a> {
	pub fn from_bytes(input: &'a [u8]) -> Self {
		Self {
			input,
			key: input,
		}
	}

	pub fn remaining(&self) -> &'a [u8] {
		self.input
	}

	pub fn is_empty(&self) -> bool {
		self.input.is_empty()
	}

	fn invalid(&self, reason: impl Into<String>) -> EncodingError {
		EncodingError::InvalidKey {
			reason: reason.into(),
			key: self.key.to_vec(),
		}
	}

	fn take(&mut self, len: usize) -> Result<&'a [u8], EncodingError> {
		if self.input.len() < len {
			return Err(self.invalid(format!("expected {len} bytes, {} left", self.input.len())));
		}
		let (head, tail) = self.input.split_at(len);
		self.input = tail;
		Ok(head)
	}

	pub fn read_u8(&mut self) -> Result<u8, EncodingError> {
		Ok(self.take(1)?[0])
	}

	pub fn read_u32(&mut self) -> Result<u32, EncodingError> {
		let mut bytes = [0u8; 4];
		bytes.copy_from_slice(self.take(4)?);
		Ok(u32::from_be_bytes(bytes))
	}

	pub fn read_u64(&mut self) -> Result<u64, EncodingError> {
		let mut bytes = [0u8; 8];
		bytes.copy_from_slice(self.take(8)?);
		Ok(u64::from_be_bytes(bytes))
	}

	fn read_fixed(&mut self, desc: bool) -> Result<u64, EncodingError> {
		let value = self.read_u64()?;
		Ok(if desc {
			!value
		} else {
			value
		})
	}

	pub fn read_value(&mut self, direction: SortDirection) -> Result<Value, EncodingError> {
		let desc = direction == SortDirection::Desc;
		let flip = |byte: u8| {
			if desc {
				!byte
			} else {
				byte
			}
		};

		let marker = flip(self.read_u8()?);
		match marker {
			NULL => Ok(Value::Undefined),
			FALSE => Ok(Value::Boolean(false)),
			TRUE => Ok(Value::Boolean(true)),
			INT => Ok(Value::Int8((self.read_fixed(desc)? ^ (1 << 63)) as i64)),
			UINT => Ok(Value::Uint8(self.read_fixed(desc)?)),
			FLOAT => {
				let bits = self.read_fixed(desc)?;
				let bits = if bits >> 63 == 1 {
					bits ^ (1 << 63)
				} else {
					!bits
				};
				Ok(Value::float8(f64::from_bits(bits)))
			}
			BYTES => Ok(Value::Blob(self.read_bytes(desc)?)),
			UTF8 => {
				let bytes = self.read_bytes(desc)?;
				String::from_utf8(bytes).map(Value::Utf8).map_err(|_| self.invalid("invalid utf8 in string value"))
			}
			other => Err(self.invalid(format!("unknown value marker {other:#04x}"))),
		}
	}

	fn read_bytes(&mut self, desc: bool) -> Result<Vec<u8>, EncodingError> {
		let mut out = Vec::new();
		loop {
			let byte = self.read_u8()?;
			let byte = if desc {
				!byte
			} else {
				byte
			};
			if byte != 0x00 {
				out.push(byte);
				continue;
			}
			let next = self.read_u8()?;
			let next = if desc {
				!next
			} else {
				next
			};
			match next {
				ESCAPE => out.push(0x00),
				b if b == TERMINATOR[1] => return Ok(out),
				other => return Err(self.invalid(format!("invalid escape sequence 0x00{other:02x}"))),
			}
		}
	}
}
