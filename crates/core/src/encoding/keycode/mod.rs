// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

//! Keycode is a lexicographical order-preserving binary encoding for index
//! keys. Comparing two encoded keys byte by byte gives the same result as
//! comparing the values they were built from, column by column.
//!
//! Every value starts with a one byte marker so that values of different
//! kinds never compare ambiguously:
//!
//! * NULL: `0x00`.
//! * [`bool`]: `0x10` for `false`, `0x11` for `true`.
//! * signed integers: `0x20`, then the value widened to [`i64`], big-endian
//!   with the sign bit flipped.
//! * unsigned integers: `0x21`, then the value widened to [`u64`],
//!   big-endian.
//! * [`f64`]: `0x30`, then big-endian bits with the sign bit flipped, all
//!   bits flipped if negative. Negative zero is written as zero.
//! * blobs: `0x40`, utf8: `0x41`, then the bytes with `0x00` escaped as
//!   `0x00ff`, terminated with `0x0001`.
//!
//! A descending column is the ascending encoding with every byte inverted.

mod deserialize;
mod pretty;
mod serialize;

pub use deserialize::KeyDeserializer;
pub use pretty::render_index_key;
pub use serialize::{KeySerializer, encode_value};

pub(crate) const NULL: u8 = 0x00;
pub(crate) const FALSE: u8 = 0x10;
pub(crate) const TRUE: u8 = 0x11;
pub(crate) const INT: u8 = 0x20;
pub(crate) const UINT: u8 = 0x21;
pub(crate) const FLOAT: u8 = 0x30;
pub(crate) const BYTES: u8 = 0x40;
pub(crate) const UTF8: u8 = 0x41;

pub(crate) const ESCAPE: u8 = 0xff;
pub(crate) const TERMINATOR: [u8; 2] = [0x00, 0x01];

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use tessera_type::{Value, util::hex};

	use super::*;
	use crate::interface::catalog::SortDirection::{Asc, Desc};

	fn asc(value: Value) -> String {
		let mut buf = Vec::new();
		encode_value(&mut buf, &value, Asc);
		hex::encode(&buf)
	}

	#[test]
	fn test_ascending_layout() {
		assert_eq!(asc(Value::Undefined), "00");
		assert_eq!(asc(Value::Boolean(false)), "10");
		assert_eq!(asc(Value::Boolean(true)), "11");
		assert_eq!(asc(Value::Int8(1)), "208000000000000001");
		assert_eq!(asc(Value::Int1(-1)), "207fffffffffffffff");
		assert_eq!(asc(Value::Uint2(65535)), "21000000000000ffff");
		assert_eq!(asc(Value::float8(0.0)), "308000000000000000");
		assert_eq!(asc(Value::float8(-0.0)), "308000000000000000");
		assert_eq!(asc(Value::float8(PI)), "30c00921fb54442d18");
		assert_eq!(asc(Value::utf8("x")), "41780001");
		assert_eq!(asc(Value::blob(vec![0x00, 0x01])), "4000ff010001");
	}

	#[test]
	fn test_descending_inverts_every_byte() {
		let mut buf = vec![0xaa];
		encode_value(&mut buf, &Value::utf8("x"), Desc);
		assert_eq!(hex::encode(&buf), "aabe87fffe");
	}

	#[test]
	fn test_order_is_preserved() {
		let ordered = [
			Value::Undefined,
			Value::Boolean(false),
			Value::Boolean(true),
			Value::Int8(i64::MIN),
			Value::Int4(-1),
			Value::Int2(0),
			Value::Int8(i64::MAX),
			Value::Uint8(0),
			Value::Uint8(u64::MAX),
			Value::float8(f64::NEG_INFINITY),
			Value::float8(-1.5),
			Value::float8(0.0),
			Value::float8(f64::INFINITY),
			Value::blob(vec![]),
			Value::blob(vec![0x00]),
			Value::utf8(""),
			Value::utf8("a"),
			Value::utf8("a\0"),
			Value::utf8("b"),
		];

		let encode = |value: &Value, direction| {
			let mut buf = Vec::new();
			encode_value(&mut buf, value, direction);
			buf
		};

		for pair in ordered.windows(2) {
			assert!(encode(&pair[0], Asc) < encode(&pair[1], Asc), "{} < {}", pair[0], pair[1]);
			assert!(encode(&pair[0], Desc) > encode(&pair[1], Desc), "{} > {}", pair[0], pair[1]);
		}
	}

	#[test]
	fn test_decode_widens_integers() {
		for direction in [Asc, Desc] {
			let mut serializer = KeySerializer::new();
			serializer
				.extend_value(&Value::Int2(-7), direction)
				.extend_value(&Value::Uint1(7), direction)
				.extend_value(&Value::utf8("a\0b"), direction)
				.extend_value(&Value::Undefined, direction)
				.extend_value(&Value::float8(-2.5), direction);
			let bytes = serializer.finish();

			let mut de = KeyDeserializer::from_bytes(&bytes);
			assert_eq!(de.read_value(direction).unwrap(), Value::Int8(-7));
			assert_eq!(de.read_value(direction).unwrap(), Value::Uint8(7));
			assert_eq!(de.read_value(direction).unwrap(), Value::utf8("a\0b"));
			assert_eq!(de.read_value(direction).unwrap(), Value::Undefined);
			assert_eq!(de.read_value(direction).unwrap(), Value::float8(-2.5));
			assert!(de.is_empty());
		}
	}
}
