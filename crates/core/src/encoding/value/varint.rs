// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

/// Appends `value` as an unsigned LEB128 varint.
pub fn put_uvarint(buf: &mut Vec<u8>, mut value: u64) {
	while value >= 0x80 {
		buf.push((value as u8) | 0x80);
		value >>= 7;
	}
	buf.push(value as u8);
}

/// Reads an unsigned varint, returning the value and the number of bytes
/// consumed.
pub fn get_uvarint(buf: &[u8]) -> Option<(u64, usize)> {
	let mut value = 0u64;
	for (i, &byte) in buf.iter().enumerate().take(10) {
		let bits = (byte & 0x7f) as u64;
		if i == 9 && bits > 1 {
			return None;
		}
		value |= bits << (7 * i);
		if byte & 0x80 == 0 {
			return Some((value, i + 1));
		}
	}
	None
}
