// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tessera

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// An f64 that is never NaN, so it can be totally ordered and hashed.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}

	/// Negative zero compares equal to zero but has a different bit
	/// pattern.
	pub fn is_negative_zero(&self) -> bool {
		self.0 == 0.0 && self.0.is_sign_negative()
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = &'static str;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		if value.is_nan() {
			Err("NaN is not a valid OrderedF64")
		} else {
			Ok(OrderedF64(value))
		}
	}
}

impl From<OrderedF64> for f64 {
	fn from(value: OrderedF64) -> Self {
		value.0
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// 0.0 and -0.0 are equal and must hash alike
		let normalized = if self.0 == 0.0 {
			0.0f64
		} else {
			self.0
		};
		normalized.to_bits().hash(state)
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
