// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

macro_rules! catalog_id {
	($name:ident, $inner:ty) => {
		#[repr(transparent)]
		#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(pub $inner);

		impl Deref for $name {
			type Target = $inner;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl PartialEq<$inner> for $name {
			fn eq(&self, other: &$inner) -> bool {
				self.0.eq(other)
			}
		}

		impl From<$name> for $inner {
			fn from(value: $name) -> Self {
				value.0
			}
		}

		impl From<$inner> for $name {
			fn from(value: $inner) -> Self {
				$name(value)
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				Display::fmt(&self.0, f)
			}
		}
	};
}

catalog_id!(TableId, u64);
catalog_id!(ColumnId, u32);
catalog_id!(IndexId, u32);
catalog_id!(FamilyId, u32);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compare_with_inner() {
		assert_eq!(ColumnId(3), 3u32);
		assert!(FamilyId(0) < FamilyId(1));
		assert_eq!(u64::from(TableId(9)), 9);
		assert_eq!(IndexId(2).to_string(), "2");
	}
}
