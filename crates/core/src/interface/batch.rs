// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tessera_type::CowVec;

use crate::{EncodedKey, EncodedValue};

/// Timestamp of the remote write a conditional delete originates from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginTimestamp(pub u64);

impl Display for OriginTimestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// Sink for key value mutations. Implementations only queue; executing the
/// mutations and resolving conflicts happens elsewhere.
pub trait MutationBatch {
	fn put(&mut self, key: &EncodedKey, value: EncodedValue) -> crate::Result<()>;

	fn remove(&mut self, key: &EncodedKey) -> crate::Result<()>;

	/// Removes `key` only if its stored tag and data equal `expected`, or if
	/// the key is absent when `expected` is `None`.
	fn remove_if(&mut self, key: &EncodedKey, expected: Option<&[u8]>, origin: OriginTimestamp)
	-> crate::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
	Put {
		key: EncodedKey,
		value: EncodedValue,
	},
	Remove {
		key: EncodedKey,
	},
	RemoveIf {
		key: EncodedKey,
		expected: Option<CowVec<u8>>,
		origin: OriginTimestamp,
	},
}

impl Mutation {
	pub fn key(&self) -> &EncodedKey {
		match self {
			Self::Put {
				key,
				..
			}
			| Self::Remove {
				key,
			}
			| Self::RemoveIf {
				key,
				..
			} => key,
		}
	}

	pub fn is_remove(&self) -> bool {
		matches!(self, Self::Remove { .. } | Self::RemoveIf { .. })
	}
}

/// In memory recorder keeping mutations in the order they were queued.
#[derive(Debug, Clone, Default)]
pub struct Batch {
	mutations: Vec<Mutation>,
}

impl Batch {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.mutations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.mutations.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Mutation> {
		self.mutations.iter()
	}

	pub fn mutations(&self) -> &[Mutation] {
		&self.mutations
	}

	pub fn keys(&self) -> Vec<EncodedKey> {
		self.mutations.iter().map(|m| m.key().clone()).collect()
	}

	pub fn clear(&mut self) {
		self.mutations.clear();
	}

	pub fn into_mutations(self) -> Vec<Mutation> {
		self.mutations
	}
}

impl MutationBatch for Batch {
	fn put(&mut self, key: &EncodedKey, value: EncodedValue) -> crate::Result<()> {
		self.mutations.push(Mutation::Put {
			key: key.clone(),
			value,
		});
		Ok(())
	}

	fn remove(&mut self, key: &EncodedKey) -> crate::Result<()> {
		self.mutations.push(Mutation::Remove {
			key: key.clone(),
		});
		Ok(())
	}

	fn remove_if(
		&mut self,
		key: &EncodedKey,
		expected: Option<&[u8]>,
		origin: OriginTimestamp,
	) -> crate::Result<()> {
		self.mutations.push(Mutation::RemoveIf {
			key: key.clone(),
			expected: expected.map(CowVec::from),
			origin,
		});
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_records_in_order() {
		let mut batch = Batch::new();
		batch.put(&EncodedKey::new(vec![2]), EncodedValue::tuple(&[])).unwrap();
		batch.remove(&EncodedKey::new(vec![1])).unwrap();
		batch.remove_if(&EncodedKey::new(vec![3]), Some(&[0x0a]), OriginTimestamp(7)).unwrap();

		assert_eq!(batch.len(), 3);
		assert_eq!(batch.keys(), vec![EncodedKey::new(vec![2]), EncodedKey::new(vec![1]), EncodedKey::new(vec![3])]);
		assert!(!batch.mutations()[0].is_remove());
		assert_eq!(
			batch.mutations()[2],
			Mutation::RemoveIf {
				key: EncodedKey::new(vec![3]),
				expected: Some(CowVec::new(vec![0x0a])),
				origin: OriginTimestamp(7),
			}
		);
	}
}
