// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use crossbeam_skiplist::SkipMap;
use tessera_core::{
	EncodedKey, EncodedValue,
	error::TransactionError,
	interface::{Batch, Mutation},
};

/// Ordered in memory key value store executing [`Batch`]es atomically.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: SkipMap<EncodedKey, EncodedValue>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, key: &EncodedKey) -> Option<EncodedValue> {
		self.entries.get(key).map(|entry| entry.value().clone())
	}

	pub fn contains_key(&self, key: &EncodedKey) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// All keys in ascending order.
	pub fn keys(&self) -> Vec<EncodedKey> {
		self.entries.iter().map(|entry| entry.key().clone()).collect()
	}

	pub fn scan_prefix(&self, prefix: &[u8]) -> Vec<(EncodedKey, EncodedValue)> {
		self.entries
			.range(EncodedKey::new(prefix.to_vec())..)
			.take_while(|entry| entry.key().starts_with(prefix))
			.map(|entry| (entry.key().clone(), entry.value().clone()))
			.collect()
	}

	/// Applies every mutation of `batch` or none of them. Conditional
	/// removals are checked against the state before the batch.
	pub fn apply(&self, batch: &Batch) -> tessera_core::Result<()> {
		for mutation in batch.iter() {
			let Mutation::RemoveIf {
				key,
				expected,
				..
			} = mutation
			else {
				continue;
			};

			let actual = self.entries.get(key).map(|entry| entry.value().tag_and_data().to_vec());
			let matches = match (expected, &actual) {
				(None, None) => true,
				(Some(expected), Some(actual)) => expected.as_slice() == actual.as_slice(),
				_ => false,
			};
			if !matches {
				return Err(TransactionError::ConditionFailed {
					key: key.as_slice().to_vec(),
					expected: expected.as_ref().map(|e| e.as_slice().to_vec()),
					actual,
				}
				.into());
			}
		}

		for mutation in batch.iter() {
			match mutation {
				Mutation::Put {
					key,
					value,
				} => {
					self.entries.insert(key.clone(), value.clone());
				}
				Mutation::Remove {
					key,
				}
				| Mutation::RemoveIf {
					key,
					..
				} => {
					self.entries.remove(key);
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use tessera_core::interface::{MutationBatch, OriginTimestamp};

	use super::*;

	fn key(bytes: &[u8]) -> EncodedKey {
		EncodedKey::new(bytes.to_vec())
	}

	#[test]
	fn test_put_and_remove() {
		let store = MemoryStore::new();
		let mut batch = Batch::new();
		batch.put(&key(&[1]), EncodedValue::tuple(&[])).unwrap();
		batch.put(&key(&[2]), EncodedValue::tuple(&[7])).unwrap();
		store.apply(&batch).unwrap();
		assert_eq!(store.len(), 2);

		let mut batch = Batch::new();
		batch.remove(&key(&[1])).unwrap();
		batch.remove(&key(&[3])).unwrap();
		store.apply(&batch).unwrap();
		assert_eq!(store.keys(), vec![key(&[2])]);
	}

	#[test]
	fn test_remove_if_matches() {
		let store = MemoryStore::new();
		let mut batch = Batch::new();
		batch.put(&key(&[1]), EncodedValue::tuple(&[7])).unwrap();
		store.apply(&batch).unwrap();

		let expected = EncodedValue::tuple(&[7]);
		let mut batch = Batch::new();
		batch.remove_if(&key(&[1]), Some(expected.tag_and_data()), OriginTimestamp(1)).unwrap();
		batch.remove_if(&key(&[2]), None, OriginTimestamp(1)).unwrap();
		store.apply(&batch).unwrap();
		assert!(store.is_empty());
	}

	#[test]
	fn test_failed_condition_applies_nothing() {
		let store = MemoryStore::new();
		let mut batch = Batch::new();
		batch.put(&key(&[1]), EncodedValue::tuple(&[7])).unwrap();
		store.apply(&batch).unwrap();

		let mut batch = Batch::new();
		batch.remove(&key(&[1])).unwrap();
		batch.remove_if(&key(&[1]), None, OriginTimestamp(1)).unwrap();
		let err = store.apply(&batch).unwrap_err();

		assert_eq!(err.code(), "TXN_001");
		assert!(store.contains_key(&key(&[1])));
	}

	#[test]
	fn test_scan_prefix() {
		let store = MemoryStore::new();
		let mut batch = Batch::new();
		for k in [[1u8, 1], [1, 2], [2, 1]] {
			batch.put(&key(&k), EncodedValue::tuple(&[])).unwrap();
		}
		store.apply(&batch).unwrap();

		let keys: Vec<EncodedKey> = store.scan_prefix(&[1]).into_iter().map(|(k, _)| k).collect();
		assert_eq!(keys, vec![key(&[1, 1]), key(&[1, 2])]);
	}
}
