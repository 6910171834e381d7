// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tessera

use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A copy-on-write vector. Cloning is cheap once the vector is shared; any
/// mutation of a shared vector first takes a private copy, so a clone handed
/// out earlier never observes later writes.
#[derive(Clone, Debug)]
pub struct CowVec<T>
where
	T: Clone,
{
	inner: Arc<Vec<T>>,
}

impl<T> CowVec<T>
where
	T: Clone,
{
	pub fn new(vec: Vec<T>) -> Self {
		Self {
			inner: Arc::new(vec),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self::new(Vec::with_capacity(capacity))
	}

	/// Ensures unique ownership and returns a mutable reference to the
	/// inner Vec.
	pub fn make_mut(&mut self) -> &mut Vec<T> {
		Arc::make_mut(&mut self.inner)
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	pub fn is_shared(&self) -> bool {
		Arc::strong_count(&self.inner) > 1
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		self.as_slice().get(idx)
	}

	pub fn push(&mut self, value: T) {
		self.make_mut().push(value);
	}

	pub fn extend(&mut self, iter: impl IntoIterator<Item = T>) {
		self.make_mut().extend(iter);
	}

	pub fn into_vec(self) -> Vec<T> {
		Arc::try_unwrap(self.inner).unwrap_or_else(|shared| (*shared).clone())
	}
}

impl<T> Deref for CowVec<T>
where
	T: Clone,
{
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<T> Default for CowVec<T>
where
	T: Clone,
{
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T> PartialEq for CowVec<T>
where
	T: Clone + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T> Eq for CowVec<T> where T: Clone + Eq {}

impl<T> PartialOrd for CowVec<T>
where
	T: Clone + PartialOrd,
{
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		self.as_slice().partial_cmp(other.as_slice())
	}
}

impl<T> Ord for CowVec<T>
where
	T: Clone + Ord,
{
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.as_slice().cmp(other.as_slice())
	}
}

impl<T> std::hash::Hash for CowVec<T>
where
	T: Clone + std::hash::Hash,
{
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.as_slice().hash(state)
	}
}

impl<T> From<Vec<T>> for CowVec<T>
where
	T: Clone,
{
	fn from(value: Vec<T>) -> Self {
		Self::new(value)
	}
}

impl<T> From<&[T]> for CowVec<T>
where
	T: Clone,
{
	fn from(value: &[T]) -> Self {
		Self::new(value.to_vec())
	}
}

impl<T> Serialize for CowVec<T>
where
	T: Clone + Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.as_slice().serialize(serializer)
	}
}

impl<'de, T> Deserialize<'de> for CowVec<T>
where
	T: Clone + Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Vec::<T>::deserialize(deserializer).map(CowVec::new)
	}
}
