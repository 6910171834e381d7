// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use std::collections::HashSet;

use tessera_core::interface::{IndexId, TableDef};
use tessera_type::return_internal_error;

/// Partial indexes a row mutation must leave alone because the row does not
/// satisfy their predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialIndexUpdateHelper {
	/// Indexes that must not receive new entries.
	pub ignore_for_put: HashSet<IndexId>,
	/// Indexes that hold no entry to remove.
	pub ignore_for_del: HashSet<IndexId>,
}

impl PartialIndexUpdateHelper {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds the helper from predicate results evaluated by the caller, one
	/// per partial index of `table` in declaration order. An empty slice
	/// means the corresponding mutation does not happen.
	pub fn init(table: &TableDef, put_results: &[bool], del_results: &[bool]) -> crate::Result<Self> {
		let partial: Vec<IndexId> = table.partial_indexes().map(|i| i.id).collect();

		for (name, results) in [("put", put_results), ("del", del_results)] {
			if !results.is_empty() && results.len() != partial.len() {
				return_internal_error!(
					"{} {} predicate results for {} partial indexes of table '{}'",
					results.len(),
					name,
					partial.len(),
					table.name
				);
			}
		}

		let ignored = |results: &[bool]| -> HashSet<IndexId> {
			partial.iter().zip(results).filter(|(_, satisfied)| !**satisfied).map(|(id, _)| *id).collect()
		};

		Ok(Self {
			ignore_for_put: ignored(put_results),
			ignore_for_del: ignored(del_results),
		})
	}

	pub fn with_ignore_for_del(mut self, indexes: impl IntoIterator<Item = impl Into<IndexId>>) -> Self {
		self.ignore_for_del.extend(indexes.into_iter().map(Into::into));
		self
	}

	pub fn with_ignore_for_put(mut self, indexes: impl IntoIterator<Item = impl Into<IndexId>>) -> Self {
		self.ignore_for_put.extend(indexes.into_iter().map(Into::into));
		self
	}
}
