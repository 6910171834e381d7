// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use tessera_core::interface::OriginTimestamp;

/// How the primary index families of a row are removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DeleteMode {
	#[default]
	Unconditional,
	/// Remove each family only if it still holds the value the row was last
	/// written with, as seen by the writer the delete originates from.
	ConditionalOnPriorValue {
		origin: OriginTimestamp,
		/// The prior value is already a tombstone; each family is expected
		/// to be absent.
		previous_was_tombstone: bool,
	},
}

impl DeleteMode {
	pub fn conditional(origin: OriginTimestamp) -> Self {
		DeleteMode::ConditionalOnPriorValue {
			origin,
			previous_was_tombstone: false,
		}
	}

	pub fn conditional_on_tombstone(origin: OriginTimestamp) -> Self {
		DeleteMode::ConditionalOnPriorValue {
			origin,
			previous_was_tombstone: true,
		}
	}
}
