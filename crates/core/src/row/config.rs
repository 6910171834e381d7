// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

/// Configuration for row mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct RowConfig {
	/// Mutation issued by the system itself; size limits only warn.
	pub internal: bool,
	/// Rows with a larger key plus value are logged (None = never).
	pub large_row_warn_bytes: Option<usize>,
	/// Rows with a larger key plus value are rejected (None = never).
	pub large_row_error_bytes: Option<usize>,
}

impl Default for RowConfig {
	fn default() -> Self {
		Self {
			internal: false,
			large_row_warn_bytes: Some(64 << 20),
			large_row_error_bytes: Some(512 << 20),
		}
	}
}

impl RowConfig {
	pub fn internal() -> Self {
		Self {
			internal: true,
			..Self::default()
		}
	}

	pub fn with_large_row_limits(mut self, warn: Option<usize>, error: Option<usize>) -> Self {
		self.large_row_warn_bytes = warn;
		self.large_row_error_bytes = error;
		self
	}
}
