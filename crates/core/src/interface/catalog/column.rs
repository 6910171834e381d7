// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use serde::{Deserialize, Serialize};
use tessera_type::{Type, Value};

use crate::{error::EncodingError, interface::catalog::ColumnId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
	pub id: ColumnId,
	pub name: String,
	pub ty: Type,
	pub nullable: bool,
}

impl ColumnDef {
	pub fn new(id: impl Into<ColumnId>, name: impl Into<String>, ty: Type) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			ty,
			nullable: true,
		}
	}

	pub fn not_null(mut self) -> Self {
		self.nullable = false;
		self
	}

	/// Undefined is accepted for every column; the caller decides whether a
	/// missing value is legal.
	pub fn check_value(&self, value: &Value) -> Result<(), EncodingError> {
		let actual = value.get_type();
		if actual == Type::Undefined || actual == self.ty {
			return Ok(());
		}
		Err(EncodingError::TypeMismatch {
			column_name: self.name.clone(),
			expected: self.ty,
			actual,
			value: value.clone(),
		})
	}
}
