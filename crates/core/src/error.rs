// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

use tessera_type::{Diagnostic, Error, IntoDiagnostic, Type, Value, util::hex};

use crate::interface::catalog::{ColumnId, FamilyId, TableId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("Column with id {column} does not exist in table '{table_name}'")]
	ColumnNotFound {
		table: TableId,
		table_name: String,
		column: ColumnId,
	},

	#[error("Column family with id {family} does not exist in table '{table_name}'")]
	FamilyNotFound {
		table: TableId,
		table_name: String,
		family: FamilyId,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			CatalogError::ColumnNotFound {
				table,
				column,
				..
			} => Diagnostic {
				code: "CATALOG_001".to_string(),
				message,
				label: Some("unknown column id".to_string()),
				help: Some("Ensure the index and family definitions only reference columns declared on the table".to_string()),
				notes: vec![format!("table id: {table}"), format!("column id: {column}")],
				cause: None,
			},
			CatalogError::FamilyNotFound {
				table,
				family,
				..
			} => Diagnostic {
				code: "CATALOG_002".to_string(),
				message,
				label: Some("unknown column family".to_string()),
				help: None,
				notes: vec![format!("table id: {table}"), format!("family id: {family}")],
				cause: None,
			},
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error::new(err)
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
	#[error("Column '{column_name}' (id {column}) is required but was not supplied")]
	MissingColumn {
		column: ColumnId,
		column_name: String,
	},

	#[error("Column '{column_name}' expects {expected}, got {actual}")]
	TypeMismatch {
		column_name: String,
		expected: Type,
		actual: Type,
		value: Value,
	},

	#[error("Row of {size} bytes exceeds the maximum row size of {max} bytes")]
	RowTooLarge {
		table_name: String,
		size: usize,
		max: usize,
	},

	#[error("Key cannot be decoded: {reason}")]
	InvalidKey {
		reason: String,
		key: Vec<u8>,
	},

	#[error("Value cannot be decoded: {reason}")]
	InvalidValue {
		reason: String,
	},
}

impl IntoDiagnostic for EncodingError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			EncodingError::MissingColumn {
				column,
				..
			} => Diagnostic {
				code: "ENCODING_001".to_string(),
				message,
				label: Some("column not fetched".to_string()),
				help: Some("Include every index key and key suffix column in the fetched columns".to_string()),
				notes: vec![format!("column id: {column}")],
				cause: None,
			},
			EncodingError::TypeMismatch {
				value,
				..
			} => Diagnostic {
				code: "ENCODING_002".to_string(),
				message,
				label: Some("value does not match the column type".to_string()),
				help: None,
				notes: vec![format!("value: {value}")],
				cause: None,
			},
			EncodingError::RowTooLarge {
				table_name,
				..
			} => Diagnostic {
				code: "ENCODING_003".to_string(),
				message,
				label: Some("row size limit exceeded".to_string()),
				help: Some("Reduce the size of the row or raise the configured row size limit".to_string()),
				notes: vec![format!("table: {table_name}")],
				cause: None,
			},
			EncodingError::InvalidKey {
				key,
				..
			} => Diagnostic {
				code: "ENCODING_004".to_string(),
				message,
				label: Some("malformed key".to_string()),
				help: None,
				notes: vec![format!("key: {}", hex::encode(&key))],
				cause: None,
			},
			EncodingError::InvalidValue {
				..
			} => Diagnostic {
				code: "ENCODING_005".to_string(),
				message,
				label: Some("malformed value".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<EncodingError> for Error {
	fn from(err: EncodingError) -> Self {
		Error::new(err)
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionError {
	#[error("Conditional write failed: stored value does not match the expected value")]
	ConditionFailed {
		key: Vec<u8>,
		expected: Option<Vec<u8>>,
		actual: Option<Vec<u8>>,
	},
}

impl IntoDiagnostic for TransactionError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TransactionError::ConditionFailed {
				key,
				expected,
				actual,
			} => {
				let render = |v: &Option<Vec<u8>>| match v {
					Some(bytes) => hex::encode(bytes),
					None => "<absent>".to_string(),
				};
				Diagnostic {
					code: "TXN_001".to_string(),
					message,
					label: Some("write conflict".to_string()),
					help: Some("The row was modified concurrently; retry the transaction".to_string()),
					notes: vec![
						format!("key: {}", hex::encode(&key)),
						format!("expected: {}", render(&expected)),
						format!("actual: {}", render(&actual)),
					],
					cause: None,
				}
			}
		}
	}
}

impl From<TransactionError> for Error {
	fn from(err: TransactionError) -> Self {
		Error::new(err)
	}
}
