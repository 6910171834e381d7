// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tessera

use super::Diagnostic;

/// Creates a detailed internal error diagnostic with source location and
/// context
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	function: &str,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();

	let error_id = format!("ERR-{}:{}", file.rsplit('/').next().unwrap_or(file).replace(".rs", ""), line);

	let location_info =
		format!("Location: {}:{}:{}\nFunction: {}\nModule: {}", file, line, column, function, module_path);

	let help_message = format!(
		"This is an internal error that should never occur in normal operation.\n\n\
		 Include the following information in a bug report:\n\
		 Error ID: {}\n\
		 {}\n\
		 Version: {}\n\
		 Platform: {} {}",
		error_id,
		location_info,
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error [{}]: {}", error_id, reason),
		label: Some(format!("Internal invariant violated at {}:{}:{}", file, line, column)),
		help: Some(help_message),
		notes: vec![
			format!("Error occurred in function: {}", function),
			"This error indicates a critical internal inconsistency.".to_string(),
		],
		cause: None,
	}
}

/// Simplified internal error without detailed context
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown", "unknown")
}

#[cfg(test)]
mod tests {
	use crate::{error, internal};

	#[test]
	fn test_internal_literal() {
		let diagnostic = internal!("simple error message");

		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.message.contains("simple error message"));
		assert!(diagnostic.help.as_ref().unwrap().contains("bug report"));
	}

	#[test]
	fn test_internal_with_format() {
		let value = 42;
		let diagnostic = internal!("family {} has no sorted columns", value);

		assert!(diagnostic.message.contains("family 42 has no sorted columns"));
		assert!(diagnostic.label.as_ref().unwrap().contains("Internal invariant violated"));
		assert!(diagnostic.notes[0].contains("test_internal_with_format"));
	}

	#[test]
	fn test_error_wraps_internal() {
		let err = error!(internal!("boom"));
		assert_eq!(err.code(), "INTERNAL_ERROR");
	}
}
