// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tessera

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

mod internal;
mod r#macro;

pub use internal::{internal, internal_with_context};

/// A structured, user facing description of a failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Renders the diagnostic in the multi line format used for logs and
	/// error displays.
	pub fn render(&self) -> String {
		let mut out = format!("{}: {}", self.code, self.message);
		if let Some(label) = &self.label {
			out.push_str(&format!("\n  label: {label}"));
		}
		if let Some(help) = &self.help {
			out.push_str(&format!("\n  help: {help}"));
		}
		for note in &self.notes {
			out.push_str(&format!("\n  note: {note}"));
		}
		if let Some(cause) = &self.cause {
			out.push_str(&format!("\n  caused by: {}", cause.render()));
		}
		out
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.code)
	}
}

/// Converts a domain error into a [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn new(diagnostic: impl IntoDiagnostic) -> Self {
		Self(Box::new(diagnostic.into_diagnostic()))
	}

	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0.render())
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Self(Box::new(diagnostic))
	}
}
