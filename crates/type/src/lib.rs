// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tessera

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod util;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic};
pub use util::CowVec;
pub use value::{OrderedF64, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
