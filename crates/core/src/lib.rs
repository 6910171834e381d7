// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod encoded;
pub mod encoding;
pub mod error;
pub mod interface;
pub mod key;
pub mod row;

pub use encoded::{EncodedKey, EncodedValue};
pub use tessera_type::{Error, Result};
