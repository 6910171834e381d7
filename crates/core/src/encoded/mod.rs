// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

mod key;
mod value;

pub use key::EncodedKey;
pub use value::{EncodedValue, ValueTag};
