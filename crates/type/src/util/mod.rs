// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tessera

mod cowvec;
pub mod hex;

pub use cowvec::CowVec;
