// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessera

pub mod keycode;
pub mod value;
