// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! - `members` — member lookups by email and number
//! - `sessions` — session lookups by token

pub mod members;
pub mod sessions;
