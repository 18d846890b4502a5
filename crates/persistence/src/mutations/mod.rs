// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations for the persistence layer.
//!
//! - `members` — signup inserts
//! - `sessions` — session create, refresh, and delete

pub mod members;
pub mod sessions;
