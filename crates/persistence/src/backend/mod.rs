// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! Connection setup, migrations, and the few helpers that Diesel DSL cannot
//! express (PRAGMA statements, `last_insert_rowid()`) live here. Member and
//! session queries stay in `queries/` and `mutations/`.

pub mod sqlite;
