// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for board members.
//!
//! This crate contains no I/O. It defines the member record that acts as the
//! session principal, the command objects submitted by the login and signup
//! forms, and the three-part address representation.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod address;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use address::{ADDRESS_DELIMITER, ADDRESS_PART_COUNT, MemberAddress};
pub use error::DomainError;
pub use types::{Authority, LoginCredentials, Member, SignupMember};
