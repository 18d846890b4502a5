// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The member data-access boundary.

use board_domain::{LoginCredentials, SignupMember};

use crate::data_models::{LoginResult, SignupResult};
use crate::error::PersistenceError;

/// The two operations the member controller needs from storage.
///
/// Credential mismatches and rejected inserts are reported through the
/// tagged results, never as errors. `Err` is reserved for storage faults.
pub trait MemberMapper {
    /// Looks up the active member matching both email and password.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    fn login(&mut self, credentials: &LoginCredentials) -> Result<LoginResult, PersistenceError>;

    /// Inserts a new member.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    fn signup(&mut self, member: &SignupMember) -> Result<SignupResult, PersistenceError>;
}
