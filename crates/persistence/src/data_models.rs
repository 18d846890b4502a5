// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use board_domain::{Authority, Member, MemberAddress};

use crate::error::PersistenceError;

/// A member row as stored, including the password hash.
///
/// This never leaves the persistence boundary as-is; callers receive a
/// `Member` built with [`MemberData::to_member`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberData {
    pub member_no: i64,
    pub member_email: String,
    pub password_hash: String,
    pub member_nickname: String,
    pub member_tel: String,
    pub member_address: Option<String>,
    pub enroll_date: String,
    pub is_withdrawn: bool,
    pub authority: i32,
}

impl MemberData {
    /// Builds the domain member, dropping the password hash.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReconstructionError` if the stored address
    /// or authority code is malformed.
    pub fn to_member(&self) -> Result<Member, PersistenceError> {
        let address: Option<MemberAddress> = self
            .member_address
            .as_deref()
            .map(MemberAddress::from_stored)
            .transpose()
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

        let authority: Authority = Authority::try_from(self.authority)
            .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

        Ok(Member {
            member_no: self.member_no,
            email: self.member_email.clone(),
            nickname: self.member_nickname.clone(),
            tel: self.member_tel.clone(),
            address,
            enroll_date: self.enroll_date.clone(),
            authority,
        })
    }
}

/// A server-side login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub member_no: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Outcome of a credential lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResult {
    /// An active member with that email exists and the password matched.
    Matched(Member),
    /// No active member matched both email and password.
    NotFound,
}

/// Why a signup insert did not create a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The email is already registered.
    DuplicateEmail,
    /// The insert completed but reported zero affected rows.
    NoRowsAffected,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail => write!(f, "email already registered"),
            Self::NoRowsAffected => write!(f, "no rows affected"),
        }
    }
}

/// Outcome of a signup insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupResult {
    /// One member row was inserted.
    Inserted {
        /// The number assigned to the new member.
        member_no: i64,
    },
    /// No row was inserted.
    Rejected(RejectReason),
}

impl SignupResult {
    /// Number of rows the insert affected, as the mapper contract reports it.
    #[must_use]
    pub const fn rows_affected(&self) -> usize {
        match self {
            Self::Inserted { .. } => 1,
            Self::Rejected(_) => 0,
        }
    }
}
