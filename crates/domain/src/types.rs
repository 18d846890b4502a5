// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::address::MemberAddress;
use crate::error::DomainError;

/// Member authority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Authority {
    /// A regular board member. Every signup starts here.
    #[default]
    General,
    /// A board administrator.
    Admin,
}

impl Authority {
    /// Returns the numeric code stored in the `authority` column.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::General => 1,
            Self::Admin => 2,
        }
    }
}

impl TryFrom<i32> for Authority {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::General),
            2 => Ok(Self::Admin),
            _ => Err(DomainError::InvalidAuthority(code)),
        }
    }
}

/// A persisted board member.
///
/// This is the record returned by a successful login and held as the
/// session principal. It never carries the password or its hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Database-assigned member number.
    pub member_no: i64,
    /// Login email, unique across members.
    #[serde(rename = "memberEmail")]
    pub email: String,
    /// Display nickname.
    #[serde(rename = "memberNickname")]
    pub nickname: String,
    /// Telephone number as entered.
    #[serde(rename = "memberTel")]
    pub tel: String,
    /// Address, absent when none was entered at signup.
    #[serde(rename = "memberAddress")]
    pub address: Option<MemberAddress>,
    /// Signup timestamp (UTC, `YYYY-MM-DD HH:MM:SS`).
    pub enroll_date: String,
    pub authority: Authority,
}

/// Credentials submitted by the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The member fields submitted by the signup form.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupMember {
    pub email: String,
    /// Plain-text password; hashed by the persistence layer before storage.
    pub password: String,
    pub nickname: String,
    pub tel: String,
    pub address: MemberAddress,
}

impl std::fmt::Debug for SignupMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupMember")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("nickname", &self.nickname)
            .field("tel", &self.tel)
            .field("address", &self.address)
            .finish()
    }
}
