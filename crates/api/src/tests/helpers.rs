// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use board_domain::{Authority, LoginCredentials, Member, MemberAddress, SignupMember};
use board_persistence::{
    LoginResult, MemberMapper, Persistence, PersistenceError, RejectReason, SignupResult,
};

use crate::{LoginRequest, SignupRequest};

/// A scripted mapper that records what it was asked.
pub struct FakeMapper {
    /// Members that `login` matches, with their plain-text passwords.
    pub accounts: Vec<(Member, String)>,
    /// What `signup` returns.
    pub signup_result: Result<SignupResult, PersistenceError>,
    /// Set to make `login` fail.
    pub login_error: Option<PersistenceError>,
    pub login_calls: Vec<LoginCredentials>,
    pub signup_calls: Vec<SignupMember>,
}

impl Default for FakeMapper {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            signup_result: Ok(SignupResult::Inserted { member_no: 1 }),
            login_error: None,
            login_calls: Vec::new(),
            signup_calls: Vec::new(),
        }
    }
}

impl FakeMapper {
    pub fn with_account(mut self, member: Member, password: &str) -> Self {
        self.accounts.push((member, password.to_string()));
        self
    }

    pub fn rejecting_signups() -> Self {
        let mut mapper: Self = Self::default();
        mapper.signup_result = Ok(SignupResult::Rejected(RejectReason::DuplicateEmail));
        mapper
    }
}

impl MemberMapper for FakeMapper {
    fn login(&mut self, credentials: &LoginCredentials) -> Result<LoginResult, PersistenceError> {
        self.login_calls.push(credentials.clone());
        if let Some(err) = &self.login_error {
            return Err(err.clone());
        }

        Ok(self
            .accounts
            .iter()
            .find(|(member, password)| {
                member.email == credentials.email && *password == credentials.password
            })
            .map_or(LoginResult::NotFound, |(member, _)| {
                LoginResult::Matched(member.clone())
            }))
    }

    fn signup(&mut self, member: &SignupMember) -> Result<SignupResult, PersistenceError> {
        self.signup_calls.push(member.clone());
        self.signup_result.clone()
    }
}

pub fn create_test_member(member_no: i64, email: &str) -> Member {
    Member {
        member_no,
        email: email.to_string(),
        nickname: String::from("tester"),
        tel: String::from("01012345678"),
        address: Some(MemberAddress::new("04540", "Seoul Jung-gu", "3F")),
        enroll_date: String::from("2026-01-01 09:00:00"),
        authority: Authority::General,
    }
}

pub fn create_login_request(email: &str, password: &str, save_id: Option<&str>) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        save_id: save_id.map(str::to_string),
    }
}

pub fn create_signup_request(nickname: &str) -> SignupRequest {
    SignupRequest {
        email: String::from("sam@b.com"),
        password: String::from("pw1"),
        nickname: nickname.to_string(),
        tel: String::from("01012345678"),
        address: vec![
            String::from("04540"),
            String::from("Seoul Jung-gu"),
            String::from("3F"),
        ],
    }
}

/// In-memory persistence holding one member, `a@b.com` / `pw1`.
pub fn create_persistence_with_member() -> (Persistence, Member) {
    let mut persistence: Persistence = Persistence::new_in_memory()
        .unwrap()
        .with_bcrypt_cost(4);

    persistence
        .signup(&SignupMember {
            email: String::from("a@b.com"),
            password: String::from("pw1"),
            nickname: String::from("tester"),
            tel: String::from("01012345678"),
            address: MemberAddress::new("", "", ""),
        })
        .unwrap();

    let LoginResult::Matched(member) = persistence
        .login(&LoginCredentials::new("a@b.com", "pw1"))
        .unwrap()
    else {
        panic!("seeded member must log in");
    };

    (persistence, member)
}
