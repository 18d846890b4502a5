// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use board_domain::{MemberAddress, SignupMember};

use crate::{MemberMapper, Persistence, SignupResult};

/// Lowest cost bcrypt accepts; keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory()
        .expect("Failed to create in-memory persistence")
        .with_bcrypt_cost(TEST_BCRYPT_COST)
}

pub fn create_test_signup(email: &str) -> SignupMember {
    SignupMember {
        email: email.to_string(),
        password: String::from("pass1234"),
        nickname: String::from("tester"),
        tel: String::from("01012345678"),
        address: MemberAddress::new("04540", "Seoul Jung-gu", "3F"),
    }
}

/// Signs up a member and returns the assigned member number.
pub fn insert_test_member(persistence: &mut Persistence, email: &str) -> i64 {
    match persistence
        .signup(&create_test_signup(email))
        .expect("Signup should not error")
    {
        SignupResult::Inserted { member_no } => member_no,
        SignupResult::Rejected(reason) => panic!("Signup rejected: {reason}"),
    }
}
