// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test goes through `Persistence::new_in_memory()`,
//! so connection setup and migrations are exercised implicitly. These tests
//! pin down isolation, file-backed databases, and pragma state.

use board_domain::LoginCredentials;

use super::{TEST_BCRYPT_COST, insert_test_member};
use crate::backend::sqlite::verify_foreign_key_enforcement;
use crate::{LoginResult, MemberMapper, Persistence};

#[test]
fn test_persistence_initialization() {
    let result = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_default_bcrypt_cost() {
    let persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.bcrypt_cost(), bcrypt::DEFAULT_COST);

    let persistence = persistence.with_bcrypt_cost(TEST_BCRYPT_COST);
    assert_eq!(persistence.bcrypt_cost(), TEST_BCRYPT_COST);
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory()
        .unwrap()
        .with_bcrypt_cost(TEST_BCRYPT_COST);
    let mut db2 = Persistence::new_in_memory().unwrap();

    insert_test_member(&mut db1, "a@b.com");

    assert_eq!(db1.count_members().unwrap(), 1, "db1 should have 1 member");
    assert_eq!(db2.count_members().unwrap(), 0, "db2 should be isolated");
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert!(persistence.count_members().is_ok());
    assert!(persistence.get_session_by_token("anything").is_ok());
}

#[test]
fn test_foreign_keys_enforced() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(verify_foreign_key_enforcement(&mut persistence.conn).is_ok());
}

#[test]
fn test_file_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    {
        let mut persistence = Persistence::new_with_file(&path)
            .unwrap()
            .with_bcrypt_cost(TEST_BCRYPT_COST);
        insert_test_member(&mut persistence, "a@b.com");
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.count_members().unwrap(), 1);

    let result = reopened
        .login(&LoginCredentials::new("a@b.com", "pass1234"))
        .unwrap();
    assert!(matches!(result, LoginResult::Matched(_)));
}
