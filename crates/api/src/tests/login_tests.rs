// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the login and logout flows.

use board_persistence::PersistenceError;
use cookie::Cookie;
use time::Duration;

use crate::tests::helpers::{FakeMapper, create_login_request, create_test_member};
use crate::{
    ApiError, LOGIN_MISMATCH_MESSAGE, Navigation, PrincipalChange, REMEMBER_MAX_AGE, SaveIdCookie,
    login, logout,
};

fn mapper_with_member() -> FakeMapper {
    FakeMapper::default().with_account(create_test_member(7, "a@b.com"), "pw1")
}

#[test]
fn test_login_mismatch_sets_flash_only() {
    let mut mapper = mapper_with_member();

    let outcome = login(&mut mapper, &create_login_request("a@b.com", "wrong", Some("on")))
        .unwrap();

    assert_eq!(outcome.navigation, Navigation::HOME);
    assert_eq!(outcome.navigation.to_string(), "redirect:/");
    assert_eq!(outcome.principal, PrincipalChange::Keep);
    assert_eq!(outcome.save_id, None);
    assert_eq!(
        outcome.flash.as_ref().map(crate::Flash::message),
        Some(LOGIN_MISMATCH_MESSAGE)
    );
}

#[test]
fn test_login_unknown_email_is_mismatch() {
    let mut mapper = mapper_with_member();

    let outcome = login(&mut mapper, &create_login_request("x@y.com", "pw1", None)).unwrap();

    assert_eq!(outcome.principal, PrincipalChange::Keep);
    assert!(outcome.flash.is_some());
}

#[test]
fn test_login_match_establishes_principal() {
    let mut mapper = mapper_with_member();

    let outcome = login(&mut mapper, &create_login_request("a@b.com", "pw1", None)).unwrap();

    assert_eq!(
        outcome.principal,
        PrincipalChange::Establish(create_test_member(7, "a@b.com"))
    );
    assert_eq!(outcome.navigation.to_string(), "redirect:/");
    assert_eq!(outcome.flash, None);
}

#[test]
fn test_login_without_flag_expires_save_id() {
    let mut mapper = mapper_with_member();

    let outcome = login(&mut mapper, &create_login_request("a@b.com", "pw1", None)).unwrap();

    let cookie = outcome.save_id.unwrap();
    assert_eq!(cookie.email, "a@b.com");
    assert_eq!(cookie.max_age, 0);

    let built = cookie.to_cookie();
    assert_eq!(built.name(), "saveId");
    assert_eq!(built.value(), "a@b.com");
    assert_eq!(built.path(), Some("/"));
    assert_eq!(built.max_age(), Some(Duration::ZERO));
}

#[test]
fn test_login_with_flag_remembers_thirty_days() {
    let mut mapper = mapper_with_member();

    let outcome =
        login(&mut mapper, &create_login_request("a@b.com", "pw1", Some("on"))).unwrap();

    let cookie = outcome.save_id.unwrap();
    assert_eq!(cookie.max_age, 2_592_000);
    assert_eq!(cookie.max_age, REMEMBER_MAX_AGE);
    assert_eq!(
        cookie.to_cookie().max_age(),
        Some(Duration::seconds(2_592_000))
    );
}

#[test]
fn test_login_with_empty_flag_still_remembers() {
    let mut mapper = mapper_with_member();

    let outcome = login(&mut mapper, &create_login_request("a@b.com", "pw1", Some(""))).unwrap();

    assert_eq!(outcome.save_id.unwrap().max_age, REMEMBER_MAX_AGE);
}

#[test]
fn test_save_id_cookie_encodes_reserved_and_non_ascii_email() {
    let email = "홍 길;동@b.com";
    let encoded: String = SaveIdCookie::for_login(email, Some("on"))
        .to_cookie()
        .encoded()
        .to_string();

    assert!(encoded.is_ascii());
    assert!(encoded.starts_with("saveId="));
    assert!(encoded.ends_with("; Path=/; Max-Age=2592000"));

    let parsed = Cookie::parse_encoded(encoded).unwrap();
    assert_eq!(parsed.value(), email);
    assert_eq!(parsed.path(), Some("/"));
}

#[test]
fn test_login_passes_fields_through_unvalidated() {
    let mut mapper = FakeMapper::default();

    let outcome = login(&mut mapper, &create_login_request("", "", None)).unwrap();

    assert_eq!(mapper.login_calls.len(), 1);
    assert_eq!(mapper.login_calls[0].email, "");
    assert_eq!(outcome.principal, PrincipalChange::Keep);
}

#[test]
fn test_login_boundary_failure_is_internal_error() {
    let mut mapper = mapper_with_member();
    mapper.login_error = Some(PersistenceError::DatabaseError(String::from("disk I/O")));

    let result = login(&mut mapper, &create_login_request("a@b.com", "pw1", None));

    assert!(matches!(result, Err(ApiError::Internal { .. })));
}

#[test]
fn test_logout_invalidates_and_redirects_home() {
    let outcome = logout();

    assert_eq!(outcome.principal, PrincipalChange::Invalidate);
    assert_eq!(outcome.navigation.to_string(), "redirect:/");
    assert_eq!(outcome.save_id, None);
    assert_eq!(outcome.flash, None);
}

#[test]
fn test_logout_twice_is_identical() {
    assert_eq!(logout(), logout());
}
