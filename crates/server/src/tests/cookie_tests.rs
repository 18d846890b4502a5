// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::*;
use axum::http::HeaderValue;
use board_api::Flash;

#[test]
fn test_read_cookie_finds_named_pair() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "cookie",
        HeaderValue::from_static("theme=dark; saveId=a@b.com; board_session=abc"),
    );

    assert_eq!(
        web::read_cookie(&headers, "saveId").as_deref(),
        Some("a@b.com")
    );
    assert_eq!(
        web::read_cookie(&headers, "board_session").as_deref(),
        Some("abc")
    );
    assert_eq!(web::read_cookie(&headers, "missing"), None);
}

#[test]
fn test_read_cookie_survives_raw_non_ascii_pair() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "cookie",
        HeaderValue::from_bytes("board_session=abc; saveId=홍길동@b.com".as_bytes()).unwrap(),
    );

    assert_eq!(
        web::read_cookie(&headers, "board_session").as_deref(),
        Some("abc")
    );
    assert_eq!(
        web::read_cookie(&headers, "saveId").as_deref(),
        Some("홍길동@b.com")
    );
}

#[test]
fn test_read_cookie_decodes_percent_encoding() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "cookie",
        HeaderValue::from_static("saveId=a%3Bb%40c.com; board_session=abc"),
    );

    assert_eq!(
        web::read_cookie(&headers, "saveId").as_deref(),
        Some("a;b@c.com")
    );
}

#[test]
fn test_session_cookie_attributes() {
    let cookie = parse_set_cookie(&encoded(&web::session_cookie("abc")));

    assert_eq!(cookie.name(), "board_session");
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(cookie::SameSite::Lax));
    assert_eq!(cookie.max_age(), None);

    let cleared = parse_set_cookie(&encoded(&web::clear_session_cookie()));
    assert_eq!(cleared.max_age(), Some(time::Duration::ZERO));
}

#[test]
fn test_flash_encoding_survives_non_ascii() {
    let flash = Flash::welcome("샘");

    let encoded = web::encode_flash(&flash);

    assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    assert_eq!(web::decode_flash(&encoded), Some(flash));
}

#[test]
fn test_corrupt_flash_is_discarded() {
    assert_eq!(web::decode_flash(""), None);
    assert_eq!(web::decode_flash("!!not base64!!"), None);
}

#[test]
fn test_signup_form_keeps_address_order() {
    let pairs = web::parse_form(
        encode_form(&[
            ("memberAddress", "first"),
            ("memberEmail", "a@b.com"),
            ("memberAddress", "second"),
            ("memberAddress", ""),
        ])
        .as_bytes(),
    );

    let request = web::signup_request(&pairs);

    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.address, vec!["first", "second", ""]);
    assert_eq!(request.nickname, "");
}

#[test]
fn test_login_form_distinguishes_absent_save_id() {
    let without = web::login_request(&web::parse_form(b"memberEmail=a%40b.com&memberPw=pw1"));
    assert_eq!(without.email, "a@b.com");
    assert_eq!(without.save_id, None);

    let empty = web::login_request(&web::parse_form(b"memberEmail=a%40b.com&saveId="));
    assert_eq!(empty.save_id.as_deref(), Some(""));
}

#[tokio::test]
async fn test_flash_is_shown_once() {
    let app: Router = build_router(create_test_app_state());
    let flash_cookie = cookie_pair(&encoded(&web::flash_cookie(&Flash::signup_failed())));

    let response = get(&app, "/", Some(&flash_cookie)).await;

    let cleared = set_cookie_named(&response, "flash").unwrap();
    assert!(cleared.contains("Max-Age=0"));
    let json = body_json(response).await;
    assert_eq!(json["model"]["message"], "회원 가입 실패");

    // The browser honours Max-Age=0, so the next request carries no flash.
    let next = body_json(get(&app, "/", None).await).await;
    assert!(next["model"].get("message").is_none());
}

#[tokio::test]
async fn test_login_page_prefills_remembered_email() {
    let app: Router = build_router(create_test_app_state());

    let response = get(&app, "/member/login", Some("saveId=a@b.com")).await;

    let json = body_json(response).await;
    assert_eq!(json["model"]["saveId"], "a@b.com");
}

#[test]
fn test_location_rejects_views() {
    let result = web::location_header(board_api::Navigation::View(board_api::LOGIN_VIEW));
    assert!(matches!(result, Err(WebError::NotARedirect(_))));
}

#[test]
fn test_relative_redirect_resolves_under_member_path() {
    let location = web::location_header(board_api::Navigation::SIGNUP).unwrap();
    assert_eq!(location, "/member/signup");
}
