// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP tests driving the router end to end.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod cookie_tests;

use super::*;
use axum::{
    body::Body,
    http::{Request, header::SET_COOKIE},
};
use cookie::Cookie;
use tower::ServiceExt;

/// Helper to create test app state with in-memory persistence.
fn create_test_app_state() -> AppState {
    let persistence: Persistence = Persistence::new_in_memory()
        .expect("Failed to create in-memory persistence")
        .with_bcrypt_cost(4);
    AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        session_policy: SessionPolicy::default(),
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }

    app.clone()
        .oneshot(builder.body(Body::from(encode_form(fields))).unwrap())
        .await
        .unwrap()
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Sends a GET with a `Cookie` header taken verbatim from raw bytes.
async fn get_with_raw_cookie(app: &Router, uri: &str, cookie: &[u8]) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("cookie", HeaderValue::from_bytes(cookie).unwrap())
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// All `Set-Cookie` header values on a response.
fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

/// The `Set-Cookie` value for a named cookie, if present.
fn set_cookie_named(response: &Response, name: &str) -> Option<String> {
    set_cookies(response)
        .into_iter()
        .find(|cookie| cookie.starts_with(&format!("{name}=")))
}

/// The `name=value` pair a browser would send back for a `Set-Cookie` value.
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Parses a `Set-Cookie` value, percent-decoding the cookie value.
fn parse_set_cookie(set_cookie: &str) -> Cookie<'static> {
    Cookie::parse_encoded(set_cookie.to_string()).unwrap()
}

/// The `Set-Cookie` value a server-built cookie is sent as.
fn encoded(cookie: &Cookie<'_>) -> String {
    cookie.encoded().to_string()
}

/// Signs up and logs in `email` / `pw1` with the remember flag set.
///
/// Returns the `board_session` and `saveId` pairs the browser sends back.
async fn login_remembering(app: &Router, email: &str) -> (String, String) {
    let signup = post_form(app, "/member/signup", &signup_fields(email, "Sam"), None).await;
    assert_eq!(location(&signup), "/");

    let response = post_form(
        app,
        "/member/login",
        &[("memberEmail", email), ("memberPw", "pw1"), ("saveId", "on")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let session = cookie_pair(&set_cookie_named(&response, "board_session").unwrap());
    let save_id = cookie_pair(&set_cookie_named(&response, "saveId").unwrap());
    (session, save_id)
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
}

fn signup_fields<'a>(email: &'a str, nickname: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("memberEmail", email),
        ("memberPw", "pw1"),
        ("memberNickname", nickname),
        ("memberTel", "01012345678"),
        ("memberAddress", "04540"),
        ("memberAddress", "Seoul Jung-gu"),
        ("memberAddress", "3F"),
    ]
}

/// Signs up `a@b.com` / `pw1` and returns the router.
async fn app_with_member() -> Router {
    let app: Router = build_router(create_test_app_state());
    let response = post_form(&app, "/member/signup", &signup_fields("a@b.com", "Sam"), None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    app
}
