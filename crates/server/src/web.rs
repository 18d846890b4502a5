// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cookie, form, and response plumbing between axum and the controller.

use axum::{
    Json,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, InvalidHeaderValue, LOCATION, SET_COOKIE},
    },
    response::{IntoResponse, Response},
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use board_api::{Flash, LoginRequest, Navigation, SignupRequest, ViewResponse};
use cookie::{Cookie, CookieBuilder, SameSite};
use thiserror::Error;
use time::Duration;
use tracing::warn;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "board_session";

/// Cookie carrying a one-shot flash message.
pub const FLASH_COOKIE: &str = "flash";

/// Response construction errors.
#[derive(Debug, Error)]
pub enum WebError {
    /// A header value contained bytes HTTP does not allow.
    #[error("Header value is not valid: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    /// A redirect was requested for a view.
    #[error("Navigation {0} has no redirect location")]
    NotARedirect(Navigation),
}

/// Reads a cookie from the request headers.
///
/// Every `Cookie` header is searched and values are percent-decoded. Pairs
/// are parsed one at a time from the raw header bytes, so a malformed or
/// non-ASCII pair never hides the others. The first pair with a matching
/// name wins.
#[must_use]
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .flat_map(|value| Cookie::split_parse_encoded(String::from_utf8_lossy(value.as_bytes())))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

fn http_only_cookie(name: &'static str, value: String) -> CookieBuilder<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
}

#[must_use]
pub fn session_cookie(token: &str) -> Cookie<'static> {
    http_only_cookie(SESSION_COOKIE, token.to_string()).build()
}

#[must_use]
pub fn clear_session_cookie() -> Cookie<'static> {
    http_only_cookie(SESSION_COOKIE, String::new())
        .max_age(Duration::ZERO)
        .build()
}

#[must_use]
pub fn flash_cookie(flash: &Flash) -> Cookie<'static> {
    http_only_cookie(FLASH_COOKIE, encode_flash(flash)).build()
}

#[must_use]
pub fn clear_flash_cookie() -> Cookie<'static> {
    http_only_cookie(FLASH_COOKIE, String::new())
        .max_age(Duration::ZERO)
        .build()
}

/// Renders a cookie as a percent-encoded `Set-Cookie` header value.
///
/// # Errors
///
/// Returns an error if the rendered value is not a valid header value.
pub fn cookie_header(cookie: &Cookie<'_>) -> Result<HeaderValue, WebError> {
    Ok(HeaderValue::from_str(&cookie.encoded().to_string())?)
}

/// Resolves a redirect navigation to its `Location` header value.
///
/// # Errors
///
/// Returns an error if the navigation is a view or the location is not a
/// valid header value.
pub fn location_header(navigation: Navigation) -> Result<HeaderValue, WebError> {
    let location: String = navigation
        .location()
        .ok_or(WebError::NotARedirect(navigation))?;
    Ok(HeaderValue::from_str(&location)?)
}

/// Encodes a flash message as a cookie-safe token.
#[must_use]
pub fn encode_flash(flash: &Flash) -> String {
    URL_SAFE_NO_PAD.encode(flash.message().as_bytes())
}

/// Decodes a flash cookie value. Returns `None` for empty or corrupt values.
#[must_use]
pub fn decode_flash(value: &str) -> Option<Flash> {
    if value.is_empty() {
        return None;
    }

    let bytes: Vec<u8> = URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| warn!(error = %e, "Discarding undecodable flash cookie"))
        .ok()?;

    String::from_utf8(bytes)
        .map_err(|e| warn!(error = %e, "Discarding non-UTF-8 flash cookie"))
        .ok()
        .map(Flash::new)
}

/// Takes the pending flash message from the request, if any.
#[must_use]
pub fn take_flash(headers: &HeaderMap) -> Option<Flash> {
    read_cookie(headers, FLASH_COOKIE).and_then(|value| decode_flash(&value))
}

/// Renders a view as JSON.
///
/// When the request carried a flash cookie the response clears it, so the
/// message is shown once.
///
/// # Errors
///
/// Returns an error if a header value cannot be built.
pub fn render_view(view: ViewResponse, had_flash_cookie: bool) -> Result<Response, WebError> {
    let mut response: Response = (StatusCode::OK, Json(view)).into_response();

    if had_flash_cookie {
        response
            .headers_mut()
            .append(SET_COOKIE, cookie_header(&clear_flash_cookie())?);
    }

    Ok(response)
}

/// Builds a `303 See Other` redirect from already validated header values.
#[must_use]
pub fn redirect(location: HeaderValue, cookies: Vec<HeaderValue>) -> Response {
    let mut response: Response = StatusCode::SEE_OTHER.into_response();
    let headers: &mut HeaderMap = response.headers_mut();
    headers.insert(LOCATION, location);
    for cookie in cookies {
        headers.append(SET_COOKIE, cookie);
    }
    response
}

/// Decodes an `application/x-www-form-urlencoded` body into ordered pairs.
#[must_use]
pub fn parse_form(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

/// Builds a login request from form fields.
///
/// Missing credential fields are passed on as empty strings. `saveId` is
/// kept as submitted, so an empty value still counts as present.
#[must_use]
pub fn login_request(pairs: &[(String, String)]) -> LoginRequest {
    LoginRequest {
        email: first_value(pairs, "memberEmail").unwrap_or_default(),
        password: first_value(pairs, "memberPw").unwrap_or_default(),
        save_id: first_value(pairs, "saveId"),
    }
}

/// Builds a signup request from form fields.
///
/// Every `memberAddress` field is collected in order.
#[must_use]
pub fn signup_request(pairs: &[(String, String)]) -> SignupRequest {
    SignupRequest {
        email: first_value(pairs, "memberEmail").unwrap_or_default(),
        password: first_value(pairs, "memberPw").unwrap_or_default(),
        nickname: first_value(pairs, "memberNickname").unwrap_or_default(),
        tel: first_value(pairs, "memberTel").unwrap_or_default(),
        address: pairs
            .iter()
            .filter(|(key, _)| key == "memberAddress")
            .map(|(_, value)| value.clone())
            .collect(),
    }
}
