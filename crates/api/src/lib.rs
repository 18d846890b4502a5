// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member controller layer.
//!
//! This crate sits between the HTTP transport and the persistence boundary.
//! It owns the login, logout, and signup flows, the remember-email cookie
//! policy, flash messages, and the session lifecycle. It knows nothing
//! about HTTP: every flow returns a [`MemberOutcome`] describing the
//! navigation and side effects for the transport to apply.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod flash;
mod handlers;
mod navigation;
mod remember;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticationService, SessionPolicy};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use flash::{Flash, LOGIN_MISMATCH_MESSAGE, SIGNUP_FAILED_MESSAGE};
pub use handlers::{login, login_page, logout, main_page, signup, signup_page};
pub use navigation::{LOGIN_VIEW, MAIN_VIEW, MEMBER_BASE_PATH, Navigation, SIGNUP_VIEW};
pub use remember::{REMEMBER_MAX_AGE, SAVE_ID_COOKIE, SAVE_ID_PATH, SaveIdCookie};
pub use request_response::{
    LoginRequest, MemberOutcome, PrincipalChange, SignupRequest, ViewModel, ViewResponse,
};
