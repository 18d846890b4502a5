// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! Every member route sees the request's session explicitly through the
//! [`CurrentSession`] extractor instead of an ambient session object.

use axum::{extract::FromRequestParts, http::request::Parts};
use board_api::AuthenticationService;
use board_domain::Member;
use tracing::debug;

use crate::web::{SESSION_COOKIE, read_cookie};
use crate::{AppState, HttpError};

/// The session attached to the current request.
///
/// # Authentication Flow
///
/// 1. Read the `board_session` cookie
/// 2. Resolve the token via `AuthenticationService::validate_session`
/// 3. Expired or unknown tokens yield no principal
///
/// A missing or stale cookie is not an error; the request is anonymous.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession {
    /// The token presented by the client, valid or not.
    pub token: Option<String>,
    /// The logged-in member, if the token resolved.
    pub member: Option<Member>,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = read_cookie(&parts.headers, SESSION_COOKIE).filter(|t| !t.is_empty())
        else {
            return Ok(Self::default());
        };

        let mut persistence = state.persistence.lock().await;
        let member: Option<Member> =
            AuthenticationService::validate_session(&mut persistence, &token, state.session_policy)?;
        drop(persistence);

        if let Some(member) = &member {
            debug!(member_no = member.member_no, "Session validated");
        }

        Ok(Self {
            token: Some(token),
            member,
        })
    }
}
