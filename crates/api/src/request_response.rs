// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use board_domain::Member;
use serde::Serialize;

use crate::flash::Flash;
use crate::navigation::Navigation;
use crate::remember::SaveIdCookie;

/// Login form submission.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// The submitted email.
    pub email: String,
    /// The submitted plain-text password.
    pub password: String,
    /// The remember-email checkbox. Present means checked, whatever its value.
    pub save_id: Option<String>,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("save_id", &self.save_id)
            .finish()
    }
}

/// Signup form submission.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub tel: String,
    /// The `memberAddress` fields in submission order.
    pub address: Vec<String>,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("nickname", &self.nickname)
            .field("tel", &self.tel)
            .field("address", &self.address)
            .finish()
    }
}

/// What the caller must do with the session principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrincipalChange {
    /// Leave the current principal, if any, untouched.
    Keep,
    /// Replace any current principal with this member.
    Establish(Member),
    /// Remove the current principal, if any.
    Invalidate,
}

/// The result of a controller flow.
///
/// The controller decides every effect; the HTTP layer only applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberOutcome {
    pub navigation: Navigation,
    pub principal: PrincipalChange,
    /// Set only on a successful login.
    pub save_id: Option<SaveIdCookie>,
    pub flash: Option<Flash>,
}

impl MemberOutcome {
    /// A redirect with no other effects.
    #[must_use]
    pub const fn redirect(navigation: Navigation) -> Self {
        Self {
            navigation,
            principal: PrincipalChange::Keep,
            save_id: None,
            flash: None,
        }
    }

    #[must_use]
    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }
}

/// Attributes exposed to a rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// The session principal, or null.
    pub login_member: Option<Member>,
    /// The flash message carried by the previous redirect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The remembered email, on the login view only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_id: Option<String>,
}

/// A view to render with its model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewResponse {
    pub view: &'static str,
    pub model: ViewModel,
}
