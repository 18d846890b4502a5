// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member controller operations.
//!
//! Handlers delegate to the [`MemberMapper`] boundary without validating
//! the submitted fields, branch on the tagged result, and describe the
//! resulting cookie, principal, and flash effects in a [`MemberOutcome`].

use board_domain::{LoginCredentials, Member, MemberAddress, SignupMember};
use board_persistence::{LoginResult, MemberMapper, SignupResult};
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_domain_error};
use crate::flash::Flash;
use crate::navigation::{LOGIN_VIEW, MAIN_VIEW, Navigation, SIGNUP_VIEW};
use crate::remember::SaveIdCookie;
use crate::request_response::{
    LoginRequest, MemberOutcome, PrincipalChange, SignupRequest, ViewModel, ViewResponse,
};

/// Authenticates a member.
///
/// On a match the principal becomes the returned member and the `saveId`
/// cookie is re-issued with its email. On a mismatch only the mismatch
/// flash is set. Both cases redirect to `/`.
///
/// # Errors
///
/// Returns an error if the boundary fails.
pub fn login<M: MemberMapper>(
    mapper: &mut M,
    request: &LoginRequest,
) -> Result<MemberOutcome, ApiError> {
    debug!(save_id = ?request.save_id, "Login attempt");

    let credentials: LoginCredentials = LoginCredentials::new(&request.email, &request.password);

    match mapper.login(&credentials)? {
        LoginResult::Matched(member) => {
            info!(member_no = member.member_no, "Login succeeded");
            let save_id: SaveIdCookie =
                SaveIdCookie::for_login(&member.email, request.save_id.as_deref());

            Ok(MemberOutcome {
                navigation: Navigation::HOME,
                principal: PrincipalChange::Establish(member),
                save_id: Some(save_id),
                flash: None,
            })
        }
        LoginResult::NotFound => {
            info!("Login failed: email or password does not match");
            Ok(MemberOutcome::redirect(Navigation::HOME).with_flash(Flash::login_mismatch()))
        }
    }
}

/// Ends the current session.
///
/// Always succeeds; there may be no session to end.
#[must_use]
pub fn logout() -> MemberOutcome {
    MemberOutcome {
        navigation: Navigation::HOME,
        principal: PrincipalChange::Invalidate,
        save_id: None,
        flash: None,
    }
}

/// Registers a new member.
///
/// Only the address shape is checked here. Everything else goes to the
/// boundary as submitted.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the address does not have exactly
/// three parts, or an internal error if the boundary fails.
pub fn signup<M: MemberMapper>(
    mapper: &mut M,
    request: &SignupRequest,
) -> Result<MemberOutcome, ApiError> {
    let address: MemberAddress =
        MemberAddress::from_parts(request.address.as_slice()).map_err(translate_domain_error)?;

    let member: SignupMember = SignupMember {
        email: request.email.clone(),
        password: request.password.clone(),
        nickname: request.nickname.clone(),
        tel: request.tel.clone(),
        address,
    };

    let result: SignupResult = mapper.signup(&member)?;

    if result.rows_affected() > 0 {
        if let SignupResult::Inserted { member_no } = result {
            info!(member_no, "Signup succeeded");
        }
        Ok(MemberOutcome::redirect(Navigation::HOME).with_flash(Flash::welcome(&request.nickname)))
    } else {
        if let SignupResult::Rejected(reason) = result {
            warn!(%reason, "Signup rejected");
        }
        Ok(MemberOutcome::redirect(Navigation::SIGNUP).with_flash(Flash::signup_failed()))
    }
}

/// Renders the main page.
#[must_use]
pub fn main_page(principal: Option<&Member>, flash: Option<Flash>) -> ViewResponse {
    render(MAIN_VIEW, principal, flash, None)
}

/// Renders the login form, pre-filling the remembered email if any.
#[must_use]
pub fn login_page(
    principal: Option<&Member>,
    flash: Option<Flash>,
    save_id: Option<&str>,
) -> ViewResponse {
    render(LOGIN_VIEW, principal, flash, save_id)
}

/// Renders the signup form.
#[must_use]
pub fn signup_page(principal: Option<&Member>, flash: Option<Flash>) -> ViewResponse {
    render(SIGNUP_VIEW, principal, flash, None)
}

fn render(
    view: &'static str,
    principal: Option<&Member>,
    flash: Option<Flash>,
    save_id: Option<&str>,
) -> ViewResponse {
    ViewResponse {
        view,
        model: ViewModel {
            login_member: principal.cloned(),
            message: flash.map(Flash::into_message),
            save_id: save_id.map(str::to_string),
        },
    }
}
