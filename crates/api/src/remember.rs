// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The remember-email cookie.
//!
//! A successful login always re-issues `saveId` with the matched member's
//! email. When the login form carried the remember flag the cookie lives for
//! thirty days; otherwise it is sent with `Max-Age=0`, which tells the
//! browser to drop any copy it holds. A failed login never touches it.

use cookie::Cookie;
use time::Duration;

/// Cookie name.
pub const SAVE_ID_COOKIE: &str = "saveId";

/// Cookie path; the login form is reachable from every page.
pub const SAVE_ID_PATH: &str = "/";

/// Thirty days, in seconds.
pub const REMEMBER_MAX_AGE: i64 = 60 * 60 * 24 * 30;

/// A `saveId` cookie to be written on the login response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveIdCookie {
    pub email: String,
    pub max_age: i64,
}

impl SaveIdCookie {
    /// Builds the cookie for a successful login.
    ///
    /// Any present flag value counts as "remember", including the empty
    /// string. Only an absent flag expires the cookie.
    #[must_use]
    pub fn for_login(email: &str, save_id: Option<&str>) -> Self {
        let max_age: i64 = if save_id.is_some() {
            REMEMBER_MAX_AGE
        } else {
            0
        };

        Self {
            email: email.to_string(),
            max_age,
        }
    }

    /// Builds the `Set-Cookie` cookie.
    ///
    /// Write it with [`Cookie::encoded`] so that emails holding `;`, spaces,
    /// or non-ASCII text survive the trip back from the browser.
    #[must_use]
    pub fn to_cookie(&self) -> Cookie<'static> {
        Cookie::build((SAVE_ID_COOKIE, self.email.clone()))
            .path(SAVE_ID_PATH)
            .max_age(Duration::seconds(self.max_age))
            .build()
    }
}
