// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Where a flow sends the browser next.

/// Base path of the member routes. Relative redirect targets resolve here.
pub const MEMBER_BASE_PATH: &str = "/member";

pub const MAIN_VIEW: &str = "common/main";
pub const LOGIN_VIEW: &str = "member/login";
pub const SIGNUP_VIEW: &str = "member/signup";

/// A navigation instruction returned by every controller operation.
///
/// Renders as the view name, or as `redirect:<target>` for redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Render the named view.
    View(&'static str),
    /// Redirect to a target. Absolute targets start with `/`; anything else
    /// is relative to [`MEMBER_BASE_PATH`].
    Redirect(&'static str),
}

impl Navigation {
    /// Redirect to the site root.
    pub const HOME: Self = Self::Redirect("/");
    /// Redirect back to the signup form.
    pub const SIGNUP: Self = Self::Redirect("signup");

    /// Resolves a redirect target to the `Location` path.
    ///
    /// Returns `None` for views.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self {
            Self::View(_) => None,
            Self::Redirect(target) if target.starts_with('/') => Some((*target).to_string()),
            Self::Redirect(target) => Some(format!("{MEMBER_BASE_PATH}/{target}")),
        }
    }
}

impl std::fmt::Display for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::View(name) => write!(f, "{name}"),
            Self::Redirect(target) => write!(f, "redirect:{target}"),
        }
    }
}
