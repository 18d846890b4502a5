// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-shot messages shown on the view after a redirect.

/// Shown when login finds no matching member.
pub const LOGIN_MISMATCH_MESSAGE: &str = "아이디 또는 비밀번호가 일치하지 않습니다";

/// Shown when a signup inserts no row.
pub const SIGNUP_FAILED_MESSAGE: &str = "회원 가입 실패";

/// A message carried across exactly one redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    message: String,
}

impl Flash {
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self { message }
    }

    #[must_use]
    pub fn login_mismatch() -> Self {
        Self::new(LOGIN_MISMATCH_MESSAGE.to_string())
    }

    #[must_use]
    pub fn signup_failed() -> Self {
        Self::new(SIGNUP_FAILED_MESSAGE.to_string())
    }

    /// Greeting for a newly registered member.
    #[must_use]
    pub fn welcome(nickname: &str) -> Self {
        Self::new(format!("{nickname}님의 가입을 환영 합니다😀"))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}
