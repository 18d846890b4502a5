// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session lifecycle service.
//!
//! A session is a `sessions` row keyed by an opaque token. Each validated
//! request slides the expiration forward by the idle timeout; a session
//! seen after its expiration is deleted and treated as absent.

use board_domain::Member;
use board_persistence::{Persistence, SessionData};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, info};

use crate::error::AuthError;

/// Session timestamps share the `CURRENT_TIMESTAMP` layout so the store can
/// compare them in SQL.
const SESSION_TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Session lifecycle policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    /// How long a session survives without activity.
    pub idle_timeout: Duration,
}

impl SessionPolicy {
    #[must_use]
    pub const fn new(idle_timeout: Duration) -> Self {
        Self { idle_timeout }
    }
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self::new(Duration::minutes(30))
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Creates a session for a member and returns its token.
    ///
    /// Any previous session of the same client is deleted first, so a
    /// re-login always yields a fresh token.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub fn establish_session(
        persistence: &mut Persistence,
        member: &Member,
        policy: SessionPolicy,
        previous_token: Option<&str>,
    ) -> Result<String, AuthError> {
        if let Some(previous) = previous_token {
            persistence.delete_session(previous)?;
        }

        let session_token: String = Self::generate_session_token();
        let expires_at: String = Self::expiration_from_now(policy)?;

        persistence.create_session(&session_token, member.member_no, &expires_at)?;

        info!(member_no = member.member_no, %expires_at, "Session established");
        Ok(session_token)
    }

    /// Resolves a session token to its member.
    ///
    /// Returns `Ok(None)` for unknown or expired tokens. Expired sessions are
    /// deleted. A valid session has its expiration moved forward.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails or a stored timestamp is
    /// malformed.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
        policy: SessionPolicy,
    ) -> Result<Option<Member>, AuthError> {
        let session: Option<SessionData> = persistence.get_session_by_token(session_token)?;
        let Some(session) = session else {
            debug!("Unknown session token");
            return Ok(None);
        };

        let expires_at: OffsetDateTime = Self::parse_timestamp(&session.expires_at)?;
        if OffsetDateTime::now_utc() > expires_at {
            info!(member_no = session.member_no, "Session expired");
            persistence.delete_session(session_token)?;
            return Ok(None);
        }

        let Some(member) = persistence.get_member_by_no(session.member_no)? else {
            persistence.delete_session(session_token)?;
            return Ok(None);
        };

        let next_expiry: String = Self::expiration_from_now(policy)?;
        persistence.touch_session(session.session_id, &next_expiry)?;

        Ok(Some(member))
    }

    /// Deletes a session. Unknown tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub fn invalidate(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        let removed: usize = persistence.delete_session(session_token)?;
        debug!(removed, "Session invalidated");
        Ok(())
    }

    /// Deletes every expired session and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub fn sweep_expired(persistence: &mut Persistence) -> Result<usize, AuthError> {
        Ok(persistence.delete_expired_sessions()?)
    }

    /// Formats a UTC instant in the session timestamp layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the instant cannot be formatted.
    pub fn format_timestamp(instant: OffsetDateTime) -> Result<String, AuthError> {
        instant
            .format(SESSION_TIMESTAMP)
            .map_err(|e| AuthError::InvalidTimestamp {
                reason: e.to_string(),
            })
    }

    /// Parses a session timestamp as UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the session timestamp layout.
    pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, AuthError> {
        PrimitiveDateTime::parse(value, SESSION_TIMESTAMP)
            .map(PrimitiveDateTime::assume_utc)
            .map_err(|e| AuthError::InvalidTimestamp {
                reason: format!("'{value}': {e}"),
            })
    }

    fn expiration_from_now(policy: SessionPolicy) -> Result<String, AuthError> {
        Self::format_timestamp(OffsetDateTime::now_utc() + policy.idle_timeout)
    }

    /// Generates an unguessable 128-bit session token.
    fn generate_session_token() -> String {
        format!("{:032x}", rand::random::<u128>())
    }
}
