// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the board member service.
//!
//! This crate stores members and login sessions in `SQLite` through Diesel.
//! The schema is embedded as Diesel migrations and applied whenever an
//! adapter is constructed.
//!
//! ## Boundary
//!
//! [`MemberMapper`] is the data-access boundary the controller depends on.
//! [`Persistence`] implements it against `SQLite`:
//!
//! - `login` finds the active member by email and checks the bcrypt hash
//! - `signup` hashes the password and inserts one row, turning a duplicate
//!   email into [`SignupResult::Rejected`]
//!
//! ## Sessions
//!
//! Sessions are rows keyed by an opaque token. Expiration timestamps use the
//! same `YYYY-MM-DD HH:MM:SS` UTC format as `CURRENT_TIMESTAMP`, so expired
//! rows can be swept with a plain SQL comparison.
//!
//! ## Testing
//!
//! [`Persistence::new_in_memory`] gives every caller its own shared-cache
//! in-memory database, so tests never see each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use board_domain::{LoginCredentials, Member, SignupMember};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mapper;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{LoginResult, MemberData, RejectReason, SessionData, SignupResult};
pub use error::PersistenceError;
pub use mapper::MemberMapper;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for members and sessions.
pub struct Persistence {
    conn: SqliteConnection,
    bcrypt_cost: u32,
}

impl Persistence {
    /// Creates a new persistence adapter with an isolated in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_board_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        })
    }

    /// Sets the bcrypt work factor used when hashing new passwords.
    ///
    /// Existing hashes carry their own cost and verify regardless.
    #[must_use]
    pub const fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Returns the bcrypt work factor used for new passwords.
    #[cfg(test)]
    #[must_use]
    pub(crate) const fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Retrieves an active member row by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_active_member_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<MemberData>, PersistenceError> {
        queries::members::get_active_member_by_email(&mut self.conn, email)
    }

    /// Retrieves a member by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed.
    pub fn get_member_by_no(&mut self, member_no: i64) -> Result<Option<Member>, PersistenceError> {
        queries::members::get_member_by_no(&mut self.conn, member_no)?
            .map(|data| data.to_member())
            .transpose()
    }

    /// Counts member rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    #[cfg(test)]
    pub(crate) fn count_members(&mut self) -> Result<i64, PersistenceError> {
        queries::members::count_members(&mut self.conn)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Creates a new session for a member.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        member_no: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::sessions::create_session(&mut self.conn, session_token, member_no, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::sessions::get_session_by_token(&mut self.conn, session_token)
    }

    /// Counts the sessions held by a member.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_sessions_for_member(&mut self, member_no: i64) -> Result<i64, PersistenceError> {
        queries::sessions::count_sessions_for_member(&mut self.conn, member_no)
    }

    /// Records activity on a session and slides its expiration.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn touch_session(
        &mut self,
        session_id: i64,
        expires_at: &str,
    ) -> Result<(), PersistenceError> {
        mutations::sessions::touch_session(&mut self.conn, session_id, expires_at)
    }

    /// Deletes a session by token. Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<usize, PersistenceError> {
        mutations::sessions::delete_session(&mut self.conn, session_token)
    }

    /// Deletes all expired sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_expired_sessions(&mut self) -> Result<usize, PersistenceError> {
        mutations::sessions::delete_expired_sessions(&mut self.conn)
    }
}

impl MemberMapper for Persistence {
    fn login(&mut self, credentials: &LoginCredentials) -> Result<LoginResult, PersistenceError> {
        let Some(stored) = self.get_active_member_by_email(&credentials.email)? else {
            debug!("No active member for submitted email");
            return Ok(LoginResult::NotFound);
        };

        if !queries::members::verify_password(&credentials.password, &stored.password_hash)? {
            debug!(member_no = stored.member_no, "Password did not match");
            return Ok(LoginResult::NotFound);
        }

        Ok(LoginResult::Matched(stored.to_member()?))
    }

    fn signup(&mut self, member: &SignupMember) -> Result<SignupResult, PersistenceError> {
        info!(nickname = %member.nickname, "Inserting member");
        mutations::members::insert_member(&mut self.conn, member, self.bcrypt_cost)
    }
}
