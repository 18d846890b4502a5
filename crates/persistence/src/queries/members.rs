// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::MemberData;
use crate::diesel_schema::members;
use crate::error::PersistenceError;

/// Value of `member_del_fl` for members who have not withdrawn.
pub const ACTIVE_FLAG: &str = "N";

/// Diesel Queryable struct for member rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = members)]
struct MemberRow {
    member_no: i64,
    member_email: String,
    member_pw: String,
    member_nickname: String,
    member_tel: String,
    member_address: Option<String>,
    enroll_date: String,
    member_del_fl: String,
    authority: i32,
}

impl From<MemberRow> for MemberData {
    fn from(row: MemberRow) -> Self {
        Self {
            member_no: row.member_no,
            member_email: row.member_email,
            password_hash: row.member_pw,
            member_nickname: row.member_nickname,
            member_tel: row.member_tel,
            member_address: row.member_address,
            enroll_date: row.enroll_date,
            is_withdrawn: row.member_del_fl != ACTIVE_FLAG,
            authority: row.authority,
        }
    }
}

/// Retrieves an active (not withdrawn) member by exact email.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no active member has that email.
pub fn get_active_member_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<MemberData>, PersistenceError> {
    debug!("Looking up active member by email");

    let row: Option<MemberRow> = members::table
        .filter(members::member_email.eq(email))
        .filter(members::member_del_fl.eq(ACTIVE_FLAG))
        .select(MemberRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(MemberData::from))
}

/// Retrieves a member by number, withdrawn or not.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the member does not exist.
pub fn get_member_by_no(
    conn: &mut SqliteConnection,
    member_no: i64,
) -> Result<Option<MemberData>, PersistenceError> {
    debug!(member_no, "Looking up member by number");

    let row: Option<MemberRow> = members::table
        .filter(members::member_no.eq(member_no))
        .select(MemberRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(MemberData::from))
}

/// Counts member rows, including withdrawn members.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[cfg(test)]
pub fn count_members(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    let count: i64 = members::table.count().get_result(conn)?;
    Ok(count)
}

/// Checks a plain-text password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the stored hash cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    Ok(bcrypt::verify(password, password_hash)?)
}
