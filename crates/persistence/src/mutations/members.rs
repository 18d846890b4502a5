// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member mutations.

use board_domain::{Authority, SignupMember};
use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{info, warn};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{RejectReason, SignupResult};
use crate::diesel_schema::members;
use crate::error::PersistenceError;
use crate::queries::members::ACTIVE_FLAG;

/// Inserts a new member.
///
/// The password is hashed with bcrypt at `bcrypt_cost` and the address is
/// stored in its joined form (or NULL when blank). A duplicate email is
/// reported as `SignupResult::Rejected`, not as an error.
///
/// # Errors
///
/// Returns an error if hashing fails or the insert fails for any reason
/// other than a unique constraint violation.
pub fn insert_member(
    conn: &mut SqliteConnection,
    member: &SignupMember,
    bcrypt_cost: u32,
) -> Result<SignupResult, PersistenceError> {
    let password_hash: String = bcrypt::hash(&member.password, bcrypt_cost)?;
    let stored_address: Option<String> = member.address.to_stored();

    let inserted: Result<usize, DieselError> = diesel::insert_into(members::table)
        .values((
            members::member_email.eq(&member.email),
            members::member_pw.eq(&password_hash),
            members::member_nickname.eq(&member.nickname),
            members::member_tel.eq(&member.tel),
            members::member_address.eq(stored_address.as_deref()),
            members::member_del_fl.eq(ACTIVE_FLAG),
            members::authority.eq(Authority::General.code()),
        ))
        .execute(conn);

    match inserted {
        Ok(0) => {
            warn!("Member insert affected no rows");
            Ok(SignupResult::Rejected(RejectReason::NoRowsAffected))
        }
        Ok(_) => {
            let member_no: i64 = get_last_insert_rowid(conn)?;
            info!(member_no, "Member created");
            Ok(SignupResult::Inserted { member_no })
        }
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, details)) => {
            warn!(reason = details.message(), "Member insert rejected");
            Ok(SignupResult::Rejected(RejectReason::DuplicateEmail))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
