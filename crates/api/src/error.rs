// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use board_domain::DomainError;
use board_persistence::PersistenceError;
use thiserror::Error;

/// Session lifecycle errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The session store could not be read or written.
    #[error("Session store failure: {reason}")]
    SessionStore {
        /// The underlying failure.
        reason: String,
    },
    /// A session timestamp could not be formatted or parsed.
    #[error("Invalid session timestamp: {reason}")]
    InvalidTimestamp {
        /// The underlying failure.
        reason: String,
    },
}

impl From<PersistenceError> for AuthError {
    fn from(err: PersistenceError) -> Self {
        Self::SessionStore {
            reason: err.to_string(),
        }
    }
}

/// API-level errors.
///
/// A credential mismatch or a rejected signup is not an error; those are
/// ordinary outcomes. Errors here are malformed input and faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidAddressParts { .. }
        | DomainError::AddressPartContainsDelimiter { .. } => ApiError::InvalidInput {
            field: String::from("memberAddress"),
            message: err.to_string(),
        },
        DomainError::InvalidStoredAddress(_) | DomainError::InvalidAuthority(_) => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}
