// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building member domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The submitted address did not have exactly three parts.
    InvalidAddressParts {
        /// The number of parts that were submitted.
        count: usize,
    },
    /// A submitted address part contained the storage delimiter.
    AddressPartContainsDelimiter {
        /// Zero-based position of the offending part.
        index: usize,
    },
    /// A stored address column held fewer than three parts.
    InvalidStoredAddress(String),
    /// An authority code outside the known set.
    InvalidAuthority(i32),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAddressParts { count } => {
                write!(f, "Address must have exactly 3 parts, got {count}")
            }
            Self::AddressPartContainsDelimiter { index } => {
                write!(f, "Address part {index} must not contain \"^^^\"")
            }
            Self::InvalidStoredAddress(value) => {
                write!(f, "Stored address is malformed: {value}")
            }
            Self::InvalidAuthority(code) => write!(f, "Invalid authority code: {code}"),
        }
    }
}

impl std::error::Error for DomainError {}
