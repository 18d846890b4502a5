// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of inputs the signup form submits for an address.
pub const ADDRESS_PART_COUNT: usize = 3;

/// Delimiter used when the address parts are stored as a single column.
pub const ADDRESS_DELIMITER: &str = "^^^";

/// A member address as entered on the signup form.
///
/// The form always submits three inputs: the base (street) address, the
/// detail address, and an extra part (postal code or reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAddress {
    base: String,
    detail: String,
    extra: String,
}

impl MemberAddress {
    /// Creates an address from its three parts.
    #[must_use]
    pub fn new(base: &str, detail: &str, extra: &str) -> Self {
        Self {
            base: base.to_string(),
            detail: detail.to_string(),
            extra: extra.to_string(),
        }
    }

    /// Builds an address from the submitted form array.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddressParts` unless exactly three parts
    /// are provided, or `DomainError::AddressPartContainsDelimiter` if a part
    /// contains [`ADDRESS_DELIMITER`].
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Result<Self, DomainError> {
        let [base, detail, extra] = parts else {
            return Err(DomainError::InvalidAddressParts { count: parts.len() });
        };

        if let Some(index) = parts
            .iter()
            .position(|part| part.as_ref().contains(ADDRESS_DELIMITER))
        {
            return Err(DomainError::AddressPartContainsDelimiter { index });
        }

        Ok(Self::new(base.as_ref(), detail.as_ref(), extra.as_ref()))
    }

    /// Parses the stored column value back into its parts.
    ///
    /// The value is split at the first two delimiters, so anything this type
    /// stored always loads again.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStoredAddress` if the value holds fewer
    /// than two delimiters.
    pub fn from_stored(stored: &str) -> Result<Self, DomainError> {
        let mut parts = stored.splitn(ADDRESS_PART_COUNT, ADDRESS_DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(detail), Some(extra)) => Ok(Self::new(base, detail, extra)),
            _ => Err(DomainError::InvalidStoredAddress(stored.to_string())),
        }
    }

    /// Returns the value to store, or `None` when nothing was entered.
    #[must_use]
    pub fn to_stored(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        Some(self.parts().join(ADDRESS_DELIMITER))
    }

    /// Returns true when every part is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.parts().iter().all(|part| part.trim().is_empty())
    }

    #[must_use]
    pub fn parts(&self) -> [&str; ADDRESS_PART_COUNT] {
        [
            self.base.as_str(),
            self.detail.as_str(),
            self.extra.as_str(),
        ]
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub fn extra(&self) -> &str {
        &self.extra
    }
}
