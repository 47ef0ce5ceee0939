//! Newtype wrapper for storage provider identifiers.
//!
//! Providers are registered under fixed numeric ids rather than UUIDs;
//! the newtype prevents mixing them up with other integer values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a registered storage provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(pub u32);

impl ProviderId {
    /// Create a provider id from a raw numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Return the raw numeric value.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProviderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
