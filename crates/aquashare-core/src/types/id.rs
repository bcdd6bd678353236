//! Newtype wrapper around [`uuid::Uuid`] for user identifiers.
//!
//! Share tokens carry the user id as an opaque string claim, so the boundary
//! between "string from an untrusted token" and "validated identifier" is the
//! [`UserId::parse_canonical`] constructor. Only the canonical lowercase
//! hyphenated 8-4-4-4-12 rendering is accepted there; uppercase, braced, or
//! URN forms that `uuid` would otherwise parse are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an identifier from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a string that must already be in canonical form.
    ///
    /// Canonical means the lowercase hyphenated rendering, e.g.
    /// `3fa85f64-5717-4562-b3fc-2c963f66afa6`.
    pub fn parse_canonical(s: &str) -> Result<Self, AppError> {
        let uuid = Uuid::try_parse(s)
            .map_err(|_| AppError::validation(format!("user id is not a UUID: {s:?}")))?;
        if s != uuid.as_hyphenated().to_string() {
            return Err(AppError::validation(format!(
                "user id is not in canonical lowercase hyphenated form: {s:?}"
            )));
        }
        Ok(Self(uuid))
    }

    /// Return the inner UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Return a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Uuid {
        id.0
    }
}
