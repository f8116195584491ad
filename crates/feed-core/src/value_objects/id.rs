//! Entity ID - 64-bit identifier used by posts, comments, and users
//!
//! The remote API sends IDs either as JSON numbers or as strings. They are
//! always serialized back as strings so large values survive JavaScript clients.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a remote entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(i64);

impl EntityId {
    /// Create a new EntityId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the id is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, EntityIdParseError> {
        s.trim()
            .parse::<i64>()
            .map(EntityId)
            .map_err(|_| EntityIdParseError::InvalidFormat)
    }
}

/// Error when parsing an EntityId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdParseError {
    #[error("invalid entity id format")]
    InvalidFormat,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = EntityIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct EntityIdVisitor;

        impl Visitor<'_> for EntityIdVisitor {
            type Value = EntityId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer entity id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                Ok(EntityId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(EntityId)
                    .map_err(|_| de::Error::custom("entity id out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                EntityId::parse(value).map_err(|_| de::Error::custom("invalid entity id string"))
            }
        }

        deserializer.deserialize_any(EntityIdVisitor)
    }
}
