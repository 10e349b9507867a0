//! Typed identifiers for the Stanza application.
//!
//! The backend hands out numeric ids for every entity. Wrapping them in a
//! marker-typed [`Id`] keeps a poem id from being passed where a user id is
//! expected, while still serializing as a bare JSON number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper around a backend-assigned numeric id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: u64,
    _phantom: std::marker::PhantomData<T>,
}

// Custom serde implementation to serialize as just a number
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

impl<T> Id<T> {
    /// Wraps a raw id.
    ///
    /// # Example
    /// ```
    /// use stanza::id::PoemId;
    ///
    /// let poem_id = PoemId::new(7);
    /// assert_eq!(poem_id.get(), 7);
    /// ```
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the raw numeric value.
    pub const fn get(&self) -> u64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::num::ParseIntError;

    /// Parses an id out of a route segment such as the `7` in `/poems/7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self::new)
    }
}

// Type markers for different entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoemMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationshipMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FavoriteMarker;

/// Type alias for User IDs
pub type UserId = Id<UserMarker>;

/// Type alias for Poem IDs
pub type PoemId = Id<PoemMarker>;

/// Type alias for Relationship IDs
pub type RelationshipId = Id<RelationshipMarker>;

/// Type alias for Favorite IDs
pub type FavoriteId = Id<FavoriteMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "Id(42)");
    }

    #[test]
    fn test_id_from_route_segment() {
        let id: PoemId = "15".parse().unwrap();
        assert_eq!(id, PoemId::new(15));
        assert!("fifteen".parse::<PoemId>().is_err());
    }

    #[test]
    fn test_type_safety() {
        let user_id = UserId::new(1);
        let poem_id = PoemId::new(1);

        // This should compile - same ID type
        let _same_user: UserId = user_id;

        // This would not compile - different ID types
        // let _wrong_type: UserId = poem_id;

        assert_eq!(user_id.get(), poem_id.get());
    }

    #[test]
    fn test_serde() {
        let original = FavoriteId::new(9);

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "9");

        let deserialized: FavoriteId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}
