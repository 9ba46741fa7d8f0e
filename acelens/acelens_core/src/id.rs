//! Strongly-typed identifiers for the acelens reporting system.
//!
//! This module provides the identifier types used throughout the system,
//! ensuring type safety and clear semantics. Each identifier type is a thin
//! wrapper around a UUID with a phantom type parameter to ensure type
//! safety.
//!
//! # Examples
//!
//! ```
//! use acelens_core::id::NamespaceId;
//! use std::str::FromStr;
//!
//! // Create a new random ID
//! let namespace_id = NamespaceId::new();
//!
//! // Create from string
//! let id_str = "550e8400-e29b-41d4-a716-446655440000";
//! let namespace_id = NamespaceId::from_str(id_str).unwrap();
//! assert_eq!(namespace_id.to_string(), id_str);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A type-safe identifier based on UUID.
///
/// This is a generic identifier type that is specialized for different
/// entity types using the phantom type parameter `T`. Identifiers serialize
/// as their bare UUID string, matching the way the upstream authorization
/// service encodes namespace identifiers in its REST payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Id<T> {
    uuid: Uuid,
    #[serde(skip)]
    _marker: std::marker::PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Create an identifier from a specific UUID.
    ///
    /// This is useful when you need to create an identifier with a known
    /// UUID, such as when deserializing a namespace description fetched
    /// from the authorization service.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get the underlying UUID.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Create a nil (all zeros) identifier.
    ///
    /// Used as a sentinel for catalogs whose namespace is unknown, such as
    /// an empty catalog.
    pub fn nil() -> Self {
        Self {
            uuid: Uuid::nil(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Check if this is a nil identifier.
    pub fn is_nil(&self) -> bool {
        self.uuid == Uuid::nil()
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            uuid: Uuid::parse_str(s)?,
            _marker: std::marker::PhantomData,
        })
    }
}

/// Marker type for authorization namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamespaceMarker;
/// Identifier for an authorization namespace.
pub type NamespaceId = Id<NamespaceMarker>;
