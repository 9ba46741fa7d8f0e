//! Namespace action catalog types.
//!
//! An authorization namespace describes the class of securable object it
//! governs as a catalog of named actions, one per permission bit. Catalogs
//! are fetched from the authorization service by the surrounding pipeline
//! and supplied to the core as-is; the serde shapes here mirror the
//! service's JSON records so the fetched payload deserializes directly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::NamespaceId;

/// One named permission bit within an authorization namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// The bit position this action occupies. Positive, a power of two,
    /// unique within its catalog.
    pub bit: u64,

    /// Short identifier, unique within the catalog.
    pub name: String,

    /// Human-readable label. The sole sort key for report output; not
    /// guaranteed unique by the source system.
    pub display_name: String,

    /// The owning authorization namespace. Carried through to decisions
    /// and errors, never interpreted.
    pub namespace_id: NamespaceId,
}

impl Action {
    /// Create a new action.
    pub fn new(
        bit: u64,
        name: impl Into<String>,
        display_name: impl Into<String>,
        namespace_id: NamespaceId,
    ) -> Self {
        Self {
            bit,
            name: name.into(),
            display_name: display_name.into(),
            namespace_id,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#x})", self.name, self.bit)
    }
}

/// The set of actions belonging to one authorization namespace.
///
/// Ordering is irrelevant here; the engine builds its own sorted views.
/// The catalog serializes as a bare JSON array so the `actions` collection
/// of a namespace description parses without an intermediate shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionCatalog {
    actions: Vec<Action>,
}

impl ActionCatalog {
    /// Create a catalog from a list of actions.
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// The actions in this catalog, in fetch order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of actions in the catalog.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the catalog is empty. An empty catalog is valid and
    /// resolves to an empty report.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over the actions.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl From<Vec<Action>> for ActionCatalog {
    fn from(actions: Vec<Action>) -> Self {
        Self::new(actions)
    }
}

impl IntoIterator for ActionCatalog {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActionCatalog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
