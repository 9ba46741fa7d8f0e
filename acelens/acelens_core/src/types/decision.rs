//! Permission decision types.
//!
//! This module defines the five-state outcome of resolving one catalog
//! action for one identity, and the decision record that carries it into
//! report rows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::NamespaceId;
use crate::types::Action;

/// The resolved state of one permission for one identity.
///
/// A closed enumeration of exactly five cases. Resolution works on the
/// variants; the display strings exist only at the rendering boundary and
/// are produced by [`PermissionValue::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionValue {
    /// Allowed by the inherited (effective) mask.
    #[serde(rename = "Allow (Inherited)")]
    AllowInherited,

    /// Denied by the inherited (effective) mask.
    #[serde(rename = "Deny (Inherited)")]
    DenyInherited,

    /// Explicitly allowed on the object itself.
    Allow,

    /// Explicitly denied on the object itself.
    Deny,

    /// Not present in any of the four masks.
    #[serde(rename = "Not Set")]
    NotSet,
}

impl PermissionValue {
    /// The display string for this decision, as it appears in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllowInherited => "Allow (Inherited)",
            Self::DenyInherited => "Deny (Inherited)",
            Self::Allow => "Allow",
            Self::Deny => "Deny",
            Self::NotSet => "Not Set",
        }
    }

    /// Whether this decision grants the permission, from either source.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow | Self::AllowInherited)
    }

    /// Whether this decision came from the inherited masks rather than the
    /// explicit ones.
    pub fn is_inherited(&self) -> bool {
        matches!(self, Self::AllowInherited | Self::DenyInherited)
    }
}

impl fmt::Display for PermissionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The resolved decision for one catalog action in one report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDecision {
    /// The bit position of the action.
    pub bit: u64,

    /// Human-readable label of the action.
    pub display_name: String,

    /// Short identifier of the action.
    pub name: String,

    /// The owning authorization namespace.
    pub namespace_id: NamespaceId,

    /// The resolved five-state outcome.
    pub value: PermissionValue,
}

impl PermissionDecision {
    /// Build a decision for a catalog action.
    pub fn new(action: &Action, value: PermissionValue) -> Self {
        Self {
            bit: action.bit,
            display_name: action.display_name.clone(),
            name: action.name.clone(),
            namespace_id: action.namespace_id,
            value,
        }
    }
}

impl fmt::Display for PermissionDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name, self.value)
    }
}
