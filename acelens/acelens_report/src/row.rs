//! Report row model.
//!
//! This module defines the row shapes handed back to the reporting
//! pipeline: the references identifying what was evaluated, and the row
//! itself holding one ordered decision per catalog action. Rows are
//! transient; they are produced and consumed within one reporting pass and
//! never cached across identities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use acelens_core::PermissionDecision;

/// Reference to one securable object under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurableRef {
    /// The security token addressing the object in its namespace.
    pub token: String,

    /// Human-readable name of the object, used in report output and
    /// error messages.
    pub name: String,
}

impl SecurableRef {
    /// Create a new securable object reference.
    pub fn new(token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for SecurableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Reference to one identity under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    /// The identity descriptor as issued by the identity provider.
    pub descriptor: String,

    /// Human-readable display name of the identity.
    pub display_name: String,
}

impl IdentityRef {
    /// Create a new identity reference.
    pub fn new(descriptor: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for IdentityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// One report row: the resolved decisions for one identity on one
/// securable object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionReportRow {
    /// The securable object the decisions apply to.
    pub object: SecurableRef,

    /// The identity the decisions apply to.
    pub identity: IdentityRef,

    /// One decision per catalog action, in presentation order.
    pub decisions: Vec<PermissionDecision>,

    /// When this row was produced.
    pub generated_at: DateTime<Utc>,
}

impl PermissionReportRow {
    /// Create a report row stamped with the current time.
    pub fn new(
        object: SecurableRef,
        identity: IdentityRef,
        decisions: Vec<PermissionDecision>,
    ) -> Self {
        Self {
            object,
            identity,
            decisions,
            generated_at: Utc::now(),
        }
    }

    /// Look up the decision for an action by its short name.
    pub fn decision(&self, name: &str) -> Option<&PermissionDecision> {
        self.decisions.iter().find(|d| d.name == name)
    }
}
