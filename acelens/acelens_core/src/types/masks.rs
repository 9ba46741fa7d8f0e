//! Raw ACE bitmask records.

use serde::{Deserialize, Serialize};

/// The four raw bitmasks of one access control entry, as read from the
/// authorization service for one (securable object, identity) pair.
///
/// The explicit pair is always present on an ACE record; the effective
/// pair is omitted by the service when no inheritance applies, so both
/// default to zero on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAceMasks {
    /// Permissions explicitly allowed on the object itself.
    pub allow: u64,

    /// Permissions explicitly denied on the object itself.
    pub deny: u64,

    /// Allowed permissions after the upstream system resolved the full
    /// inheritance chain.
    #[serde(default)]
    pub effective_allow: u64,

    /// Denied permissions after the upstream system resolved the full
    /// inheritance chain.
    #[serde(default)]
    pub effective_deny: u64,
}

impl RawAceMasks {
    /// Create a mask record from all four values.
    pub fn new(allow: u64, deny: u64, effective_allow: u64, effective_deny: u64) -> Self {
        Self {
            allow,
            deny,
            effective_allow,
            effective_deny,
        }
    }

    /// Create a mask record with only the explicit pair set.
    pub fn direct(allow: u64, deny: u64) -> Self {
        Self {
            allow,
            deny,
            effective_allow: 0,
            effective_deny: 0,
        }
    }
}
