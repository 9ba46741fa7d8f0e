//! Permission resolution.
//!
//! Resolution turns the four decomposed lists of one access control entry
//! into one final decision per catalog action. The effective (inherited)
//! masks carry the upstream authorization system's already-resolved
//! verdict across the full inheritance chain, so they outrank anything set
//! directly on the object.

use log::trace;

use acelens_core::{DecomposedActions, PermissionDecision, PermissionValue, ResolveError};

use crate::decompose::decompose;
use crate::index::CatalogIndex;

/// Resolve the four decomposed lists into one decision per catalog action.
///
/// Every action in the catalog gets a decision, whether or not it appears
/// in any input list; absent actions resolve to [`PermissionValue::NotSet`].
/// Output is in presentation order: ascending display name, ties broken by
/// name. An empty catalog yields an empty list.
///
/// Each input entry must reference a bit the index defines; a stray bit
/// means the lists were decomposed against a different catalog and the
/// whole call is rejected with [`ResolveError::UnknownBit`].
pub fn resolve(
    index: &CatalogIndex,
    direct_allow: &DecomposedActions,
    direct_deny: &DecomposedActions,
    effective_allow: &DecomposedActions,
    effective_deny: &DecomposedActions,
) -> Result<Vec<PermissionDecision>, ResolveError> {
    for list in [direct_allow, direct_deny, effective_allow, effective_deny] {
        for action in list {
            if !index.contains_bit(action.bit) {
                return Err(ResolveError::UnknownBit {
                    bit: action.bit,
                    namespace_id: index.namespace_id(),
                });
            }
        }
    }

    let decisions = index
        .presentation()
        .iter()
        .map(|action| {
            // Inherited outranks explicit. Within the inherited pair,
            // allow is tested before deny; upstream resolver order, do
            // not swap.
            let value = if effective_allow.contains_bit(action.bit) {
                PermissionValue::AllowInherited
            } else if effective_deny.contains_bit(action.bit) {
                PermissionValue::DenyInherited
            } else if direct_allow.contains_bit(action.bit) {
                PermissionValue::Allow
            } else if direct_deny.contains_bit(action.bit) {
                PermissionValue::Deny
            } else {
                PermissionValue::NotSet
            };

            PermissionDecision::new(action, value)
        })
        .collect();

    trace!(
        "resolved {} decisions for namespace {}",
        index.len(),
        index.namespace_id()
    );

    Ok(decisions)
}

/// Decompose all four masks of an ACE record and resolve them in one step.
///
/// Convenience for callers holding the raw record; equivalent to four
/// [`decompose`] calls followed by [`resolve`].
pub fn resolve_masks(
    index: &CatalogIndex,
    masks: &acelens_core::RawAceMasks,
) -> acelens_core::Result<Vec<PermissionDecision>> {
    let direct_allow = decompose(masks.allow, index)?;
    let direct_deny = decompose(masks.deny, index)?;
    let effective_allow = decompose(masks.effective_allow, index)?;
    let effective_deny = decompose(masks.effective_deny, index)?;

    let decisions = resolve(
        index,
        &direct_allow,
        &direct_deny,
        &effective_allow,
        &effective_deny,
    )?;

    Ok(decisions)
}
