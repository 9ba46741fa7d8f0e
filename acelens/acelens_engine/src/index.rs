//! Pre-sorted catalog index.
//!
//! A namespace's action catalog arrives from the fetch layer in arbitrary
//! order. Decomposition needs the actions in descending bit order and the
//! report needs them in display order, so both orderings are computed once
//! here, at index construction, and reused for every mask in the run.

use log::debug;

use acelens_core::{Action, ActionCatalog, CatalogError, NamespaceId};

/// A validated, pre-sorted view of one namespace's action catalog.
///
/// Construction checks the catalog invariants that the rest of the engine
/// depends on: every bit is a nonzero power of two and no two actions
/// share one. A malformed catalog is rejected here, before any mask is
/// decomposed against it.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    /// Actions in descending bit order, the decomposition scan order.
    descending: Vec<Action>,

    /// Actions in ascending (display_name, name) order, the report order.
    presentation: Vec<Action>,

    /// Union of every catalog bit, for membership tests.
    bit_union: u64,

    /// The namespace the catalog belongs to; nil for an empty catalog.
    namespace_id: NamespaceId,
}

impl CatalogIndex {
    /// Build an index over a catalog.
    ///
    /// Returns a [`CatalogError`] if any action's bit is zero, has more
    /// than one bit set, or collides with another action's bit.
    pub fn new(catalog: &ActionCatalog) -> Result<Self, CatalogError> {
        let namespace_id = catalog
            .actions()
            .first()
            .map(|action| action.namespace_id)
            .unwrap_or_else(NamespaceId::nil);

        let mut bit_union = 0u64;
        for action in catalog {
            if action.bit == 0 || !action.bit.is_power_of_two() {
                return Err(CatalogError::InvalidBit {
                    bit: action.bit,
                    name: action.name.clone(),
                });
            }
            if bit_union & action.bit != 0 {
                return Err(CatalogError::DuplicateBit {
                    bit: action.bit,
                    namespace_id,
                });
            }
            bit_union |= action.bit;
        }

        let mut descending: Vec<Action> = catalog.actions().to_vec();
        descending.sort_by(|a, b| b.bit.cmp(&a.bit));

        // Display names are not unique upstream; the name tie-break keeps
        // report ordering reproducible.
        let mut presentation: Vec<Action> = catalog.actions().to_vec();
        presentation.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.name.cmp(&b.name))
        });

        debug!(
            "indexed {} actions for namespace {}",
            descending.len(),
            namespace_id
        );

        Ok(Self {
            descending,
            presentation,
            bit_union,
            namespace_id,
        })
    }

    /// The namespace this index was built for; nil if the catalog was
    /// empty.
    pub fn namespace_id(&self) -> NamespaceId {
        self.namespace_id
    }

    /// Number of actions in the index.
    pub fn len(&self) -> usize {
        self.descending.len()
    }

    /// Whether the index holds no actions.
    pub fn is_empty(&self) -> bool {
        self.descending.is_empty()
    }

    /// Actions in descending bit order.
    pub fn descending(&self) -> &[Action] {
        &self.descending
    }

    /// Actions in report order: ascending display name, ties broken by
    /// name.
    pub fn presentation(&self) -> &[Action] {
        &self.presentation
    }

    /// Whether the catalog defines the given bit.
    pub fn contains_bit(&self, bit: u64) -> bool {
        bit != 0 && self.bit_union & bit == bit
    }
}
