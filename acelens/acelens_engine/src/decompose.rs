//! Bitmask decomposition.
//!
//! Permission bitmasks in this domain are sums of distinct powers of two,
//! one bit per catalog action. Reducing a mask to its actions is a single
//! greedy pass over the catalog in descending bit order, which yields the
//! unique exact decomposition whenever the mask is a valid combination of
//! catalog bits. The catalog may be sparse, so the scan runs against the
//! supplied index rather than assuming a dense bit range.

use log::trace;

use acelens_core::{DecomposeError, DecomposedActions};

use crate::index::CatalogIndex;

/// Decompose a raw bitmask into the catalog actions that produced it.
///
/// A zero mask decomposes to the empty list. If any set bit survives the
/// scan, no catalog action accounts for it and the whole mask is rejected
/// with [`DecomposeError::Incomplete`]; a truncated decomposition would
/// misreport a permission, which is worse than stopping.
pub fn decompose(
    mask: u64,
    index: &CatalogIndex,
) -> Result<DecomposedActions, DecomposeError> {
    if mask == 0 {
        return Ok(DecomposedActions::empty());
    }

    let mut remaining = mask;
    let mut taken = Vec::new();

    for action in index.descending() {
        if remaining >= action.bit {
            remaining -= action.bit;
            taken.push(action.clone());
        }
    }

    if remaining != 0 {
        return Err(DecomposeError::Incomplete {
            mask,
            remaining,
            namespace_id: index.namespace_id(),
        });
    }

    trace!(
        "decomposed {:#x} into {} actions against namespace {}",
        mask,
        taken.len(),
        index.namespace_id()
    );

    Ok(DecomposedActions::from_actions(taken))
}

#[cfg(test)]
mod tests {
    use super::*;
    use acelens_core::{Action, ActionCatalog, NamespaceId};

    fn index(bits: &[(u64, &str)]) -> CatalogIndex {
        let ns = NamespaceId::new();
        let actions = bits
            .iter()
            .map(|(bit, name)| Action::new(*bit, *name, *name, ns))
            .collect();
        CatalogIndex::new(&ActionCatalog::new(actions)).unwrap()
    }

    #[test]
    fn test_zero_mask_is_empty() {
        let index = index(&[(1, "Read"), (2, "Write")]);
        let decomposed = decompose(0, &index).unwrap();
        assert!(decomposed.is_empty());
    }

    #[test]
    fn test_single_bit() {
        let index = index(&[(1, "Read"), (2, "Write")]);
        let decomposed = decompose(2, &index).unwrap();
        assert_eq!(decomposed.len(), 1);
        assert_eq!(decomposed.actions()[0].name, "Write");
    }

    #[test]
    fn test_combination_highest_bit_first() {
        let index = index(&[(1, "Read"), (2, "Write"), (4, "Delete")]);
        let decomposed = decompose(5, &index).unwrap();
        let names: Vec<&str> = decomposed.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Delete", "Read"]);
    }

    #[test]
    fn test_re_encoding_round_trips() {
        let index = index(&[(1, "A"), (2, "B"), (8, "C"), (64, "D")]);
        for mask in [0u64, 1, 2, 3, 8, 9, 10, 11, 64, 75] {
            let decomposed = decompose(mask, &index).unwrap();
            assert_eq!(decomposed.bits(), mask, "mask {mask} must re-encode exactly");
            // Re-decomposing the re-encoded mask yields the identical set
            let again = decompose(decomposed.bits(), &index).unwrap();
            assert_eq!(again, decomposed);
        }
    }

    #[test]
    fn test_unknown_bit_is_rejected() {
        let index = index(&[(1, "Read")]);
        let err = decompose(3, &index).unwrap_err();
        assert_eq!(
            err,
            DecomposeError::Incomplete {
                mask: 3,
                remaining: 2,
                namespace_id: index.namespace_id(),
            }
        );
    }

    #[test]
    fn test_sparse_catalog() {
        // Catalog bits need not be contiguous
        let index = index(&[(2, "Write"), (32, "Manage")]);
        let decomposed = decompose(34, &index).unwrap();
        assert_eq!(decomposed.bits(), 34);

        // A bit falling in the gap is unresolved; the greedy scan still
        // consumes the smaller catalog bit first (8 - 2 = 6 left over)
        let err = decompose(8, &index).unwrap_err();
        assert!(matches!(err, DecomposeError::Incomplete { remaining: 6, .. }));
    }

    #[test]
    fn test_nonzero_mask_against_empty_catalog() {
        let index = CatalogIndex::new(&ActionCatalog::default()).unwrap();
        let err = decompose(1, &index).unwrap_err();
        assert!(matches!(
            err,
            DecomposeError::Incomplete {
                mask: 1,
                remaining: 1,
                ..
            }
        ));
    }
}
