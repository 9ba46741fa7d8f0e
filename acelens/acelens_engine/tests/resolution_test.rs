//! End-to-end tests for decomposition and resolution against a realistic
//! repository-style namespace catalog.

use acelens_core::{
    Action, ActionCatalog, DecomposeError, NamespaceId, PermissionValue, RawAceMasks,
};
use acelens_engine::{decompose, resolve, resolve_masks, CatalogIndex};

/// A catalog shaped like a source-control namespace: sparse bits, display
/// labels that differ from the action names.
fn repository_catalog(ns: NamespaceId) -> ActionCatalog {
    ActionCatalog::new(vec![
        Action::new(1, "Administer", "Administer", ns),
        Action::new(2, "GenericRead", "Read", ns),
        Action::new(4, "GenericContribute", "Contribute", ns),
        Action::new(8, "ForcePush", "Force push (rewrite history)", ns),
        Action::new(16, "CreateBranch", "Create branch", ns),
        Action::new(64, "ManagePermissions", "Manage permissions", ns),
    ])
}

#[test]
fn decomposition_is_complete_for_valid_masks() {
    let ns = NamespaceId::new();
    let index = CatalogIndex::new(&repository_catalog(ns)).unwrap();

    // Every subset of catalog bits must re-encode exactly
    let catalog_bits = [1u64, 2, 4, 8, 16, 64];
    for selector in 0u64..(1 << catalog_bits.len()) {
        let mask: u64 = catalog_bits
            .iter()
            .enumerate()
            .filter(|(i, _)| selector & (1 << i) != 0)
            .map(|(_, bit)| bit)
            .sum();

        let decomposed = decompose(mask, &index).unwrap();
        assert_eq!(decomposed.bits(), mask);
    }
}

#[test]
fn unknown_bits_never_silently_dropped() {
    let ns = NamespaceId::new();
    let index = CatalogIndex::new(&repository_catalog(ns)).unwrap();

    // Bit 32 falls in the catalog gap. The greedy scan consumes every
    // catalog bit it can reach (16+8+4+2+1 = 31 of the 34), so the
    // leftover is 3; what matters is that the mask errors instead of
    // producing a truncated decomposition.
    let err = decompose(32 | 2, &index).unwrap_err();
    assert_eq!(
        err,
        DecomposeError::Incomplete {
            mask: 34,
            remaining: 3,
            namespace_id: ns,
        }
    );
}

#[test]
fn single_bit_catalog_mask_with_undefined_bit_fails() {
    // Catalog defines only bit 1; raw mask 3 must fail, not return [bit 1]
    let ns = NamespaceId::new();
    let catalog = ActionCatalog::new(vec![Action::new(1, "Read", "Read", ns)]);
    let index = CatalogIndex::new(&catalog).unwrap();

    let err = decompose(3, &index).unwrap_err();
    assert!(matches!(
        err,
        DecomposeError::Incomplete {
            mask: 3,
            remaining: 2,
            ..
        }
    ));
}

#[test]
fn full_report_row_is_display_ordered() {
    let ns = NamespaceId::new();
    let index = CatalogIndex::new(&repository_catalog(ns)).unwrap();

    // Explicitly allow Read+Contribute, inherit a deny on ForcePush and an
    // allow on Administer.
    let masks = RawAceMasks::new(2 | 4, 0, 1, 8);
    let decisions = resolve_masks(&index, &masks).unwrap();

    let labels: Vec<&str> = decisions.iter().map(|d| d.display_name.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Administer",
            "Contribute",
            "Create branch",
            "Force push (rewrite history)",
            "Manage permissions",
            "Read",
        ]
    );

    let by_name = |name: &str| {
        decisions
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value)
            .unwrap()
    };
    assert_eq!(by_name("Administer"), PermissionValue::AllowInherited);
    assert_eq!(by_name("GenericRead"), PermissionValue::Allow);
    assert_eq!(by_name("GenericContribute"), PermissionValue::Allow);
    assert_eq!(by_name("ForcePush"), PermissionValue::DenyInherited);
    assert_eq!(by_name("CreateBranch"), PermissionValue::NotSet);
    assert_eq!(by_name("ManagePermissions"), PermissionValue::NotSet);
}

#[test]
fn resolution_is_deterministic() {
    let ns = NamespaceId::new();
    let index = CatalogIndex::new(&repository_catalog(ns)).unwrap();
    let masks = RawAceMasks::new(6, 1, 16, 8);

    let first = resolve_masks(&index, &masks).unwrap();
    let second = resolve_masks(&index, &masks).unwrap();
    assert_eq!(first, second);
}

#[test]
fn decisions_carry_namespace_and_bit() {
    let ns = NamespaceId::new();
    let index = CatalogIndex::new(&repository_catalog(ns)).unwrap();

    let decisions = resolve_masks(&index, &RawAceMasks::direct(2, 0)).unwrap();
    for decision in &decisions {
        assert_eq!(decision.namespace_id, ns);
        assert!(decision.bit.is_power_of_two());
    }
}

#[test]
fn lists_from_one_catalog_rejected_against_another() {
    let ns_a = NamespaceId::new();
    let ns_b = NamespaceId::new();
    let index_a = CatalogIndex::new(&repository_catalog(ns_a)).unwrap();
    let index_b = CatalogIndex::new(&ActionCatalog::new(vec![Action::new(
        2,
        "GenericRead",
        "Read",
        ns_b,
    )]))
    .unwrap();

    // Decompose against the rich catalog, resolve against the narrow one
    let lists = decompose(1 | 2, &index_a).unwrap();
    let empty = acelens_core::DecomposedActions::empty();

    let err = resolve(&index_b, &lists, &empty, &empty, &empty).unwrap_err();
    assert_eq!(
        err,
        acelens_core::ResolveError::UnknownBit {
            bit: 1,
            namespace_id: ns_b,
        }
    );
}
