//! # Acelens Engine
//!
//! `acelens_engine` implements the two pure components at the heart of the
//! acelens reporting system:
//!
//! 1. **Decomposition**: reducing a raw ACE bitmask into the ordered list
//!    of named catalog actions whose bits produced it, with hard detection
//!    of bits the catalog does not define.
//!
//! 2. **Resolution**: turning the four decomposed lists of one access
//!    control entry (direct allow/deny, effective allow/deny) into one
//!    final decision per catalog action, with inherited signals taking
//!    priority over explicit ones.
//!
//! Both are deterministic, synchronous functions with no shared state and
//! no I/O; callers may fan out over (object, identity) pairs freely.
//!
//! All work runs against a [`CatalogIndex`], a validated, pre-sorted view
//! of a namespace's action catalog built once per namespace and reused for
//! every mask in the run.
//!
//! ## Usage Example
//!
//! ```rust
//! use acelens_core::{Action, ActionCatalog, NamespaceId, RawAceMasks};
//! use acelens_engine::{decompose, resolve, CatalogIndex};
//!
//! let ns = NamespaceId::new();
//! let catalog = ActionCatalog::new(vec![
//!     Action::new(1, "Read", "Read", ns),
//!     Action::new(2, "Write", "Write", ns),
//! ]);
//! let index = CatalogIndex::new(&catalog).unwrap();
//!
//! let masks = RawAceMasks::direct(1, 2);
//! let direct_allow = decompose(masks.allow, &index).unwrap();
//! let direct_deny = decompose(masks.deny, &index).unwrap();
//! let effective_allow = decompose(masks.effective_allow, &index).unwrap();
//! let effective_deny = decompose(masks.effective_deny, &index).unwrap();
//!
//! let decisions = resolve(
//!     &index,
//!     &direct_allow,
//!     &direct_deny,
//!     &effective_allow,
//!     &effective_deny,
//! )
//! .unwrap();
//! assert_eq!(decisions.len(), 2);
//! ```

pub mod decompose;
pub mod index;
pub mod resolve;

// Re-export the engine surface
pub use decompose::decompose;
pub use index::CatalogIndex;
pub use resolve::{resolve, resolve_masks};
