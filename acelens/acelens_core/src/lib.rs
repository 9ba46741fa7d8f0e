//! # Acelens Core
//!
//! `acelens_core` provides the fundamental building blocks for the acelens
//! effective-permission reporting system. This includes error types, ID
//! definitions, and the data shapes shared between the decomposition engine
//! and the report assembly layer.
//!
//! ## Core Principles
//!
//! The reporting system is built around a small number of invariants:
//!
//! 1. **Catalog-driven vocabulary**: the set of named permission bits is not
//!    known at compile time. Every namespace supplies its own catalog of
//!    actions, and all decomposition and resolution happens against that
//!    externally fetched vocabulary.
//!
//! 2. **Nothing is dropped silently**: a raw bitmask containing a bit the
//!    catalog does not define is a hard error for that mask, never a
//!    truncated result. Misclassifying a permission bit is a security
//!    correctness bug, so the core stops rather than guesses.
//!
//! 3. **Inherited beats explicit**: the effective (inherited) allow/deny
//!    masks reflect the upstream authorization system's final decision
//!    across the inheritance chain, so they dominate any locally set
//!    allow or deny when the two disagree.
//!
//! ## Crate Structure
//!
//! - **error**: Error types for all acelens components
//! - **id**: Strongly-typed identifier types
//! - **types**: Catalog, mask, and decision data structures

pub mod error;
pub mod id;
pub mod types;

// Re-export key types for convenience
pub use error::{CatalogError, DecomposeError, Error, ResolveError, Result};
pub use id::NamespaceId;
pub use types::{
    Action, ActionCatalog, DecomposedActions, PermissionDecision, PermissionValue, RawAceMasks,
};
