//! Core data types for the acelens reporting system.
//!
//! This module defines the data structures shared between the decomposition
//! engine and the report assembly layer: the namespace action catalog, the
//! raw ACE bitmasks, the decomposed action lists derived from them, and the
//! per-permission decision shapes.

pub mod action;
pub mod decision;
pub mod decomposed;
pub mod masks;

pub use action::{Action, ActionCatalog};
pub use decision::{PermissionDecision, PermissionValue};
pub use decomposed::DecomposedActions;
pub use masks::RawAceMasks;
