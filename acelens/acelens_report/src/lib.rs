//! # Acelens Report
//!
//! `acelens_report` assembles per-identity permission report rows from the
//! decomposition and resolution engine. The surrounding pipeline fetches a
//! namespace's action catalog and, per securable object and identity, the
//! four raw ACE bitmasks; this crate turns each fetched record into one
//! ordered row of decisions, attaching the object and identity to any
//! failure so the pipeline can flag that row as unresolved instead of
//! omitting it silently.
//!
//! Key concepts:
//!
//! 1. **Report row**: the ordered decisions for one identity on one
//!    securable object, stamped with its generation time.
//!
//! 2. **Row-scoped failure**: a mask that does not reduce against the
//!    catalog fails that row alone; batch processing carries on with the
//!    remaining entries.
//!
//! 3. **One index per namespace**: the builder validates and sorts the
//!    catalog once and reuses it for every row in the run.

pub mod builder;
pub mod error;
pub mod row;

// Re-export key types for convenience
pub use builder::{BatchOutcome, ReportBuilder};
pub use error::ReportError;
pub use row::{IdentityRef, PermissionReportRow, SecurableRef};
