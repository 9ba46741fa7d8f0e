//! Report row assembly.

use log::{debug, warn};

use acelens_core::{ActionCatalog, CatalogError, RawAceMasks};
use acelens_engine::{resolve_masks, CatalogIndex};

use crate::error::ReportError;
use crate::row::{IdentityRef, PermissionReportRow, SecurableRef};

/// Assembles report rows against one namespace's catalog.
///
/// The catalog is validated and indexed once at construction; every row in
/// the run reuses the same index. The builder holds no other state, so one
/// instance can serve concurrent callers by shared reference.
pub struct ReportBuilder {
    /// The pre-sorted catalog view shared by all rows.
    index: CatalogIndex,
}

impl ReportBuilder {
    /// Create a builder for a namespace's action catalog.
    ///
    /// Fails if the catalog violates its bit invariants; a report built on
    /// a malformed catalog would misstate every row.
    pub fn new(catalog: &ActionCatalog) -> Result<Self, CatalogError> {
        let index = CatalogIndex::new(catalog)?;
        Ok(Self { index })
    }

    /// Create a builder from an already-built index.
    pub fn from_index(index: CatalogIndex) -> Self {
        Self { index }
    }

    /// The catalog index this builder resolves against.
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Produce the report row for one identity on one securable object.
    ///
    /// Any engine failure is wrapped with the object and identity under
    /// evaluation so the caller can flag the row as unresolved.
    pub fn row(
        &self,
        object: &SecurableRef,
        identity: &IdentityRef,
        masks: &RawAceMasks,
    ) -> Result<PermissionReportRow, ReportError> {
        debug!(
            "resolving {} actions for identity '{}' on '{}'",
            self.index.len(),
            identity,
            object
        );

        let decisions =
            resolve_masks(&self.index, masks).map_err(|source| ReportError::Row {
                object: object.name.clone(),
                identity: identity.display_name.clone(),
                source,
            })?;

        Ok(PermissionReportRow::new(
            object.clone(),
            identity.clone(),
            decisions,
        ))
    }

    /// Produce rows for a batch of fetched ACE records.
    ///
    /// A failing entry fails alone: its error is collected and the rest of
    /// the batch is still processed. Whether to ship a partial report or
    /// abort the run is the caller's call.
    pub fn batch<I>(&self, entries: I) -> BatchOutcome
    where
        I: IntoIterator<Item = (SecurableRef, IdentityRef, RawAceMasks)>,
    {
        let mut rows = Vec::new();
        let mut failures = Vec::new();

        for (object, identity, masks) in entries {
            match self.row(&object, &identity, &masks) {
                Ok(row) => rows.push(row),
                Err(err) => {
                    warn!("{}", err);
                    failures.push(err);
                }
            }
        }

        BatchOutcome { rows, failures }
    }
}

/// The outcome of processing one batch of ACE records.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Rows that resolved successfully.
    pub rows: Vec<PermissionReportRow>,

    /// Per-row failures, each naming the object and identity it was for.
    pub failures: Vec<ReportError>,
}

impl BatchOutcome {
    /// Whether every entry in the batch resolved.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
