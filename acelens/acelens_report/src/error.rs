//! Report assembly errors.

use thiserror::Error;

/// Errors raised while assembling report rows.
#[derive(Debug, Error)]
pub enum ReportError {
    /// One (object, identity) row could not be resolved.
    ///
    /// Carries the securable object and identity under evaluation so the
    /// surrounding report can flag the row as unresolved rather than omit
    /// it.
    #[error("Failed to resolve permissions for identity '{identity}' on '{object}': {source}")]
    Row {
        /// Display name of the securable object.
        object: String,

        /// Display name of the identity.
        identity: String,

        /// The underlying engine failure.
        #[source]
        source: acelens_core::Error,
    },
}

impl ReportError {
    /// The object and identity the failed row was for.
    pub fn row_context(&self) -> (&str, &str) {
        match self {
            Self::Row {
                object, identity, ..
            } => (object, identity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acelens_core::{DecomposeError, NamespaceId};

    #[test]
    fn test_row_error_names_object_and_identity() {
        let err = ReportError::Row {
            object: "fabrikam-fiber".to_string(),
            identity: "Contoso Readers".to_string(),
            source: DecomposeError::Incomplete {
                mask: 3,
                remaining: 2,
                namespace_id: NamespaceId::nil(),
            }
            .into(),
        };

        let display = format!("{}", err);
        assert!(display.contains("fabrikam-fiber"));
        assert!(display.contains("Contoso Readers"));
        assert_eq!(err.row_context(), ("fabrikam-fiber", "Contoso Readers"));
    }
}
