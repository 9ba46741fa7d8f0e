//! Error types for the acelens reporting system.
//!
//! This module defines the error hierarchy used throughout the system. The
//! errors are organized by subsystem, with each subsystem having its own
//! error type.
//!
//! The root error type, `Error`, can wrap any of the subsystem-specific
//! errors, allowing for uniform error handling at the top level. Note that
//! an empty catalog is *not* an error anywhere in this hierarchy; it simply
//! resolves to an empty report.

use crate::id::NamespaceId;
use thiserror::Error;

/// Root error type for the acelens system.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog validation errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Bitmask decomposition errors
    #[error("Decomposition error: {0}")]
    Decompose(#[from] DecomposeError),

    /// Permission resolution errors
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Errors raised while validating an action catalog.
///
/// Catalog integrity is owned by the external fetch layer; these errors
/// exist so that a malformed catalog fails predictably at index
/// construction instead of corrupting every report built from it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two actions in the same catalog claim the same bit position
    #[error("Duplicate action bit {bit:#x} in namespace {namespace_id}")]
    DuplicateBit {
        /// The bit value claimed by more than one action
        bit: u64,

        /// The namespace the catalog belongs to
        namespace_id: NamespaceId,
    },

    /// An action's bit is zero or has more than one bit set
    #[error("Action '{name}' has invalid bit value {bit:#x}: must be a nonzero power of two")]
    InvalidBit {
        /// The offending bit value
        bit: u64,

        /// The name of the action carrying it
        name: String,
    },
}

/// Errors raised while decomposing a raw bitmask against a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    /// The mask contains set bits that no catalog action accounts for
    #[error(
        "Bitmask {mask:#x} leaves unresolved bits {remaining:#x} against namespace {namespace_id}"
    )]
    Incomplete {
        /// The raw mask that was being decomposed
        mask: u64,

        /// The bits left over after consuming every matching catalog action
        remaining: u64,

        /// The namespace of the catalog the mask was decomposed against
        namespace_id: NamespaceId,
    },
}

/// Errors raised while resolving decomposed actions into decisions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A decomposed list references a bit the catalog does not define.
    ///
    /// Structurally impossible when both the lists and the catalog come
    /// from the same namespace fetch; indicates a caller-side mismatch.
    #[error("Decomposed action bit {bit:#x} is not defined in namespace {namespace_id}")]
    UnknownBit {
        /// The bit that has no catalog entry
        bit: u64,

        /// The namespace of the catalog resolution ran against
        namespace_id: NamespaceId,
    },
}

/// Result type used throughout the acelens system.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let cat_err = CatalogError::DuplicateBit {
            bit: 4,
            namespace_id: NamespaceId::nil(),
        };
        let error: Error = cat_err.into();
        assert!(matches!(error, Error::Catalog(_)));

        let dec_err = DecomposeError::Incomplete {
            mask: 3,
            remaining: 2,
            namespace_id: NamespaceId::nil(),
        };
        let error: Error = dec_err.into();
        assert!(matches!(error, Error::Decompose(_)));

        let res_err = ResolveError::UnknownBit {
            bit: 8,
            namespace_id: NamespaceId::nil(),
        };
        let error: Error = res_err.into();
        assert!(matches!(error, Error::Resolve(_)));
    }

    #[test]
    fn test_error_display() {
        let namespace_id = NamespaceId::nil();
        let err = DecomposeError::Incomplete {
            mask: 3,
            remaining: 2,
            namespace_id,
        };
        let display = format!("{}", err);
        assert!(display.contains("0x3"));
        assert!(display.contains("0x2"));
        assert!(display.contains(&namespace_id.to_string()));
    }

    #[test]
    fn test_invalid_bit_display() {
        let err = CatalogError::InvalidBit {
            bit: 6,
            name: "GenericContribute".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("GenericContribute"));
        assert!(display.contains("0x6"));
    }
}
