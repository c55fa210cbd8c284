//! Error types for Widget Atlas.
//!
//! The error surface is deliberately narrow. Unknown identities at runtime
//! (a favorite toggle or detail lookup for a name that is not in the
//! catalog) are forgiving no-ops or not-found placeholders, never errors;
//! refusing to pop the navigation floor is reported as a `bool`. The only
//! failures worth a typed error are seed-data defects caught at store
//! construction.

use thiserror::Error;

/// Errors raised while constructing a [`crate::CatalogStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AtlasError {
    /// Two widget entries in the seed data share a name. Names are the
    /// catalog identity, so the store refuses to build.
    #[error("duplicate widget entry '{name}' in catalog seed")]
    DuplicateEntry {
        /// The colliding widget name.
        name: String,
    },

    /// Two gallery examples in the seed data share a name.
    #[error("duplicate example entry '{name}' in gallery seed")]
    DuplicateExample {
        /// The colliding example name.
        name: String,
    },
}

/// A specialized Result type for Widget Atlas operations.
pub type Result<T> = std::result::Result<T, AtlasError>;
