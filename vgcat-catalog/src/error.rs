use thiserror::Error;

/// Errors produced by catalog construction and queries.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The operation needs at least one record
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Two records share the same id
    #[error("Duplicate game id: {0}")]
    DuplicateId(u32),

    /// A thread panicked while holding the shared catalog lock
    #[error("Catalog lock poisoned")]
    LockPoisoned,
}
