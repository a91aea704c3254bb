/// Errors raised while building a catalog index.
///
/// The whole catalog is rejected; callers fall back to auditing without one.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The parent is missing, or its parent chain never reaches a top-level entry.
    #[error("catalog entry '{entry}' names parent '{parent}', which does not resolve")]
    CatalogIntegrity { entry: String, parent: String },
}

impl CatalogError {
    pub fn integrity(entry: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::CatalogIntegrity {
            entry: entry.into(),
            parent: parent.into(),
        }
    }
}
