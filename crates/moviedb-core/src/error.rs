use moviedb_models::{CredentialError, CredentialField, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Low-level failure reading or writing a store file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} is required")]
    MissingCredential(CredentialField),

    #[error("Movie already exists in the database: {0}")]
    DuplicateEntry(String),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Movie not found in the database: {0}")]
    NotFound(String),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

impl CatalogError {
    pub(crate) fn persistence(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: impl Into<StoreError>,
    ) -> Self {
        CatalogError::Persistence {
            action,
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, CatalogError::Persistence { .. })
    }
}

impl From<CredentialError> for CatalogError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Missing(field) => CatalogError::MissingCredential(field),
            CredentialError::Invalid(err) => CatalogError::Validation(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
