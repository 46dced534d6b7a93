use crate::error::{CatalogError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A JSON file holding one whole ordered sequence.
///
/// Every save rewrites the full snapshot; there is no append log. A missing file
/// is the first-run state and loads as `None`, never as an error.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load<T>(&self) -> Result<Option<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store miss: {} (file does not exist)", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(CatalogError::persistence("read", &self.path, e)),
        };
        let items = serde_json::from_str::<Vec<T>>(&content)
            .map_err(|e| CatalogError::persistence("parse", &self.path, e))?;

        info!("Loaded {} ({} items)", self.path.display(), items.len());
        Ok(Some(items))
    }

    /// Like [`SnapshotFile::load`], with an absent file read as an empty sequence.
    pub fn load_or_empty<T>(&self) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Write to a sibling temp file, then rename over the snapshot.
    pub fn save<T>(&self, items: &[T]) -> Result<()>
    where
        T: Serialize,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| CatalogError::persistence("create directory for", &self.path, e))?;
            }
        }

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| CatalogError::persistence("serialize", &self.path, e))?;

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, json)
            .map_err(|e| CatalogError::persistence("write", &self.path, e))?;
        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            if let Err(cleanup) = std::fs::remove_file(&temp_path) {
                warn!("Could not remove {}: {}", temp_path.display(), cleanup);
            }
            return Err(CatalogError::persistence("replace", &self.path, e));
        }

        debug!("Saved {} ({} items)", self.path.display(), items.len());
        Ok(())
    }
}
