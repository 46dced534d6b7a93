use crate::paths::PathManager;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Optional overrides for store locations. Relative paths resolve against the data directory.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchlist_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Seed the built-in film list when the catalog store does not exist yet
    #[serde(default = "default_true")]
    pub seed_on_first_run: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_on_first_run: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Fully resolved store locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub catalog_file: PathBuf,
    pub users_file: PathBuf,
    pub watchlist_dir: PathBuf,
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if present, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let overrides = [
            ("catalog_file", &self.storage.catalog_file),
            ("users_file", &self.storage.users_file),
            ("watchlist_dir", &self.storage.watchlist_dir),
        ];
        for (name, value) in overrides {
            if let Some(path) = value {
                if path.as_os_str().is_empty() {
                    return Err(anyhow::anyhow!("storage.{} must not be empty", name));
                }
            }
        }

        let catalog = self.storage.catalog_file.as_ref();
        if catalog.is_some() && catalog == self.storage.users_file.as_ref() {
            return Err(anyhow::anyhow!(
                "storage.catalog_file and storage.users_file must point at different files"
            ));
        }

        Ok(())
    }

    pub fn storage_paths(&self, paths: &PathManager) -> StoragePaths {
        let resolve = |value: &Option<PathBuf>, default: PathBuf| match value {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => paths.data_dir().join(path),
            None => default,
        };

        StoragePaths {
            catalog_file: resolve(&self.storage.catalog_file, paths.catalog_file()),
            users_file: resolve(&self.storage.users_file, paths.users_file()),
            watchlist_dir: resolve(&self.storage.watchlist_dir, paths.watchlist_dir()),
        }
    }
}
