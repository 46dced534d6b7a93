pub mod catalog;
pub mod config;
pub mod prompts;
pub mod user;
pub mod watchlist;

use color_eyre::eyre::{eyre, Context as _};
use color_eyre::Result;
use moviedb_config::{Config, PathManager, StoragePaths};
use moviedb_core::{Library, UserStore, WatchlistStore};
use std::path::PathBuf;

/// Paths and settings shared by every command.
pub struct Context {
    pub paths: PathManager,
    pub config: Config,
}

impl Context {
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let mut paths = PathManager::default();
        if let Some(dir) = data_dir {
            paths = paths.with_data_dir(dir);
        }

        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

        Ok(Self { paths, config })
    }

    pub fn storage_paths(&self) -> StoragePaths {
        self.config.storage_paths(&self.paths)
    }

    /// The account stores on their own, without touching the catalog.
    pub fn account_stores(&self) -> (UserStore, WatchlistStore) {
        let storage = self.storage_paths();
        (
            UserStore::new(storage.users_file),
            WatchlistStore::new(storage.watchlist_dir),
        )
    }

    /// Open the data layer, seeding the starter films on first run when configured.
    pub fn open_library(&self) -> Result<Library> {
        let storage = self.storage_paths();
        let mut library = Library::open(&storage).wrap_err_with(|| {
            format!("Failed to open catalog at {}", storage.catalog_file.display())
        })?;

        if self.config.catalog.seed_on_first_run {
            let seeded = library.seed_if_first_run()?;
            if seeded > 0 {
                tracing::info!("First run: seeded {} movies", seeded);
            }
        }

        Ok(library)
    }
}
