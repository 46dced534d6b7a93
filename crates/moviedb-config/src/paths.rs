use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable that relocates every moviedb directory under one base path.
pub const BASE_PATH_ENV: &str = "MOVIEDB_BASE_PATH";

/// Base path from `MOVIEDB_BASE_PATH`, if set.
pub fn env_base_path() -> Option<PathBuf> {
    std::env::var_os(BASE_PATH_ENV).map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("moviedb");

        Ok(Self::from_base(base_dir))
    }

    /// Config files at the base level, data and logs in subdirectories.
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    /// Keep config and logs where they are but read and write the stores elsewhere.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("movies.json")
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    pub fn watchlist_dir(&self) -> PathBuf {
        self.data_dir.join("watchlists")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("moviedb.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        std::fs::create_dir_all(self.watchlist_dir())?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = env_base_path() {
            return Self::from_base(base);
        }

        // Platform-specific paths (e.g., ~/.config/moviedb on Linux), falling back
        // to the working directory when the platform has no config dir.
        Self::new().unwrap_or_else(|_| Self::from_base(".moviedb"))
    }
}
