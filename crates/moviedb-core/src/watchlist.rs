use crate::error::Result;
use crate::store::SnapshotFile;
use moviedb_models::{Movie, Username};
use std::path::{Path, PathBuf};

/// One watchlist snapshot per user, named `<username>_watchlist.json`.
///
/// Usernames are ASCII-alphanumeric, so the file name needs no escaping.
#[derive(Debug, Clone)]
pub struct WatchlistStore {
    dir: PathBuf,
}

impl WatchlistStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, username: &Username) -> PathBuf {
        self.dir.join(format!("{}_watchlist.json", username))
    }

    /// Absent file means an empty watchlist.
    pub fn load(&self, username: &Username) -> Result<Vec<Movie>> {
        SnapshotFile::new(self.path_for(username)).load_or_empty()
    }

    pub fn save(&self, username: &Username, watchlist: &[Movie]) -> Result<()> {
        SnapshotFile::new(self.path_for(username)).save(watchlist)
    }
}
