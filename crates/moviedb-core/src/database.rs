use crate::error::{CatalogError, Result};
use crate::store::SnapshotFile;
use moviedb_models::{Movie, SortKey};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The movie catalog, bound to a JSON snapshot file.
///
/// Insertion order is display order and no two entries are equal. Every
/// successful `add_movie`/`remove_movie` rewrites the store; the in-memory list
/// is only reachable read-only so it cannot drift from what was persisted.
#[derive(Debug)]
pub struct MovieDatabase {
    movies: Vec<Movie>,
    store: SnapshotFile,
}

impl MovieDatabase {
    /// An empty catalog bound to `path`. Nothing is read until [`load_database`](Self::load_database).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            movies: Vec::new(),
            store: SnapshotFile::new(path),
        }
    }

    /// Bind to `path` and load whatever is stored there.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut database = Self::new(path);
        database.load_database()?;
        Ok(database)
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Whether the backing file exists yet (false on first run).
    pub fn store_exists(&self) -> bool {
        self.store.exists()
    }

    pub fn add_movie(&mut self, movie: Movie) -> Result<()> {
        if self.movies.contains(&movie) {
            warn!("Rejected duplicate movie: {}", movie);
            return Err(CatalogError::DuplicateEntry(movie.to_string()));
        }

        self.movies.push(movie);
        if let Err(e) = self.save_database() {
            self.movies.pop();
            return Err(e);
        }

        if let Some(added) = self.movies.last() {
            info!("Movie added to the database: {}", added.title());
        }
        Ok(())
    }

    /// Remove the first entry equal to `movie` and return it.
    pub fn remove_movie(&mut self, movie: &Movie) -> Result<Movie> {
        let index = self
            .movies
            .iter()
            .position(|m| m == movie)
            .ok_or_else(|| CatalogError::NotFound(movie.to_string()))?;

        let removed = self.movies.remove(index);
        if let Err(e) = self.save_database() {
            self.movies.insert(index, removed);
            return Err(e);
        }

        info!("Movie removed from the database: {}", removed.title());
        Ok(removed)
    }

    /// First movie whose title matches exactly. Titles are not unique, so later
    /// movies with the same title are not reachable through this lookup.
    pub fn get_movie(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title() == title)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn contains(&self, movie: &Movie) -> bool {
        self.movies.contains(movie)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Catalog copy in the requested order.
    pub fn sorted(&self, key: SortKey) -> Vec<Movie> {
        Movie::sorted(&self.movies, key)
    }

    /// One display line per movie, in catalog order.
    pub fn listing(&self) -> Vec<String> {
        self.movies.iter().map(Movie::to_string).collect()
    }

    /// Sum of running times in minutes; 0 for an empty list.
    pub fn total_watch_time(watchlist: &[Movie]) -> i64 {
        watchlist.iter().map(|m| i64::from(m.running_time())).sum()
    }

    /// Add every movie not already present and persist once.
    /// Returns how many were added.
    pub fn seed(&mut self, movies: impl IntoIterator<Item = Movie>) -> Result<usize> {
        let before = self.movies.len();
        for movie in movies {
            if !self.movies.contains(&movie) {
                self.movies.push(movie);
            }
        }

        let added = self.movies.len() - before;
        if added == 0 {
            return Ok(0);
        }

        if let Err(e) = self.save_database() {
            self.movies.truncate(before);
            return Err(e);
        }

        info!("Seeded catalog with {} movies", added);
        Ok(added)
    }

    pub fn save_database(&self) -> Result<()> {
        self.store.save(&self.movies)
    }

    /// Replace the in-memory catalog with the stored snapshot.
    ///
    /// A missing store yields an empty catalog. On failure the previous
    /// in-memory catalog is kept as it was.
    pub fn load_database(&mut self) -> Result<()> {
        self.movies = self.store.load_or_empty()?;
        Ok(())
    }
}
