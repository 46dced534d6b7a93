use crate::database::MovieDatabase;
use crate::error::Result;
use crate::seed::default_catalog;
use crate::users::UserStore;
use crate::watchlist::WatchlistStore;
use moviedb_config::StoragePaths;
use moviedb_models::{Movie, User};
use tracing::{debug, info};

/// The data layer handed to the presentation layer at start-up.
///
/// Owns the catalog plus the user and watchlist stores. Nothing here is global;
/// callers hold a `Library` for as long as they need it.
#[derive(Debug)]
pub struct Library {
    catalog: MovieDatabase,
    users: UserStore,
    watchlists: WatchlistStore,
}

impl Library {
    /// Bind to the given stores and load the catalog.
    pub fn open(paths: &StoragePaths) -> Result<Self> {
        Ok(Self {
            catalog: MovieDatabase::open(&paths.catalog_file)?,
            users: UserStore::new(&paths.users_file),
            watchlists: WatchlistStore::new(&paths.watchlist_dir),
        })
    }

    pub fn catalog(&self) -> &MovieDatabase {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut MovieDatabase {
        &mut self.catalog
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// Seed the starter films if the catalog has never been written.
    /// Returns how many movies were added.
    pub fn seed_if_first_run(&mut self) -> Result<usize> {
        if self.catalog.store_exists() {
            debug!("Catalog store present, skipping seed");
            return Ok(0);
        }
        self.seed_default_catalog()
    }

    pub fn seed_default_catalog(&mut self) -> Result<usize> {
        self.catalog.seed(default_catalog()?)
    }

    /// Registration leaves the caller unauthenticated; call [`login`](Self::login) afterwards.
    pub fn register(&self, username: Option<&str>, password: Option<&str>) -> Result<User> {
        self.users.register(username, password)
    }

    pub fn check_login(&self, username: &str, password: &str) -> Result<bool> {
        self.users.check_login(username, password)
    }

    /// Authenticate and load the user's watchlist.
    ///
    /// `Ok(None)` for an unknown user or a wrong password alike.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<Session>> {
        Session::open(&self.users, &self.watchlists, username, password)
    }
}

/// An authenticated user with their watchlist loaded.
///
/// Every watchlist change is written back to the user's watchlist file before
/// the call returns. Dropping the session is the logout.
#[derive(Debug)]
pub struct Session {
    user: User,
    watchlists: WatchlistStore,
}

impl Session {
    /// Log in against the user store alone; the catalog is never read.
    pub fn open(
        users: &UserStore,
        watchlists: &WatchlistStore,
        username: &str,
        password: &str,
    ) -> Result<Option<Self>> {
        let Some(mut user) = users.authenticate(username, password)? else {
            info!("Login failed");
            return Ok(None);
        };

        user.set_watchlist(watchlists.load(user.username())?);
        info!(
            "Logged in {} ({} watchlist entries)",
            user.username(),
            user.watchlist().len()
        );
        Ok(Some(Self {
            user,
            watchlists: watchlists.clone(),
        }))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn watchlist(&self) -> &[Movie] {
        self.user.watchlist()
    }

    pub fn display_watchlist(&self) -> Vec<String> {
        self.user.display_watchlist()
    }

    pub fn total_watch_time(&self) -> i64 {
        MovieDatabase::total_watch_time(self.user.watchlist())
    }

    /// Appends without a duplicate check. Removing a movie from the catalog
    /// later does not touch watchlists.
    pub fn add_to_watchlist(&mut self, movie: Movie) -> Result<()> {
        self.user.add_to_watchlist(movie);
        if let Err(e) = self.persist() {
            let mut watchlist = self.user.watchlist().to_vec();
            watchlist.pop();
            self.user.set_watchlist(watchlist);
            return Err(e);
        }
        Ok(())
    }

    /// Removes the first equal entry. `Ok(false)` (and no write) when nothing matched.
    pub fn remove_from_watchlist(&mut self, movie: &Movie) -> Result<bool> {
        let previous = self.user.watchlist().to_vec();
        if !self.user.remove_from_watchlist(movie) {
            return Ok(false);
        }
        if let Err(e) = self.persist() {
            self.user.set_watchlist(previous);
            return Err(e);
        }
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        self.watchlists
            .save(self.user.username(), self.user.watchlist())
    }
}
