use crate::error::{CatalogError, Result};
use crate::store::SnapshotFile;
use moviedb_models::User;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Registered users, persisted as one whole-list snapshot.
///
/// Credentials are stored in clear text (see [`moviedb_models::Password`]).
#[derive(Debug, Clone)]
pub struct UserStore {
    store: SnapshotFile,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: SnapshotFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub fn load_users(&self) -> Result<Vec<User>> {
        self.store.load_or_empty()
    }

    pub fn save_users(&self, users: &[User]) -> Result<()> {
        self.store.save(users)
    }

    /// Validate the credentials, reject a taken username, then rewrite the store
    /// with the new user appended. Registering does not log the user in.
    pub fn register(&self, username: Option<&str>, password: Option<&str>) -> Result<User> {
        let user = User::parse(username, password)?;

        let mut users = self.load_users()?;
        if users.iter().any(|u| u.username() == user.username()) {
            warn!("Registration rejected, username taken: {}", user.username());
            return Err(CatalogError::DuplicateUsername(user.username().to_string()));
        }

        users.push(user.clone());
        self.save_users(&users)?;
        info!("Registered user {}", user.username());
        Ok(user)
    }

    /// The stored user with exactly these credentials, if any.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        let users = self.load_users()?;
        Ok(users.into_iter().find(|u| u.matches(username, password)))
    }

    /// `true` iff some stored user has exactly this username and password.
    ///
    /// Unknown usernames and wrong passwords both yield `false`.
    pub fn check_login(&self, username: &str, password: &str) -> Result<bool> {
        Ok(self.authenticate(username, password)?.is_some())
    }
}
