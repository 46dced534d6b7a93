pub mod database;
pub mod error;
pub mod library;
pub mod seed;
pub mod store;
pub mod users;
pub mod watchlist;

pub use database::MovieDatabase;
pub use error::{CatalogError, Result, StoreError};
pub use library::{Library, Session};
pub use seed::default_catalog;
pub use store::SnapshotFile;
pub use users::UserStore;
pub use watchlist::WatchlistStore;
