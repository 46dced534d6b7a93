pub mod config;
pub mod paths;

pub use config::{CatalogConfig, Config, StorageConfig, StoragePaths};
pub use paths::{env_base_path, PathManager, BASE_PATH_ENV};
