pub mod error;
pub mod movie;
pub mod user;

pub use error::{CredentialError, CredentialField, ValidationError};
pub use movie::{Movie, SortKey, MAX_YEAR, MIN_YEAR};
pub use user::{Password, User, Username, MIN_PASSWORD_LEN};
