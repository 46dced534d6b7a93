use crate::error::{CredentialError, CredentialField, ValidationError};
use crate::movie::Movie;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

fn is_alphanumeric_ascii(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// A non-blank, ASCII-alphanumeric user name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::BlankUsername);
        }
        if !is_alphanumeric_ascii(&value) {
            return Err(ValidationError::InvalidUsername);
        }
        Ok(Self(value))
    }

    /// Validate raw form input, where `None` means the field was never supplied.
    pub fn parse(input: Option<&str>) -> Result<Self, CredentialError> {
        let value = input.ok_or(CredentialError::Missing(CredentialField::Username))?;
        Ok(Self::new(value)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-blank, ASCII-alphanumeric password of at least [`MIN_PASSWORD_LEN`] characters.
///
/// Stored and compared in clear text, matching the existing user store format.
/// Anything beyond a local toy deployment must hash these instead.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::BlankPassword);
        }
        let len = value.chars().count();
        if len < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                len,
                min: MIN_PASSWORD_LEN,
            });
        }
        if !is_alphanumeric_ascii(&value) {
            return Err(ValidationError::InvalidPassword);
        }
        Ok(Self(value))
    }

    /// Validate raw form input, where `None` means the field was never supplied.
    pub fn parse(input: Option<&str>) -> Result<Self, CredentialError> {
        let value = input.ok_or(CredentialError::Missing(CredentialField::Password))?;
        Ok(Self::new(value)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

impl TryFrom<String> for Password {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.0
    }
}

/// A registered user and, once loaded, their watchlist.
///
/// The watchlist holds copies of catalog movies matched by value; it is never
/// written into the user store (each user's watchlist has its own file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    username: Username,
    password: Password,
    #[serde(skip)]
    watchlist: Vec<Movie>,
}

impl User {
    pub fn new(username: Username, password: Password) -> Self {
        Self {
            username,
            password,
            watchlist: Vec::new(),
        }
    }

    /// Build a user from raw form input.
    pub fn parse(username: Option<&str>, password: Option<&str>) -> Result<Self, CredentialError> {
        Ok(Self::new(Username::parse(username)?, Password::parse(password)?))
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn set_username(&mut self, username: Option<&str>) -> Result<(), CredentialError> {
        self.username = Username::parse(username)?;
        Ok(())
    }

    pub fn set_password(&mut self, password: Option<&str>) -> Result<(), CredentialError> {
        self.password = Password::parse(password)?;
        Ok(())
    }

    /// Exact match on both username and password.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username.as_str() == username && self.password.as_str() == password
    }

    /// Appends unconditionally; unlike the catalog, a watchlist may hold duplicates.
    pub fn add_to_watchlist(&mut self, movie: Movie) {
        self.watchlist.push(movie);
    }

    /// Removes the first equal entry. Returns `false` when nothing matched.
    pub fn remove_from_watchlist(&mut self, movie: &Movie) -> bool {
        match self.watchlist.iter().position(|m| m == movie) {
            Some(index) => {
                self.watchlist.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn set_watchlist(&mut self, watchlist: Vec<Movie>) {
        self.watchlist = watchlist;
    }

    pub fn watchlist(&self) -> &[Movie] {
        &self.watchlist
    }

    /// One display line per watchlist entry, in order.
    pub fn display_watchlist(&self) -> Vec<String> {
        self.watchlist.iter().map(Movie::to_string).collect()
    }
}

// Clear-text on purpose: this mirrors the stored format.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Username = {}, Password = {}",
            self.username,
            self.password.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> Movie {
        Movie::new(
            "Inception",
            "Christopher Nolan",
            2010,
            148,
            Some("/path/to/photo".to_string()),
        )
        .unwrap()
    }

    fn test_user() -> User {
        User::parse(Some("validUser123"), Some("ValidPassword123")).unwrap()
    }

    #[test]
    fn test_username_validation() {
        assert_eq!(Username::new("validUser123").unwrap().as_str(), "validUser123");
        assert_eq!(
            Username::parse(None),
            Err(CredentialError::Missing(CredentialField::Username))
        );
        assert_eq!(
            Username::parse(Some("")),
            Err(CredentialError::Invalid(ValidationError::BlankUsername))
        );
        assert_eq!(
            Username::parse(Some("   ")),
            Err(CredentialError::Invalid(ValidationError::BlankUsername))
        );
        assert_eq!(
            Username::parse(Some("user@name")),
            Err(CredentialError::Invalid(ValidationError::InvalidUsername))
        );
    }

    #[test]
    fn test_username_rejects_non_ascii_letters() {
        assert_eq!(Username::new("josé"), Err(ValidationError::InvalidUsername));
    }

    #[test]
    fn test_password_validation() {
        assert_eq!(
            Password::new("ValidPassword123").unwrap().as_str(),
            "ValidPassword123"
        );
        assert_eq!(
            Password::parse(None),
            Err(CredentialError::Missing(CredentialField::Password))
        );
        assert_eq!(Password::new(""), Err(ValidationError::BlankPassword));
        assert_eq!(
            Password::new("short"),
            Err(ValidationError::PasswordTooShort { len: 5, min: MIN_PASSWORD_LEN })
        );
        assert_eq!(
            Password::new("invalid#password"),
            Err(ValidationError::InvalidPassword)
        );
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(Password::new("abcd1234").is_ok());
        assert!(matches!(
            Password::new("abcd123"),
            Err(ValidationError::PasswordTooShort { len: 7, .. })
        ));
    }

    #[test]
    fn test_setters_keep_previous_value_on_error() {
        let mut user = test_user();
        assert!(user.set_username(Some("bad name")).is_err());
        assert!(user.set_password(None).is_err());
        assert_eq!(user.username().as_str(), "validUser123");
        assert_eq!(user.password().as_str(), "ValidPassword123");

        user.set_username(Some("validUsername123")).unwrap();
        assert_eq!(user.username().as_str(), "validUsername123");
    }

    #[test]
    fn test_watchlist_operations() {
        let mut user = test_user();
        assert!(user.watchlist().is_empty());

        user.add_to_watchlist(inception());
        user.add_to_watchlist(inception());
        assert_eq!(user.watchlist().len(), 2);

        assert!(user.remove_from_watchlist(&inception()));
        assert_eq!(user.watchlist().len(), 1);
        assert!(user.watchlist().contains(&inception()));

        assert!(user.remove_from_watchlist(&inception()));
        assert!(!user.remove_from_watchlist(&inception()));
        assert!(user.watchlist().is_empty());

        user.set_watchlist(vec![inception(), inception()]);
        assert_eq!(user.watchlist().len(), 2);
    }

    #[test]
    fn test_remove_from_watchlist_removes_first_match_only() {
        let mut user = test_user();
        let short_cut = Movie::new("Inception", "Christopher Nolan", 2010, 90, None).unwrap();
        user.add_to_watchlist(short_cut);
        user.add_to_watchlist(inception());

        user.remove_from_watchlist(&inception());
        assert_eq!(user.watchlist().len(), 1);
        assert_eq!(user.watchlist()[0].running_time(), 148);
    }

    #[test]
    fn test_display_watchlist() {
        let mut user = test_user();
        assert!(user.display_watchlist().is_empty());

        user.add_to_watchlist(inception());
        user.add_to_watchlist(Movie::default());
        assert_eq!(
            user.display_watchlist(),
            vec!["Inception 2010 148".to_string(), "The Godfather 1972 175".to_string()]
        );
    }

    #[test]
    fn test_matches_is_exact() {
        let user = test_user();
        assert!(user.matches("validUser123", "ValidPassword123"));
        assert!(!user.matches("validuser123", "ValidPassword123"));
        assert!(!user.matches("validUser123", "validpassword123"));
    }

    #[test]
    fn test_display_and_debug() {
        let user = test_user();
        assert_eq!(
            user.to_string(),
            "Username = validUser123, Password = ValidPassword123"
        );
        assert!(!format!("{:?}", user).contains("ValidPassword123"));
    }

    #[test]
    fn test_serde_skips_watchlist() {
        let mut user = test_user();
        user.add_to_watchlist(inception());

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("Inception"));

        let back: User = serde_json::from_str(&json).unwrap();
        assert!(back.matches("validUser123", "ValidPassword123"));
        assert!(back.watchlist().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_malformed_credentials() {
        let json = r#"{"username":"user@name","password":"ValidPassword123"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
