use std::env;

/// Environment variable naming the Instagram account used to log in.
pub const USERNAME_VAR: &str = "IG_USERNAME";

/// Environment variable holding the matching password.
pub const PASSWORD_VAR: &str = "IG_PASSWORD";

/// Login details handed to the external scraper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Read both variables from the process environment. Unset variables
    /// resolve to empty strings; the scraper reports its own login errors.
    pub fn from_env() -> Credentials {
        Credentials {
            username: env::var(USERNAME_VAR).unwrap_or_default(),
            password: env::var(PASSWORD_VAR).unwrap_or_default(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}
