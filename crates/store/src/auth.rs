//! Static credential check. Not a security boundary.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// A single username/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns `true` if both fields match exactly.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Checks an HTTP `Authorization: Basic <base64(user:pass)>` header value.
    ///
    /// Anything that is not a well-formed Basic header fails.
    #[must_use]
    pub fn verify_basic(&self, header: &str) -> bool {
        let Some(encoded) = header.trim().strip_prefix("Basic ") else {
            return false;
        };
        let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
            return false;
        };
        let Ok(decoded) = String::from_utf8(decoded) else {
            return false;
        };
        match decoded.split_once(':') {
            Some((user, pass)) => self.verify(user, pass),
            None => false,
        }
    }

    /// Encodes these credentials as a Basic header value.
    #[must_use]
    pub fn to_basic(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", self.username, self.password))
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
