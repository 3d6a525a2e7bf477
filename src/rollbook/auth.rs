//! # Session Gate
//!
//! A single username/password check run once before a session starts. The
//! gate only reports the outcome; deciding to end the process is left to the
//! caller.

use crate::error::{Result, RollbookError};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "1234";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

pub fn authenticate(expected: &Credentials, username: &str, password: &str) -> Result<()> {
    if username == expected.username && password == expected.password {
        Ok(())
    } else {
        warn!(username, "authentication failed");
        Err(RollbookError::AuthFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_pair() {
        assert!(authenticate(&Credentials::default(), "admin", "1234").is_ok());
    }

    #[test]
    fn rejects_wrong_password_or_user() {
        let creds = Credentials::default();
        assert!(matches!(
            authenticate(&creds, "admin", "nope"),
            Err(RollbookError::AuthFailed)
        ));
        assert!(authenticate(&creds, "root", "1234").is_err());
        assert!(authenticate(&creds, "", "").is_err());
    }

    #[test]
    fn custom_credentials() {
        let creds = Credentials {
            username: "registrar".into(),
            password: "s3cret".into(),
        };
        assert!(authenticate(&creds, "registrar", "s3cret").is_ok());
        assert!(authenticate(&creds, "admin", "1234").is_err());
    }
}
