use crate::errors::{Error, Result};

use std::fmt;

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const OWNER_VAR: &str = "GITHUB_REPOSITORY_OWNER";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

/// `repository` is substituted into request paths as given. In GitHub
/// Actions `GITHUB_REPOSITORY` holds `owner/repo`, which would repeat the
/// owner segment.
// TODO: confirm against the API whether `GITHUB_REPOSITORY` should be split on '/'.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub token: String,
    pub owner: String,
    pub repository: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Checked in order token, owner, repository.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str, err: Error| lookup(key).filter(|v| !v.is_empty()).ok_or(err);

        Ok(Self {
            token: required(TOKEN_VAR, Error::MissingToken)?,
            owner: required(OWNER_VAR, Error::MissingOwner)?,
            repository: required(REPOSITORY_VAR, Error::MissingRepository)?,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repository", &self.repository)
            .finish()
    }
}
