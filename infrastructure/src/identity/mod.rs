//! File-backed identity.
//!
//! Sign-in itself happens elsewhere; this adapter only remembers which user
//! id the CLI was signed in with.

use genie_application::IdentityProvider;
use genie_domain::UserId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable that overrides the stored identity.
pub const USER_ID_ENV: &str = "GENIE_USER_ID";

/// Errors from the identity file.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Identity file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct IdentityFile {
    user_id: UserId,
}

/// [`IdentityProvider`] reading `identity.json`.
///
/// An override (normally from [`USER_ID_ENV`]) wins over the file.
pub struct FileIdentityProvider {
    path: PathBuf,
    override_user: Option<UserId>,
}

impl FileIdentityProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            override_user: None,
        }
    }

    /// Use the `GENIE_USER_ID` environment variable as an override when set.
    pub fn with_env_override(self) -> Self {
        let user = std::env::var(USER_ID_ENV).ok().and_then(UserId::try_new);
        self.with_override(user)
    }

    pub fn with_override(mut self, user: Option<UserId>) -> Self {
        self.override_user = user;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remember `user` as the signed-in user.
    pub fn sign_in(&self, user: &UserId) -> Result<(), IdentityError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&IdentityFile {
            user_id: user.clone(),
        })?;
        std::fs::write(&self.path, json)?;
        debug!(user = %user, "Signed in");
        Ok(())
    }

    /// Forget the stored user. Returns whether anyone was signed in.
    pub fn sign_out(&self) -> Result<bool, IdentityError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn stored_user(&self) -> Result<Option<UserId>, IdentityError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file: IdentityFile = serde_json::from_str(&content)?;
        Ok(UserId::try_new(file.user_id.as_str()))
    }
}

impl IdentityProvider for FileIdentityProvider {
    fn current_user(&self) -> Option<UserId> {
        if let Some(user) = &self.override_user {
            return Some(user.clone());
        }
        match self.stored_user() {
            Ok(user) => user,
            Err(e) => {
                warn!("Ignoring identity file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}
