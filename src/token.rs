//! Bearer-token storage.
//!
//! The token is a single opaque string obtained out-of-band and kept under a
//! fixed file in the XDG config directory. An environment variable overrides
//! the file, which keeps headless and CI usage simple. No refresh or expiry
//! handling exists here; an invalid token surfaces as an ordinary API error.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the stored token.
pub const TOKEN_ENV_VAR: &str = "TASKDECK_API_TOKEN";

/// File name of the token inside the app's config directory.
pub const TOKEN_FILE_NAME: &str = "auth_token";

/// Reads and writes the bearer token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store backed by a specific file, mainly for tests.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard location: `<config_dir>/taskdeck/auth_token`.
    pub fn default_location() -> Result<Self> {
        let dir = dirs::config_dir().context("could not determine config directory")?;
        Ok(Self::new(dir.join("taskdeck").join(TOKEN_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the token. The environment variable wins over the file; a missing
    /// or empty token is `None`, not an error.
    pub fn load(&self) -> Result<Option<String>> {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            let token = token.trim().to_string();
            if !token.is_empty() {
                return Ok(Some(token));
            }
        }

        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read token file: {}", self.path.display()))?;
        let token = raw.trim().to_string();
        Ok(if token.is_empty() { None } else { Some(token) })
    }

    /// Persist the token, creating the parent directory if needed.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(&self.path, token.trim())
            .with_context(|| format!("failed to write token file: {}", self.path.display()))?;
        Ok(())
    }
}
