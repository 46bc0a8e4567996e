//! Signed-in credential storage

use crate::config::Config;
use crate::error::{CodeShackError, CodeShackResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Credentials kept between CLI invocations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Identity-provider user id
    pub uid: String,
    pub email: String,
    /// Long-lived token used to mint identity tokens
    pub refresh_token: String,
    /// Last identity token issued, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    /// Lifetime of `id_token` in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// When `id_token` was issued
    pub issued_at: DateTime<Utc>,
}

impl StoredCredentials {
    pub fn new(
        uid: impl Into<String>,
        email: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            refresh_token: refresh_token.into(),
            id_token: None,
            expires_in: None,
            issued_at: Utc::now(),
        }
    }

    /// Check if the held identity token is missing or expired
    pub fn is_expired(&self) -> bool {
        match (&self.id_token, self.expires_in) {
            (Some(_), Some(expires_in)) => {
                // Consider expired 60 seconds before actual expiry
                let refresh_at = i64::try_from(expires_in)
                    .ok()
                    .and_then(|secs| secs.checked_sub(60))
                    .and_then(Duration::try_seconds)
                    .and_then(|lifetime| self.issued_at.checked_add_signed(lifetime));
                match refresh_at {
                    Some(refresh_at) => refresh_at < Utc::now(),
                    // Lifetimes that overflow are not trusted
                    None => true,
                }
            }
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

/// File-based storage for [`StoredCredentials`]
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the configured location, or `~/.codeshack/credentials.json`
    pub fn from_config(config: &Config) -> Option<Self> {
        config.identity.credentials_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist credentials, readable only by the current user
    pub fn store(&self, credentials: &StoredCredentials) -> CodeShackResult<()> {
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_private_dir(dir)?;
        }

        let content = serde_json::to_string_pretty(credentials)?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        // Set restrictive permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, perms).map_err(|e| self.io_error(e))?;
        }

        Ok(())
    }

    /// Load stored credentials; `None` when nobody signed in
    pub fn load(&self) -> CodeShackResult<Option<StoredCredentials>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let credentials = serde_json::from_str(&content).map_err(|e| {
            CodeShackError::auth_with_context(
                format!("Corrupt credentials file: {}", e),
                self.path.display().to_string(),
            )
        })?;

        Ok(Some(credentials))
    }

    /// Remove stored credentials
    pub fn clear(&self) -> CodeShackResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| self.io_error(e))?;
        }
        Ok(())
    }

    fn io_error(&self, error: std::io::Error) -> CodeShackError {
        CodeShackError::io_with_path(error.to_string(), self.path.display().to_string())
    }
}

fn create_private_dir(dir: &Path) -> CodeShackResult<()> {
    let to_error =
        |e: std::io::Error| CodeShackError::io_with_path(e.to_string(), dir.display().to_string());

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true).mode(0o700);
        builder.create(dir).map_err(to_error)?;
    }

    #[cfg(not(unix))]
    {
        std::fs::create_dir_all(dir).map_err(to_error)?;
    }

    Ok(())
}
