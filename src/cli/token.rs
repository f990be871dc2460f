//! Bearer tokens saved by `vidup login`, one file per host under
//! `~/.config/vidup/tokens`.

use crate::cli::Host;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::{
    env, fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

pub const TOKEN_ENV: &str = "VIDUP_TOKEN";

#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    #[must_use]
    pub fn new(config_path: &Path) -> Self {
        Self {
            dir: config_path.join("tokens"),
        }
    }

    // host names come from the config keys, keep them file name safe
    fn path(&self, host: &str) -> PathBuf {
        let name: String = host
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(name)
    }

    /// # Errors
    /// Will return an error if the token file exists but can not be read
    pub fn load(&self, host: &str) -> Result<Option<SecretString>> {
        let path = self.path(host);

        match fs::read_to_string(&path) {
            Ok(token) => {
                let token = token.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SecretString::new(token.into())))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("unable to read: {}", path.display())),
        }
    }

    /// # Errors
    /// Will return an error if the token can not be written
    pub fn save(&self, host: &str, token: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("unable to create: {}", self.dir.display()))?;

        let path = self.path(host);

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&path)
            .with_context(|| format!("unable to write: {}", path.display()))?;
        file.write_all(token.as_bytes())?;

        Ok(path)
    }

    /// Returns `true` if a token was removed.
    ///
    /// # Errors
    /// Will return an error if the token file exists but can not be removed
    pub fn remove(&self, host: &str) -> Result<bool> {
        let path = self.path(host);

        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("unable to remove: {}", path.display())),
        }
    }
}

/// `$VIDUP_TOKEN`, then the token saved for the host, then the one in the config.
///
/// # Errors
/// Will return an error if the saved token can not be read
pub fn resolve(store: &TokenStore, name: &str, host: &Host) -> Result<Option<SecretString>> {
    if let Ok(token) = env::var(TOKEN_ENV) {
        if !token.is_empty() {
            log::info!("using token from ${TOKEN_ENV}");
            return Ok(Some(SecretString::new(token.into())));
        }
    }

    if let Some(token) = store.load(name)? {
        log::info!("using saved token for host: {name}");
        return Ok(Some(token));
    }

    Ok(host
        .token
        .as_ref()
        .filter(|t| !t.expose_secret().is_empty())
        .cloned())
}
