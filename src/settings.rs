//! Secret store and runtime settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `secrets.toml` in the platform config directory
//! 3. `./secrets.toml`
//! 4. an explicit `--secrets` file (must exist)
//! 5. `KIWI_*` environment variables, `__` separating sections
//!    (e.g. `KIWI_AUTH__PASSWORD`)
//!
//! ```toml
//! [auth]
//! password = "..."
//!
//! [session]
//! ttl_secs = 3600
//!
//! [display]
//! currency_symbol = "R"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::gate::Credential;

pub const SECRETS_FILE: &str = "secrets.toml";
pub const ENV_PREFIX: &str = "KIWI";
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("auth.password is not configured (set it in secrets.toml or KIWI_AUTH__PASSWORD)")]
    MissingConfiguration,

    #[error("failed to load settings: {0}")]
    Source(#[from] config::ConfigError),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub credential: Credential,
    pub session_ttl: Duration,
    pub currency_symbol: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawAuth {
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSession {
    ttl_secs: u64,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency_symbol: String,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default)]
    auth: RawAuth,
    session: RawSession,
    display: RawDisplay,
}

/// Collects settings sources and resolves them into [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsLoader {
    files: Vec<(PathBuf, bool)>,
    env_prefix: Option<String>,
}

impl SettingsLoader {
    /// A loader with no sources beyond the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard search path, plus `explicit` if given.
    pub fn standard(explicit: Option<&Path>) -> Self {
        let mut loader = Self::new();
        if let Some(dirs) = directories::ProjectDirs::from("", "", "kiwi-estimator") {
            loader = loader.file(dirs.config_dir().join(SECRETS_FILE), false);
        }
        loader = loader.file(PathBuf::from(SECRETS_FILE), false);
        if let Some(path) = explicit {
            loader = loader.file(path.to_path_buf(), true);
        }
        loader.env_prefix(ENV_PREFIX)
    }

    pub fn file(mut self, path: impl Into<PathBuf>, required: bool) -> Self {
        self.files.push((path.into(), required));
        self
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn load(&self) -> Result<Settings, SettingsError> {
        let mut builder = config::Config::builder()
            .set_default("session.ttl_secs", DEFAULT_SESSION_TTL_SECS as i64)?
            .set_default("display.currency_symbol", DEFAULT_CURRENCY_SYMBOL)?;

        for (path, required) in &self.files {
            tracing::debug!(
                "Settings source: {} (required: {})",
                path.display(),
                required
            );
            builder =
                builder.add_source(config::File::from(path.as_path()).required(*required));
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        let raw: RawSettings = builder.build()?.try_deserialize()?;

        let credential = raw
            .auth
            .password
            .and_then(Credential::new)
            .ok_or(SettingsError::MissingConfiguration)?;

        Ok(Settings {
            credential,
            session_ttl: Duration::from_secs(raw.session.ttl_secs),
            currency_symbol: raw.display.currency_symbol,
        })
    }
}

impl Settings {
    /// Load from the standard sources. A missing password is fatal.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        SettingsLoader::standard(explicit).load()
    }
}
