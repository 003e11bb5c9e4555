use serde::Deserialize;
use std::{
    env, fmt, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_SECRETS_PATH: &str = "config/secrets.toml";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("secrets file not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: io::Error },

    #[error("failed to parse {path:?}: {error}")]
    Parse { path: PathBuf, error: toml::de::Error },

    #[error("no [general] api_key in {path:?}")]
    MissingApiKey { path: PathBuf },
}

/// Credential for the generative language api.  Guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns None for empty or whitespace-only keys.
    pub fn new(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the key out of logs.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

#[derive(Debug, Clone)]
pub struct Secrets {
    pub api_key: ApiKey,
}

#[derive(Deserialize, Debug, Default)]
struct SecretsFile {
    #[serde(default)]
    general: GeneralSection,
}

#[derive(Deserialize, Debug, Default)]
struct GeneralSection {
    api_key: Option<String>,
}

/// Loads the secrets file.  Any error here should stop startup.
pub fn load_secrets(path: &Path) -> Result<Secrets, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                error,
            }
        }
    })?;

    parse_secrets(&contents, path)
}

fn parse_secrets(contents: &str, path: &Path) -> Result<Secrets, ConfigError> {
    let file: SecretsFile = toml::from_str(contents).map_err(|error| ConfigError::Parse {
        path: path.to_path_buf(),
        error,
    })?;

    let api_key = file
        .general
        .api_key
        .as_deref()
        .and_then(ApiKey::new)
        .ok_or_else(|| ConfigError::MissingApiKey {
            path: path.to_path_buf(),
        })?;

    Ok(Secrets { api_key })
}

/// Process level settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub secrets_path: PathBuf,
    pub bind_address: String,
    pub allowed_origins: Vec<String>,
}

impl ServerSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let secrets_path = non_empty("SPECIES_STATUS_SECRETS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRETS_PATH));

        let bind_address =
            non_empty("SPECIES_STATUS_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let allowed_origins = non_empty("SPECIES_STATUS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            secrets_path,
            bind_address,
            allowed_origins,
        }
    }
}
