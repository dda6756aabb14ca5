//! Startup configuration: API key, service-account credentials and the
//! document store location.

use crate::error::{MoneyballError, Result};
use dirs::data_dir;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable holding the API-Football key.
pub const API_KEY_ENV_VAR: &str = "X_APISPORTS_KEY";

/// Default service-account file, relative to the working directory.
pub const DEFAULT_CREDENTIALS_PATH: &str = "./service-account.json";

/// Service-account credential artifact.
///
/// Only `project_id` is required; it names the document store so that each
/// project keeps its own collections.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub project_id: String,
    #[serde(default)]
    pub client_email: Option<String>,
}

impl Credentials {
    /// Read and parse the credentials file. A missing file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MoneyballError::MissingCredentials {
                path: path.display().to_string(),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        let creds: Credentials =
            serde_json::from_str(&raw).map_err(|e| MoneyballError::InvalidCredentials {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if let Err(message) = validate_project_id(&creds.project_id) {
            return Err(MoneyballError::InvalidCredentials {
                path: path.display().to_string(),
                message,
            });
        }
        Ok(creds)
    }
}

/// `project_id` becomes a file name, so only `[A-Za-z0-9_-]` is allowed.
fn validate_project_id(project_id: &str) -> std::result::Result<(), String> {
    if project_id.trim().is_empty() {
        return Err("project_id is empty".to_string());
    }
    let valid = project_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(format!("project_id '{project_id}' contains invalid characters"));
    }
    Ok(())
}

/// Where the document store lives and which project it belongs to.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub database_path: PathBuf,
}

impl Settings {
    /// Load `./.env` (if any), then the credentials artifact.
    ///
    /// The API key is read separately with [`api_key_from_env`], since only
    /// imports talk to the provider.
    pub fn load(credentials_path: &Path, database_override: Option<PathBuf>) -> Result<Self> {
        dotenvy::from_path(".env").ok();

        let credentials = Credentials::load(credentials_path)?;
        let database_path = match database_override {
            Some(path) => path,
            None => default_database_path(&credentials.project_id)?,
        };

        Ok(Self {
            credentials,
            database_path,
        })
    }
}

/// Read the API key from `X_APISPORTS_KEY`.
pub fn api_key_from_env() -> Result<String> {
    api_key_from(std::env::var(API_KEY_ENV_VAR).ok())
}

/// Unset or blank halts startup.
pub fn api_key_from(value: Option<String>) -> Result<String> {
    value
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| MoneyballError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })
}

/// `<data dir>/moneyball-etl/<project_id>.db`
pub fn default_database_path(project_id: &str) -> Result<PathBuf> {
    let data_dir = data_dir().ok_or(MoneyballError::NoDataDirectory)?;
    Ok(data_dir
        .join("moneyball-etl")
        .join(format!("{project_id}.db")))
}
