//! Query and credential configuration

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CoreError;

/// Environment variable holding the Nautobot API token
pub const TOKEN_ENV: &str = "NAUTOBOT_API_TOKEN";

/// Environment variable holding the Nautobot GraphQL endpoint
pub const URL_ENV: &str = "NAUTOBOT_URL";

/// Environment file read from the working directory at startup
pub const ENV_FILE: &str = ".env";

/// Where query documents live and how their results are labelled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Directory scanned for query documents
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// File name suffix of query documents
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Source of the `__meta_prometheus_job` label
    #[serde(default)]
    pub job_label: JobLabelSource,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            suffix: default_suffix(),
            job_label: JobLabelSource::default(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("graphql_queries")
}

fn default_suffix() -> String {
    ".gql".to_string()
}

/// Source of the job label attached to each target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobLabelSource {
    /// Use the device role name
    #[default]
    Role,
    /// Use the name of the query document the device came from
    Query,
}

impl fmt::Display for JobLabelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobLabelSource::Role => write!(f, "role"),
            JobLabelSource::Query => write!(f, "query"),
        }
    }
}

impl std::str::FromStr for JobLabelSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "role" => Ok(JobLabelSource::Role),
            "query" => Ok(JobLabelSource::Query),
            other => Err(format!("unknown job label source '{other}' (expected role or query)")),
        }
    }
}

/// Nautobot endpoint and API token
#[derive(Clone, PartialEq, Eq)]
pub struct NautobotCredentials {
    /// GraphQL endpoint URL
    pub url: String,
    /// API token
    pub token: String,
}

impl NautobotCredentials {
    /// Read credentials from the environment, falling back to a dotenv file
    ///
    /// Variables already set in the process environment take precedence over
    /// the file. A missing file is not an error.
    ///
    /// # Errors
    /// Returns [`CoreError::EnvFile`] if the file exists but cannot be parsed,
    /// or [`CoreError::MissingEnv`] if a variable is set in neither place.
    pub fn from_env_file(path: &Path) -> Result<Self, CoreError> {
        Self::from_lookup_with_file(|key| std::env::var(key).ok(), path)
    }

    /// Like [`Self::from_env_file`], with `lookup` standing in for the environment
    ///
    /// # Errors
    /// See [`Self::from_env_file`].
    pub fn from_lookup_with_file<F>(lookup: F, path: &Path) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = read_env_file(path)?;
        Self::from_lookup(|key| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .or_else(|| file.get(key).cloned())
        })
    }

    /// Read credentials through an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns [`CoreError::MissingEnv`] if either variable is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(CoreError::MissingEnv(key))
        };

        let token = required(TOKEN_ENV)?;
        let url = required(URL_ENV)?;
        Ok(Self { url, token })
    }
}

// Parse `path` without touching the process environment
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, CoreError> {
    let env_error = |source| CoreError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "no environment file found");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(env_error(e)),
    };

    let vars = iter
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(env_error)?;
    info!(path = %path.display(), vars = vars.len(), "loaded environment file");
    Ok(vars)
}

impl fmt::Debug for NautobotCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NautobotCredentials")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .finish()
    }
}
