//! Configuration for signal computations
//!
//! The constants a computation depends on (which registry to search, which
//! plugin counts as signing) are configuration, not code. `SignalsConfig`
//! loads them from environment variables and falls back to built-in defaults.
//!
//! # Environment Variables
//!
//! - `OSS_SIGNALS_REGISTRY_OWNER`: owner of the fuzzing registry project - default: "google"
//! - `OSS_SIGNALS_REGISTRY_NAME`: name of the fuzzing registry project - default: "oss-fuzz"
//! - `OSS_SIGNALS_SENTINEL_FILE`: file name searched in the registry - default: "Dockerfile"
//! - `OSS_SIGNALS_DESCRIPTOR_PATH`: build descriptor path in a project - default: "pom.xml"
//! - `OSS_SIGNALS_SIGNING_PLUGIN`: `group:artifact` of the signing plugin -
//!   default: "org.apache.maven.plugins:maven-gpg-plugin"
//! - `OSS_SIGNALS_DEPENDENCY_CHECK_PLUGIN`: `group:artifact` of the dependency
//!   scanner plugin - default: "org.owasp:dependency-check-maven"
//! - `OSS_SIGNALS_LOG_LEVEL`: logging level - default: "info"

use crate::maven::Coordinates;
use crate::project::ProjectIdentity;
use std::env;
use thiserror::Error;
use tracing::warn;

const DEFAULT_REGISTRY_OWNER: &str = "google";
const DEFAULT_REGISTRY_NAME: &str = "oss-fuzz";
const DEFAULT_SENTINEL_FILE: &str = "Dockerfile";
const DEFAULT_DESCRIPTOR_PATH: &str = "pom.xml";
const DEFAULT_SIGNING_PLUGIN: (&str, &str) = ("org.apache.maven.plugins", "maven-gpg-plugin");
const DEFAULT_DEPENDENCY_CHECK_PLUGIN: (&str, &str) = ("org.owasp", "dependency-check-maven");
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Invalid plugin coordinates '{0}', expected groupId:artifactId")]
    InvalidCoordinates(String),
}

#[derive(Debug, Clone)]
pub struct SignalsConfig {
    /// Project whose mirror is searched for fuzzing harness definitions
    pub registry_project: ProjectIdentity,

    /// Exact base name of files in the registry that may reference a project
    pub sentinel_file: String,

    /// Build descriptor location, relative to a project's root
    pub descriptor_path: String,

    pub signing_plugin: Coordinates,

    pub dependency_check_plugin: Coordinates,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for SignalsConfig {
    /// Loads from `OSS_SIGNALS_*` variables, falling back to built-in values
    fn default() -> Self {
        let builtin = Self::builtin();

        let registry_owner = env::var("OSS_SIGNALS_REGISTRY_OWNER")
            .unwrap_or_else(|_| DEFAULT_REGISTRY_OWNER.to_string());
        let registry_name = env::var("OSS_SIGNALS_REGISTRY_NAME")
            .unwrap_or_else(|_| DEFAULT_REGISTRY_NAME.to_string());

        let sentinel_file =
            env::var("OSS_SIGNALS_SENTINEL_FILE").unwrap_or(builtin.sentinel_file);
        let descriptor_path =
            env::var("OSS_SIGNALS_DESCRIPTOR_PATH").unwrap_or(builtin.descriptor_path);

        let signing_plugin =
            coordinates_from_env("OSS_SIGNALS_SIGNING_PLUGIN").unwrap_or(builtin.signing_plugin);
        let dependency_check_plugin = coordinates_from_env("OSS_SIGNALS_DEPENDENCY_CHECK_PLUGIN")
            .unwrap_or(builtin.dependency_check_plugin);

        let log_level = env::var("OSS_SIGNALS_LOG_LEVEL")
            .unwrap_or(builtin.log_level)
            .to_lowercase();

        Self {
            registry_project: ProjectIdentity::github(registry_owner, registry_name),
            sentinel_file,
            descriptor_path,
            signing_plugin,
            dependency_check_plugin,
            log_level,
        }
    }
}

impl SignalsConfig {
    /// Built-in values only; the environment is not consulted
    pub fn builtin() -> Self {
        Self {
            registry_project: ProjectIdentity::github(DEFAULT_REGISTRY_OWNER, DEFAULT_REGISTRY_NAME),
            sentinel_file: DEFAULT_SENTINEL_FILE.to_string(),
            descriptor_path: DEFAULT_DESCRIPTOR_PATH.to_string(),
            signing_plugin: Coordinates::new(DEFAULT_SIGNING_PLUGIN.0, DEFAULT_SIGNING_PLUGIN.1),
            dependency_check_plugin: Coordinates::new(
                DEFAULT_DEPENDENCY_CHECK_PLUGIN.0,
                DEFAULT_DEPENDENCY_CHECK_PLUGIN.1,
            ),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry_project.owner().is_empty() || self.registry_project.name().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Registry project owner and name must not be empty".to_string(),
            ));
        }

        if self.sentinel_file.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Sentinel file name must not be empty".to_string(),
            ));
        }
        if self.sentinel_file.contains('/') || self.sentinel_file.contains('\\') {
            return Err(ConfigError::ValidationFailed(format!(
                "Sentinel file must be a bare file name, got '{}'",
                self.sentinel_file
            )));
        }

        if self.descriptor_path.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Descriptor path must not be empty".to_string(),
            ));
        }
        if self.descriptor_path.starts_with('/') {
            return Err(ConfigError::ValidationFailed(format!(
                "Descriptor path must be relative to the project root, got '{}'",
                self.descriptor_path
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }
}

/// Parses `groupId:artifactId`
pub fn parse_coordinates(value: &str) -> Result<Coordinates, ConfigError> {
    let invalid = || ConfigError::InvalidCoordinates(value.to_string());

    let (group_id, artifact_id) = value.split_once(':').ok_or_else(invalid)?;
    let (group_id, artifact_id) = (group_id.trim(), artifact_id.trim());

    if group_id.is_empty() || artifact_id.is_empty() || artifact_id.contains(':') {
        return Err(invalid());
    }

    Ok(Coordinates::new(group_id, artifact_id))
}

fn coordinates_from_env(key: &str) -> Option<Coordinates> {
    let value = env::var(key).ok()?;
    match parse_coordinates(&value) {
        Ok(coordinates) => Some(coordinates),
        Err(e) => {
            warn!(key, error = %e, "Ignoring invalid plugin coordinates");
            None
        }
    }
}
