//! Error types shared by signal computations

use crate::maven::DescriptorError;
use crate::project::ProjectIdentity;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while computing a signal.
///
/// None of these are cached: a provider that fails for a project computes
/// again on the next request.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("No local mirror for {project} at {path}")]
    MirrorNotFound {
        project: ProjectIdentity,
        path: PathBuf,
    },

    #[error("Failed to access {path}: {source:#}")]
    Repository {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to read build descriptor {path}: {source}")]
    Descriptor {
        path: PathBuf,
        #[source]
        source: DescriptorError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_mirror_not_found_message() {
        let err = SignalError::MirrorNotFound {
            project: ProjectIdentity::github("google", "oss-fuzz"),
            path: PathBuf::from("/mirrors/google/oss-fuzz"),
        };
        assert_eq!(
            err.to_string(),
            "No local mirror for google/oss-fuzz at /mirrors/google/oss-fuzz"
        );
    }

    #[test]
    fn test_repository_error_keeps_context() {
        let err = SignalError::Repository {
            path: PathBuf::from("/repo/pom.xml"),
            source: anyhow!("disk on fire").context("Failed to read file"),
        };
        let message = err.to_string();
        assert!(message.contains("/repo/pom.xml"));
        assert!(message.contains("disk on fire"));
    }
}
