use super::{Signal, SignalComputation, SignalValue};
use crate::config::SignalsConfig;
use crate::error::SignalError;
use crate::project::ProjectIdentity;
use crate::repository::RepositoryAccess;
use std::sync::Arc;
use tracing::{debug, info};

/// Checks whether a fuzzing registry (OSS-Fuzz by default) builds a project.
///
/// The registry's mirror is searched for sentinel files (`Dockerfile` by
/// default). A project counts as fuzzed when any of them mentions its URL.
/// This is a plain substring match: a URL in a comment counts, and a URL
/// spelled differently (no scheme, trailing `.git`) does not.
pub struct FuzzingRegistryMembership {
    access: Arc<dyn RepositoryAccess>,
    registry: ProjectIdentity,
    sentinel_file: String,
}

impl FuzzingRegistryMembership {
    pub fn new(access: Arc<dyn RepositoryAccess>, config: &SignalsConfig) -> Self {
        Self::with_registry(
            access,
            config.registry_project.clone(),
            config.sentinel_file.clone(),
        )
    }

    pub fn with_registry(
        access: Arc<dyn RepositoryAccess>,
        registry: ProjectIdentity,
        sentinel_file: impl Into<String>,
    ) -> Self {
        Self {
            access,
            registry,
            sentinel_file: sentinel_file.into(),
        }
    }
}

impl SignalComputation for FuzzingRegistryMembership {
    fn signal(&self) -> Signal {
        Signal::FuzzedInRegistry
    }

    fn compute(&self, project: &ProjectIdentity) -> Result<SignalValue, SignalError> {
        info!(project = %project, registry = %self.registry, "Checking if the project is fuzzed");

        let registry = self.access.local_mirror_of(&self.registry)?;
        let candidates = registry.files_named(&self.sentinel_file)?;
        debug!(
            candidates = candidates.len(),
            sentinel = %self.sentinel_file,
            "Collected registry files"
        );

        for path in &candidates {
            if registry.read_path(path)?.contains(project.url()) {
                debug!(path = %path.display(), "Registry file references the project");
                return Ok(self.signal().value(true));
            }
        }

        Ok(self.signal().value(false))
    }
}
