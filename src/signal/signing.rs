use super::descriptor::load_descriptor;
use super::{Signal, SignalComputation, SignalValue};
use crate::config::SignalsConfig;
use crate::error::SignalError;
use crate::maven::Coordinates;
use crate::project::ProjectIdentity;
use crate::repository::RepositoryAccess;
use std::sync::Arc;
use tracing::info;

/// Checks whether a project signs its artifacts with the Maven GPG plugin.
///
/// Only the plugins of the main `<build>` count. A signing plugin that is
/// merely managed, or enabled by a profile, leaves the signal false.
pub struct ArtifactSigning {
    access: Arc<dyn RepositoryAccess>,
    descriptor_path: String,
    signing_plugin: Coordinates,
}

impl ArtifactSigning {
    pub fn new(access: Arc<dyn RepositoryAccess>, config: &SignalsConfig) -> Self {
        Self {
            access,
            descriptor_path: config.descriptor_path.clone(),
            signing_plugin: config.signing_plugin.clone(),
        }
    }
}

impl SignalComputation for ArtifactSigning {
    fn signal(&self) -> Signal {
        Signal::SignsArtifacts
    }

    fn compute(&self, project: &ProjectIdentity) -> Result<SignalValue, SignalError> {
        info!(project = %project, plugin = %self.signing_plugin, "Checking if the project signs artifacts");

        let repository = self.access.local_mirror_of(project)?;
        let Some(model) = load_descriptor(&repository, &self.descriptor_path)? else {
            return Ok(self.signal().value(false));
        };

        let signs = model
            .build_plugins()
            .iter()
            .any(|plugin| plugin.is(&self.signing_plugin));

        Ok(self.signal().value(signs))
    }
}
