use super::descriptor::load_descriptor;
use super::{Signal, SignalComputation, SignalValue};
use crate::config::SignalsConfig;
use crate::error::SignalError;
use crate::maven::{browse, Coordinates, LocationSet, ModelVisitor, PluginIdentity};
use crate::project::ProjectIdentity;
use crate::repository::RepositoryAccess;
use std::sync::Arc;
use tracing::{debug, info};

/// Checks whether a project declares the OWASP dependency-check plugin.
///
/// Unlike [`ArtifactSigning`](super::ArtifactSigning) every location counts:
/// main build, plugin management, profiles and reporting, as either a build
/// or a reporting plugin.
pub struct DependencyScanning {
    access: Arc<dyn RepositoryAccess>,
    descriptor_path: String,
    scanner_plugin: Coordinates,
}

impl DependencyScanning {
    pub fn new(access: Arc<dyn RepositoryAccess>, config: &SignalsConfig) -> Self {
        Self {
            access,
            descriptor_path: config.descriptor_path.clone(),
            scanner_plugin: config.dependency_check_plugin.clone(),
        }
    }
}

struct PluginFinder<'a> {
    wanted: &'a Coordinates,
    found: LocationSet,
}

impl PluginFinder<'_> {
    fn record(&mut self, plugin: &PluginIdentity, locations: &LocationSet) {
        if &plugin.coordinates == self.wanted {
            self.found.extend(locations.iter().copied());
        }
    }
}

impl ModelVisitor for PluginFinder<'_> {
    fn visit_build_plugin(&mut self, plugin: &PluginIdentity, locations: &LocationSet) {
        self.record(plugin, locations);
    }

    fn visit_report_plugin(&mut self, plugin: &PluginIdentity, locations: &LocationSet) {
        self.record(plugin, locations);
    }
}

impl SignalComputation for DependencyScanning {
    fn signal(&self) -> Signal {
        Signal::ScansDependencies
    }

    fn compute(&self, project: &ProjectIdentity) -> Result<SignalValue, SignalError> {
        info!(project = %project, plugin = %self.scanner_plugin, "Checking if the project scans dependencies");

        let repository = self.access.local_mirror_of(project)?;
        let Some(model) = load_descriptor(&repository, &self.descriptor_path)? else {
            return Ok(self.signal().value(false));
        };

        let mut finder = PluginFinder {
            wanted: &self.scanner_plugin,
            found: LocationSet::new(),
        };
        browse(&model, &mut finder);
        debug!(locations = ?finder.found, "Dependency scanner locations");

        Ok(self.signal().value(!finder.found.is_empty()))
    }
}
