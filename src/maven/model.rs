//! Parsed form of a `pom.xml`, limited to the sections plugin checks look at

use serde::{Deserialize, Serialize};
use std::fmt;

/// Group Maven assumes for a plugin declared without `<groupId>`
pub const DEFAULT_PLUGIN_GROUP_ID: &str = "org.apache.maven.plugins";

/// `groupId:artifactId` pair identifying a plugin
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    pub group_id: String,
    pub artifact_id: String,
}

impl Coordinates {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// A `<plugin>` entry from a build or reporting section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    pub coordinates: Coordinates,
    pub version: Option<String>,
}

impl Plugin {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            version: None,
        }
    }

    pub fn is(&self, coordinates: &Coordinates) -> bool {
        &self.coordinates == coordinates
    }
}

/// `<build>` of the project or of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Build {
    pub plugins: Vec<Plugin>,
    /// Plugins under `<pluginManagement><plugins>`
    pub plugin_management: Vec<Plugin>,
}

/// `<reporting>` of the project or of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reporting {
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub id: Option<String>,
    pub build: Option<Build>,
    pub reporting: Option<Reporting>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub build: Option<Build>,
    pub reporting: Option<Reporting>,
    pub profiles: Vec<Profile>,
}

impl Model {
    /// Plugins of the main `<build>`, excluding plugin management and profiles
    pub fn build_plugins(&self) -> &[Plugin] {
        self.build
            .as_ref()
            .map(|b| b.plugins.as_slice())
            .unwrap_or(&[])
    }
}
