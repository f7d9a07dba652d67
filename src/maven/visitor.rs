//! Plugin location classifier
//!
//! A plugin can be declared in several places of one POM: the main build, its
//! plugin management, the top-level reporting section, and the build or
//! reporting section of any profile. [`browse`] walks all of them once,
//! merges the places each plugin was seen into a [`LocationSet`], and calls
//! the visitor once per distinct plugin.
//!
//! Build plugins and reporting plugins are kept apart: the same coordinates
//! declared in `<build>` and in `<reporting>` produce two callbacks.

use super::model::{Build, Coordinates, Model, Plugin, Reporting};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Structural context a plugin declaration was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Build,
    Management,
    Profile,
    Reporting,
}

pub type LocationSet = BTreeSet<Location>;

/// Whether a declaration comes from a `<build>` or a `<reporting>` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    Build,
    Report,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PluginIdentity {
    pub kind: PluginKind,
    pub coordinates: Coordinates,
}

impl PluginIdentity {
    pub fn build(coordinates: Coordinates) -> Self {
        Self {
            kind: PluginKind::Build,
            coordinates,
        }
    }

    pub fn report(coordinates: Coordinates) -> Self {
        Self {
            kind: PluginKind::Report,
            coordinates,
        }
    }
}

/// Every place one plugin identity was declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub identity: PluginIdentity,
    pub locations: LocationSet,
}

impl Classification {
    pub fn is_in(&self, location: Location) -> bool {
        self.locations.contains(&location)
    }
}

pub trait ModelVisitor {
    fn visit_build_plugin(&mut self, plugin: &PluginIdentity, locations: &LocationSet);

    fn visit_report_plugin(&mut self, plugin: &PluginIdentity, locations: &LocationSet);
}

const MAIN_BUILD: &[Location] = &[Location::Build];
const MAIN_MANAGEMENT: &[Location] = &[Location::Build, Location::Management];
const MAIN_REPORTING: &[Location] = &[Location::Reporting];
const PROFILE_BUILD: &[Location] = &[Location::Build, Location::Profile];
const PROFILE_MANAGEMENT: &[Location] = &[Location::Build, Location::Management, Location::Profile];
const PROFILE_REPORTING: &[Location] = &[Location::Reporting, Location::Profile];

/// One `<plugin>` entry tagged with where it was found
struct Occurrence<'a> {
    kind: PluginKind,
    coordinates: &'a Coordinates,
    locations: &'static [Location],
}

/// Walks `model` once and reports each distinct plugin to `visitor`.
///
/// Identities are visited in `(kind, coordinates)` order. A plugin that is
/// never declared is never visited.
pub fn browse<V: ModelVisitor + ?Sized>(model: &Model, visitor: &mut V) {
    for classification in classify(model) {
        let Classification {
            identity,
            locations,
        } = classification;

        match identity.kind {
            PluginKind::Build => visitor.visit_build_plugin(&identity, &locations),
            PluginKind::Report => visitor.visit_report_plugin(&identity, &locations),
        }
    }
}

/// Same traversal as [`browse`], returned as a list
pub fn classify(model: &Model) -> Vec<Classification> {
    let mut grouped: BTreeMap<PluginIdentity, LocationSet> = BTreeMap::new();

    for occurrence in occurrences(model) {
        let identity = PluginIdentity {
            kind: occurrence.kind,
            coordinates: occurrence.coordinates.clone(),
        };
        grouped
            .entry(identity)
            .or_default()
            .extend(occurrence.locations.iter().copied());
    }

    grouped
        .into_iter()
        .map(|(identity, locations)| Classification {
            identity,
            locations,
        })
        .collect()
}

fn occurrences(model: &Model) -> Vec<Occurrence<'_>> {
    let mut found = Vec::new();

    if let Some(build) = &model.build {
        collect_build(build, MAIN_BUILD, MAIN_MANAGEMENT, &mut found);
    }
    if let Some(reporting) = &model.reporting {
        collect_reporting(reporting, MAIN_REPORTING, &mut found);
    }

    for profile in &model.profiles {
        if let Some(build) = &profile.build {
            collect_build(build, PROFILE_BUILD, PROFILE_MANAGEMENT, &mut found);
        }
        if let Some(reporting) = &profile.reporting {
            collect_reporting(reporting, PROFILE_REPORTING, &mut found);
        }
    }

    found
}

fn collect_build<'a>(
    build: &'a Build,
    plugins_at: &'static [Location],
    management_at: &'static [Location],
    found: &mut Vec<Occurrence<'a>>,
) {
    collect(&build.plugins, PluginKind::Build, plugins_at, found);
    collect(&build.plugin_management, PluginKind::Build, management_at, found);
}

fn collect_reporting<'a>(
    reporting: &'a Reporting,
    locations: &'static [Location],
    found: &mut Vec<Occurrence<'a>>,
) {
    collect(&reporting.plugins, PluginKind::Report, locations, found);
}

fn collect<'a>(
    plugins: &'a [Plugin],
    kind: PluginKind,
    locations: &'static [Location],
    found: &mut Vec<Occurrence<'a>>,
) {
    found.extend(plugins.iter().map(|plugin| Occurrence {
        kind,
        coordinates: &plugin.coordinates,
        locations,
    }));
}
