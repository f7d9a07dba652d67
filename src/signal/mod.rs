//! Boolean security-posture signals and the providers that compute them

mod dependency_scan;
mod descriptor;
mod fuzzing;
pub mod provider;
mod signing;

pub use dependency_scan::DependencyScanning;
pub use fuzzing::FuzzingRegistryMembership;
pub use provider::{collect, CachedSignalProvider, SignalComputation, SignalProvider};
pub use signing::ArtifactSigning;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A named rating dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// A fuzzing registry builds the project
    FuzzedInRegistry,
    /// The main Maven build signs its artifacts
    SignsArtifacts,
    /// A dependency vulnerability scanner plugin is declared somewhere in the POM
    ScansDependencies,
}

impl Signal {
    pub fn name(&self) -> &'static str {
        match self {
            Signal::FuzzedInRegistry => "fuzzed_in_registry",
            Signal::SignsArtifacts => "signs_artifacts",
            Signal::ScansDependencies => "scans_dependencies",
        }
    }

    /// The one way to build a computed value for this signal
    pub fn value(self, value: bool) -> SignalValue {
        SignalValue {
            signal: self,
            value,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalValue {
    signal: Signal,
    value: bool,
}

impl SignalValue {
    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn get(&self) -> bool {
        self.value
    }
}

/// Values of several signals for one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalSet {
    values: BTreeMap<Signal, SignalValue>,
}

impl SignalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, replacing an earlier value of the same signal
    pub fn insert(&mut self, value: SignalValue) {
        self.values.insert(value.signal(), value);
    }

    pub fn get(&self, signal: Signal) -> Option<&SignalValue> {
        self.values.get(&signal)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignalValue> {
        self.values.values()
    }
}
