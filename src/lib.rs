//! oss-signals - security-posture signals for open-source projects
//!
//! Computes boolean facts about a project from local mirrors of source
//! trees: whether a fuzzing registry builds it, whether its Maven build signs
//! artifacts, whether it declares a dependency vulnerability scanner.
//!
//! # Core Concepts
//!
//! - **Signals**: named boolean dimensions ([`Signal`]) with computed values
//!   ([`SignalValue`]) collected per project into a [`SignalSet`]
//! - **Providers**: [`CachedSignalProvider`] runs a [`SignalComputation`] at
//!   most once per project and serves later requests from its cache
//! - **Mirrors**: [`RepositoryAccess`] hands out read-only
//!   [`RepositoryHandle`]s to already checked-out source trees
//! - **Plugin classification**: [`maven::browse`] reports every plugin of a
//!   POM once, with the set of places it was declared in
//!
//! # Example
//!
//! ```no_run
//! use oss_signals::{
//!     ArtifactSigning, CachedSignalProvider, LocalMirrors, ProjectIdentity, RealFileSystem,
//!     SignalsConfig,
//! };
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SignalsConfig::default();
//! config.validate()?;
//!
//! let mirrors = Arc::new(LocalMirrors::new("/var/mirrors", Arc::new(RealFileSystem::new())));
//! let signing = CachedSignalProvider::new(ArtifactSigning::new(mirrors, &config));
//!
//! let value = signing.value_for(&ProjectIdentity::github("apache", "commons-io"))?;
//! println!("{}: {}", value.signal(), value.get());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod maven;
pub mod project;
pub mod repository;
pub mod signal;
pub mod util;

pub use config::{ConfigError, SignalsConfig};
pub use error::SignalError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use project::ProjectIdentity;
pub use repository::{LocalMirrors, RepositoryAccess, RepositoryHandle};
pub use signal::{
    collect, ArtifactSigning, CachedSignalProvider, DependencyScanning,
    FuzzingRegistryMembership, Signal, SignalComputation, SignalProvider, SignalSet, SignalValue,
};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
