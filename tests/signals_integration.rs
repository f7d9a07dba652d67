//! Signal providers over mirror trees on disk

mod support;

use oss_signals::{
    collect, ArtifactSigning, CachedSignalProvider, DependencyScanning, FuzzingRegistryMembership,
    LocalMirrors, MockFileSystem, ProjectIdentity, Signal, SignalError, SignalProvider,
    SignalsConfig,
};
use std::sync::Arc;
use support::{maven_fixture, MirrorTree};

fn zlib() -> ProjectIdentity {
    ProjectIdentity::github("madler", "zlib")
}

fn registry_tree() -> MirrorTree {
    let tree = MirrorTree::new();
    tree.add_file(
        "google/oss-fuzz/projects/zlib/Dockerfile",
        "FROM gcr.io/oss-fuzz-base/base-builder\n\
         RUN apt-get update && apt-get install -y make autoconf\n\
         RUN git clone --depth 1 -b develop https://github.com/madler/zlib\n\
         WORKDIR zlib\n",
    )
    .add_file(
        "google/oss-fuzz/projects/zlib/project.yaml",
        "homepage: \"https://zlib.net/\"\nmain_repo: \"https://github.com/madler/zlib\"\n",
    )
    .add_file(
        "google/oss-fuzz/projects/curl/Dockerfile",
        "RUN git clone --depth 1 https://github.com/curl/curl.git curl\n",
    )
    .add_file("google/oss-fuzz/infra/base-images/base-builder/Dockerfile", "FROM ubuntu:20.04\n");
    tree
}

#[test]
fn test_fuzzed_project_is_found_in_registry() {
    let tree = registry_tree();
    let provider = CachedSignalProvider::new(FuzzingRegistryMembership::new(
        tree.mirrors(),
        &SignalsConfig::builtin(),
    ));

    assert!(provider.value_for(&zlib()).unwrap().get());
    assert!(provider
        .value_for(&ProjectIdentity::github("curl", "curl"))
        .unwrap()
        .get());
    assert!(!provider
        .value_for(&ProjectIdentity::github("apache", "nifi"))
        .unwrap()
        .get());
}

#[test]
fn test_latin1_dockerfile_in_registry() {
    let tree = registry_tree();
    tree.add_bytes(
        "google/oss-fuzz/projects/aaa/Dockerfile",
        b"# Copyright J\xfcrgen\nRUN git clone https://github.com/aaa/aaa\n",
    );

    let provider = CachedSignalProvider::new(FuzzingRegistryMembership::new(
        tree.mirrors(),
        &SignalsConfig::builtin(),
    ));

    assert!(provider.value_for(&zlib()).unwrap().get());
}

#[test]
fn test_latin1_descriptor_on_disk() {
    let tree = MirrorTree::new();
    tree.add_bytes(
        "apache/commons-io/pom.xml",
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
          <project>\n  <name>Commons \xc9dition</name>\n  <build><plugins>\n\
          <plugin><groupId>org.apache.maven.plugins</groupId>\
          <artifactId>maven-gpg-plugin</artifactId></plugin>\n\
          </plugins></build>\n</project>\n",
    );

    let provider = CachedSignalProvider::new(ArtifactSigning::new(
        tree.mirrors(),
        &SignalsConfig::builtin(),
    ));

    assert!(provider
        .value_for(&ProjectIdentity::github("apache", "commons-io"))
        .unwrap()
        .get());
}

#[test]
fn test_empty_registry_means_not_fuzzed() {
    let tree = MirrorTree::new();
    tree.add_dir("google/oss-fuzz");

    let provider = CachedSignalProvider::new(FuzzingRegistryMembership::new(
        tree.mirrors(),
        &SignalsConfig::builtin(),
    ));

    assert!(!provider.value_for(&zlib()).unwrap().get());
}

#[test]
fn test_missing_registry_is_error_and_retried() {
    let tree = MirrorTree::new();
    let provider = CachedSignalProvider::new(FuzzingRegistryMembership::new(
        tree.mirrors(),
        &SignalsConfig::builtin(),
    ));

    let err = provider.value_for(&zlib()).unwrap_err();
    assert!(matches!(err, SignalError::MirrorNotFound { .. }));
    assert!(provider.cached(&zlib()).is_none());

    // Mirror shows up later, the next request succeeds
    tree.add_file(
        "google/oss-fuzz/projects/zlib/Dockerfile",
        "RUN git clone https://github.com/madler/zlib",
    );
    assert!(provider.value_for(&zlib()).unwrap().get());
}

#[test]
fn test_signing_and_scanning_from_fixtures() {
    let tree = MirrorTree::new();
    tree.add_file("acme/signed/pom.xml", &maven_fixture("gpg-release.xml"))
        .add_file(
            "acme/profile-signed/pom.xml",
            &maven_fixture("gpg-in-release-profile.xml"),
        )
        .add_file(
            "acme/managed-scan/pom.xml",
            &maven_fixture("dependency-check-in-management.xml"),
        )
        .add_file("acme/no-maven/build.gradle", "plugins { id 'java' }\n");

    let config = SignalsConfig::builtin();
    let signing = CachedSignalProvider::new(ArtifactSigning::new(tree.mirrors(), &config));
    let scanning = CachedSignalProvider::new(DependencyScanning::new(tree.mirrors(), &config));

    let check = |name: &str| -> (bool, bool) {
        let project = ProjectIdentity::github("acme", name);
        (
            signing.value_for(&project).unwrap().get(),
            scanning.value_for(&project).unwrap().get(),
        )
    };

    assert_eq!(check("signed"), (true, true));
    assert_eq!(check("profile-signed"), (false, false));
    assert_eq!(check("managed-scan"), (false, true));
    assert_eq!(check("no-maven"), (false, false));
}

#[test]
fn test_malformed_descriptor_is_error() {
    let tree = MirrorTree::new();
    tree.add_file("acme/broken/pom.xml", "<project><build><plugins>");

    let signing = CachedSignalProvider::new(ArtifactSigning::new(
        tree.mirrors(),
        &SignalsConfig::builtin(),
    ));
    let err = signing
        .value_for(&ProjectIdentity::github("acme", "broken"))
        .unwrap_err();

    assert!(matches!(err, SignalError::Descriptor { .. }));
    assert!(signing.is_empty());
}

#[test]
fn test_second_request_reads_nothing() {
    let fs = Arc::new(MockFileSystem::with_root("/mirrors".into()));
    fs.add_file("acme/signed/pom.xml", &maven_fixture("gpg-release.xml"));
    let mirrors = Arc::new(LocalMirrors::new("/mirrors", fs.clone()));

    let signing = CachedSignalProvider::new(ArtifactSigning::new(
        mirrors,
        &SignalsConfig::builtin(),
    ));
    let project = ProjectIdentity::github("acme", "signed");

    assert!(signing.value_for(&project).unwrap().get());
    assert_eq!(fs.read_count(), 1);

    assert!(signing.value_for(&project).unwrap().get());
    assert_eq!(fs.read_count(), 1);
}

#[test]
fn test_absent_descriptor_is_never_read() {
    let fs = Arc::new(MockFileSystem::with_root("/mirrors".into()));
    fs.add_file("acme/gradle-only/build.gradle", "plugins { id 'java' }");
    let mirrors = Arc::new(LocalMirrors::new("/mirrors", fs.clone()));

    let signing = ArtifactSigning::new(mirrors, &SignalsConfig::builtin());
    let provider = CachedSignalProvider::new(signing);

    assert!(!provider
        .value_for(&ProjectIdentity::github("acme", "gradle-only"))
        .unwrap()
        .get());
    assert_eq!(fs.read_count(), 0);
}

#[test]
fn test_collect_signal_set() {
    let tree = registry_tree();
    tree.add_file("madler/zlib/pom.xml", &maven_fixture("gpg-release.xml"));

    let config = SignalsConfig::builtin();
    let fuzzing = CachedSignalProvider::new(FuzzingRegistryMembership::new(tree.mirrors(), &config));
    let signing = CachedSignalProvider::new(ArtifactSigning::new(tree.mirrors(), &config));
    let scanning = CachedSignalProvider::new(DependencyScanning::new(tree.mirrors(), &config));

    let providers: Vec<&dyn SignalProvider> = vec![&fuzzing, &signing, &scanning];
    let values = collect(&zlib(), &providers).unwrap();

    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|v| v.get()));
    assert_eq!(
        serde_json::to_value(&values).unwrap()["fuzzed_in_registry"]["value"],
        serde_json::json!(true)
    );
    assert_eq!(values.get(Signal::SignsArtifacts).map(|v| v.get()), Some(true));
}
