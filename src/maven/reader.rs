//! `pom.xml` reader
//!
//! Builds a [`Model`] straight from the XML tree. Elements are matched by
//! local name, so POMs with or without the `http://maven.apache.org/POM/4.0.0`
//! namespace read the same. No inheritance, interpolation or schema checks.

use super::model::{Build, Coordinates, Model, Plugin, Profile, Reporting, DEFAULT_PLUGIN_GROUP_ID};
use roxmltree::{Document, Node};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Root element is <{0}>, expected <project>")]
    NotAProject(String),
}

/// Parses the text of a `pom.xml` into a [`Model`]
///
/// Plugin entries without an `artifactId` identify nothing and are skipped.
pub fn read_model(content: &str) -> Result<Model, DescriptorError> {
    let doc = Document::parse(content)?;
    let root = doc.root_element();

    if !root.has_tag_name("project") {
        return Err(DescriptorError::NotAProject(
            root.tag_name().name().to_string(),
        ));
    }

    Ok(Model {
        group_id: child_text(root, "groupId"),
        artifact_id: child_text(root, "artifactId"),
        build: child(root, "build").map(read_build),
        reporting: child(root, "reporting").map(read_reporting),
        profiles: read_profiles(root),
    })
}

fn read_profiles(root: Node) -> Vec<Profile> {
    let Some(profiles) = child(root, "profiles") else {
        return Vec::new();
    };

    children(profiles, "profile")
        .map(|node| Profile {
            id: child_text(node, "id"),
            build: child(node, "build").map(read_build),
            reporting: child(node, "reporting").map(read_reporting),
        })
        .collect()
}

fn read_build(node: Node) -> Build {
    Build {
        plugins: read_plugins(node),
        plugin_management: child(node, "pluginManagement")
            .map(read_plugins)
            .unwrap_or_default(),
    }
}

fn read_reporting(node: Node) -> Reporting {
    Reporting {
        plugins: read_plugins(node),
    }
}

/// Reads `<plugins><plugin>...` directly under `container`
fn read_plugins(container: Node) -> Vec<Plugin> {
    let Some(plugins) = child(container, "plugins") else {
        return Vec::new();
    };

    children(plugins, "plugin").filter_map(read_plugin).collect()
}

fn read_plugin(node: Node) -> Option<Plugin> {
    let artifact_id = child_text(node, "artifactId")?;
    let group_id =
        child_text(node, "groupId").unwrap_or_else(|| DEFAULT_PLUGIN_GROUP_ID.to_string());

    Some(Plugin {
        coordinates: Coordinates::new(group_id, artifact_id),
        version: child_text(node, "version"),
    })
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |c| c.is_element() && c.has_tag_name(name))
}

fn child<'a, 'input: 'a>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.has_tag_name(name))
}

/// Trimmed text of a child element. Comments inside it are skipped.
fn child_text(node: Node, name: &str) -> Option<String> {
    let element = child(node, name)?;
    let text: String = element
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
