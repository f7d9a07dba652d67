//! Project identity used as cache key and URL source

use serde::{Deserialize, Serialize};
use std::fmt;

const GITHUB_BASE_URL: &str = "https://github.com";

/// An open-source project: owner, name and canonical URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectIdentity {
    owner: String,
    name: String,
    url: String,
}

impl ProjectIdentity {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            url: url.into(),
        }
    }

    /// A project hosted on GitHub, with URL `https://github.com/<owner>/<name>`
    pub fn github(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = owner.into();
        let name = name.into();
        let url = format!("{}/{}/{}", GITHUB_BASE_URL, owner, name);
        Self { owner, name, url }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
