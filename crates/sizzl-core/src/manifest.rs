//! `package.json` and `package-lock.json` models

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Indentation used for every generated JSON file
const JSON_INDENT: &[u8] = b"\t";

/// The project descriptor written to `package.json`
///
/// Field order here is the order in the generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub name: String,
    pub version: String,
    pub main: String,
    pub scripts: BTreeMap<String, String>,
    pub license: String,
    pub repository: Repository,
    pub bugs: Bugs,
    pub homepage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bugs {
    pub url: String,
}

/// GitHub coordinates used only to derive the repository URLs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub github_username: String,
    pub github_repo_name: String,
}

/// The reduced record written to `package-lock.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lockfile {
    pub name: String,
    pub version: String,
    #[serde(rename = "lockfileVersion")]
    pub lockfile_version: u32,
}

impl Manifest {
    /// Fill in the derived repository, bugs and homepage fields.
    ///
    /// Always overwrites; a blank repository name falls back to the package name.
    pub fn finalize(&mut self, config: &RepositoryConfig) {
        let repo_name = if config.github_repo_name.is_empty() {
            &self.name
        } else {
            &config.github_repo_name
        };
        let repository_path = format!(
            "https://github.com/{}/{}",
            config.github_username, repo_name
        );

        self.repository.kind = "git".to_string();
        self.repository.url = format!("git+{}.git", repository_path);
        self.bugs.url = format!("{}/issues", repository_path);
        self.homepage = format!("{}#readme", repository_path);
    }

    pub fn lockfile(&self) -> Lockfile {
        Lockfile {
            name: self.name.clone(),
            version: self.version.clone(),
            lockfile_version: 1,
        }
    }
}

/// Serialize with tab indentation and no trailing newline
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")
}
