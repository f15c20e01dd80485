//! Writing the manifest files and optional boilerplate
//!
//! Files are written relative to the writer's root in a fixed order. A
//! directory that already exists only produces a warning; any other directory
//! failure stops the run with [`ScaffoldError::Directory`].

pub mod boilerplate;
pub mod license;

pub use license::LicenseAction;

use crate::error::ScaffoldError;
use crate::flags::Flags;
use crate::manifest::{self, Manifest};
use crate::report::Reporter;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Writes artifacts under `root`, collecting the paths it wrote
pub struct ArtifactWriter<'a, R: Reporter + ?Sized> {
    root: PathBuf,
    reporter: &'a R,
    written: Vec<PathBuf>,
}

impl<'a, R: Reporter + ?Sized> ArtifactWriter<'a, R> {
    pub fn new(root: impl Into<PathBuf>, reporter: &'a R) -> Self {
        Self {
            root: root.into(),
            reporter,
            written: Vec::new(),
        }
    }

    /// Write everything the manifest and flags call for
    pub fn write_all(mut self, manifest: &Manifest, flags: &Flags) -> Result<Vec<PathBuf>> {
        self.write_file("package.json", manifest::to_json_pretty(manifest)?)?;
        self.write_file(
            "package-lock.json",
            manifest::to_json_pretty(&manifest.lockfile())?,
        )?;

        if flags.readme {
            self.write_file(
                "README.md",
                boilerplate::readme(&manifest.name, &manifest.description),
            )?;
        }

        if flags.license {
            self.write_license(manifest)?;
        }

        if flags.web_app {
            self.ensure_dir("site")?;
            self.ensure_dir("site/host")?;
            self.write_file("site/host/index.html", boilerplate::HTML_PAGE)?;
            self.write_file("site/host/404.html", boilerplate::HTML_PAGE)?;
        }

        if flags.tests {
            self.ensure_dir("tests")?;
            self.write_file("tests/test.js", "")?;
        }

        if flags.lib_dir {
            self.ensure_dir("lib")?;
            self.write_file("lib/index.js", "")?;
        }

        Ok(self.written)
    }

    fn write_license(&mut self, manifest: &Manifest) -> Result<()> {
        match LicenseAction::for_license(&manifest.license) {
            LicenseAction::WriteMit => {
                self.write_file("LICENSE.md", license::mit_text(&manifest.author))
            }
            LicenseAction::Skip => Ok(()),
            LicenseAction::Unsupported(name) => {
                self.reporter.warn(&license::unsupported_message(&name));
                Ok(())
            }
        }
    }

    /// Create a single directory level; an existing directory is only a warning
    pub fn ensure_dir(&mut self, name: &str) -> Result<()> {
        let path = self.root.join(name);
        match fs::create_dir(&path) {
            Ok(()) => {
                self.written.push(path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                self.reporter
                    .warn(&format!("Directory \"{}\" already exists.", name));
                Ok(())
            }
            Err(source) => Err(ScaffoldError::Directory {
                name: name.to_string(),
                path,
                source,
            }
            .into()),
        }
    }

    fn write_file(&mut self, name: &str, contents: impl AsRef<[u8]>) -> Result<()> {
        let path = self.root.join(name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        self.written.push(path);
        Ok(())
    }
}
