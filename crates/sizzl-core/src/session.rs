//! The question loop and the full scaffolding run

use crate::artifacts::ArtifactWriter;
use crate::flags::Flags;
use crate::manifest::{Manifest, RepositoryConfig};
use crate::prompt::{format_prompt, Prompter};
use crate::questions::{self, Field, Question};
use crate::report::Reporter;
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Separator between keywords in the Keywords answer
const KEYWORD_SEPARATOR: &str = ", ";

/// Configuration for one run
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Directory the artifacts are written to; its name is the package name default
    pub root: PathBuf,
    pub flags: Flags,
}

impl SessionOptions {
    pub fn new(root: impl Into<PathBuf>, flags: Flags) -> Self {
        Self {
            root: root.into(),
            flags,
        }
    }
}

/// Effective answers, and the records they were routed into
#[derive(Debug, Clone, Default)]
pub struct Answers {
    given: HashMap<Field, String>,
    pub manifest: Manifest,
    pub repository: RepositoryConfig,
}

impl Answers {
    /// The effective answer for `field`, if that question has been asked
    pub fn get(&self, field: Field) -> Option<&str> {
        self.given.get(&field).map(String::as_str)
    }

    /// Record the effective answer for `field`
    pub fn apply(&mut self, field: Field, answer: String) {
        self.given.insert(field, answer.clone());
        match field {
            Field::Description => self.manifest.description = answer,
            Field::Keywords => self.manifest.keywords = split_keywords(&answer),
            Field::Author => self.manifest.author = answer,
            Field::GithubUsername => self.repository.github_username = answer,
            Field::PackageName => self.manifest.name = answer,
            Field::GithubRepoName => self.repository.github_repo_name = answer,
            Field::Version => self.manifest.version = answer,
            Field::EntryPoint => self.manifest.main = answer,
            Field::TestCommand => {
                self.manifest.scripts.insert("test".to_string(), answer);
            }
            Field::License => self.manifest.license = answer,
        }
    }

    /// Manifest with the derived repository fields filled in
    pub fn into_manifest(self) -> Manifest {
        let mut manifest = self.manifest;
        manifest.finalize(&self.repository);
        manifest
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(KEYWORD_SEPARATOR).map(str::to_string).collect()
}

/// Ask every question in order and collect the effective answers
pub fn ask_all<P: Prompter + ?Sized>(
    plan: &[Question],
    prompter: &mut P,
    skip_defaults: bool,
) -> Result<Answers> {
    let mut answers = Answers::default();

    for question in plan {
        let default = question
            .resolve_default(|field| answers.get(field))
            .map(str::to_string);

        let answer = match default {
            Some(default) if skip_defaults => default,
            default => {
                let response = prompter.ask(&format_prompt(question.label, default.as_deref()))?;
                match default {
                    Some(default) if response.is_empty() => default,
                    _ => response,
                }
            }
        };

        answers.apply(question.field, answer);
    }

    Ok(answers)
}

/// Ask the questions, build the manifest and write all artifacts.
///
/// Returns the finalized manifest and the paths created, in write order.
pub fn run<P, R>(
    options: &SessionOptions,
    prompter: &mut P,
    reporter: &R,
) -> Result<(Manifest, Vec<PathBuf>)>
where
    P: Prompter + ?Sized,
    R: Reporter + ?Sized,
{
    let plan = questions::plan(&options.root);
    let answers = ask_all(&plan, prompter, options.flags.skip_defaults)?;
    let manifest = answers.into_manifest();

    let written =
        ArtifactWriter::new(&options.root, reporter).write_all(&manifest, &options.flags)?;

    Ok((manifest, written))
}
