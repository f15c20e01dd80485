//! The fixed question plan

use std::path::Path;

/// Fields that a question answers, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Description,
    Keywords,
    Author,
    GithubUsername,
    PackageName,
    GithubRepoName,
    Version,
    EntryPoint,
    TestCommand,
    License,
}

/// Where a question's default comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// A fixed value known when the plan is built
    Literal(String),
    /// The effective answer already given for another field
    SameAs(Field),
}

/// One entry of the question plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub field: Field,
    /// Label shown to the user
    pub label: &'static str,
    pub default: Option<DefaultValue>,
}

impl Question {
    fn new(field: Field, label: &'static str) -> Self {
        Self {
            field,
            label,
            default: None,
        }
    }

    fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    fn with_literal(self, value: impl Into<String>) -> Self {
        self.with_default(DefaultValue::Literal(value.into()))
    }

    /// Resolve the default against the answers collected so far.
    ///
    /// Empty defaults are reported as `None`, so they are neither shown in the
    /// prompt nor used by skip-defaults.
    pub fn resolve_default<'a, F>(&'a self, lookup: F) -> Option<&'a str>
    where
        F: Fn(Field) -> Option<&'a str>,
    {
        let value = match self.default.as_ref()? {
            DefaultValue::Literal(value) => value.as_str(),
            DefaultValue::SameAs(field) => lookup(*field)?,
        };
        (!value.is_empty()).then_some(value)
    }
}

/// Build the question plan for a project rooted at `root`
pub fn plan(root: &Path) -> Vec<Question> {
    let dir_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    vec![
        Question::new(Field::Description, "Description"),
        Question::new(Field::Keywords, "Keywords"),
        Question::new(Field::Author, "Author"),
        Question::new(Field::GithubUsername, "GitHub Username"),
        Question::new(Field::PackageName, "Package Name").with_literal(dir_name),
        Question::new(Field::GithubRepoName, "GitHub Repository Name")
            .with_default(DefaultValue::SameAs(Field::PackageName)),
        Question::new(Field::Version, "Version").with_literal("1.0.0"),
        Question::new(Field::EntryPoint, "Entry Point").with_literal("index.js"),
        Question::new(Field::TestCommand, "Test Command").with_literal("node tests/test.js"),
        Question::new(Field::License, "Liscense").with_literal("MIT"),
    ]
}
