//! Sizzl Core - Shared library for the `sizzl` package scaffolder
//!
//! A run asks a fixed sequence of questions, turns the answers into a
//! `package.json` manifest and then writes the optional boilerplate selected by
//! the flag token.
//!
//! # Architecture
//!
//! - **Flags** - single-token flag parsing and the static help text
//! - **Questions** - the fixed question plan and its default values
//! - **Prompt** - `Prompter` trait and the line-based implementation
//! - **Session** - the question loop, answer routing and the full run
//! - **Manifest** - `package.json` / `package-lock.json` models
//! - **Artifacts** - README, LICENSE, web, test and lib boilerplate
//! - **Report** - colored `[WARN]` / `[FATAL]` console output
//!
//! # Example Usage
//!
//! ```ignore
//! use sizzl_core::{session, ConsoleReporter, Flags, LinePrompter, SessionOptions};
//!
//! let options = SessionOptions::new(std::env::current_dir()?, Flags::from_token(Some("rl")));
//! let stdin = std::io::stdin();
//! let mut prompter = LinePrompter::new(stdin.lock(), std::io::stdout());
//! session::run(&options, &mut prompter, &ConsoleReporter)?;
//! ```

pub mod artifacts;
pub mod error;
pub mod flags;
pub mod manifest;
pub mod prompt;
pub mod questions;
pub mod report;
pub mod session;

// Re-export main types for convenience
pub use artifacts::{ArtifactWriter, LicenseAction};
pub use error::ScaffoldError;
pub use flags::{Flags, HELP_TEXT};
pub use manifest::{Lockfile, Manifest, RepositoryConfig};
pub use prompt::{LinePrompter, Prompter};
pub use questions::{DefaultValue, Field, Question};
pub use report::{ConsoleReporter, Reporter};
pub use session::{Answers, SessionOptions};
