//! Console reporting for warnings and fatal errors

use colored::Colorize;
use std::fmt::Display;

/// Sink for non-prompt messages produced during a run
pub trait Reporter {
    /// Something was skipped or already present; the run continues
    fn warn(&self, message: &str);

    /// The run is about to stop because of `error`
    fn fatal(&self, error: &dyn Display);
}

/// Reporter that writes colored lines to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn warn(&self, message: &str) {
        eprintln!("{} {}", "[WARN]".black().on_yellow(), message.yellow());
    }

    fn fatal(&self, error: &dyn Display) {
        eprintln!(
            "{} {}",
            "[FATAL]".black().on_red(),
            "A fatal error occured:".red()
        );
        eprintln!("{}", error);
    }
}
