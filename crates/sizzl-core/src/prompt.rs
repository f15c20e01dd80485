//! Line-based interactive prompts

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Source of answers for the question loop
pub trait Prompter {
    /// Show `prompt` and return one line of input without its terminator
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompter that writes to `output` and reads whole lines from `input`
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        // End of input reads as an empty answer; invalid UTF-8 is replaced
        let mut buf = Vec::new();
        self.input
            .read_until(b'\n', &mut buf)
            .context("Failed to read answer")?;

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Format the prompt text for a question label and its resolved default
pub fn format_prompt(label: &str, default: Option<&str>) -> String {
    match default {
        Some(default) => format!("{} ({}) ", label, default),
        None => format!("{} ", label),
    }
}
