//! Sizzl - Interactive package.json scaffolding

use anyhow::{Context, Result};
use clap::Parser;
use sizzl_core::{
    session, ConsoleReporter, Flags, LinePrompter, Reporter, ScaffoldError, SessionOptions,
    HELP_TEXT,
};
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sizzl")]
#[command(about = "Interactive scaffolding for Node.js packages")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Combined flag letters, e.g. `rltnd` (use `h` to list them)
    #[arg(allow_hyphen_values = true)]
    pub flags: Option<String>,

    /// Anything after the flag token is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

fn main() -> ExitCode {
    // Ctrl+C while waiting on a prompt
    ctrlc::set_handler(move || {
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let flags = Flags::from_token(args.flags.as_deref());

    if flags.help {
        println!("{}", HELP_TEXT);
        return ExitCode::SUCCESS;
    }

    match run(flags) {
        Ok(()) => {
            println!("Process complete!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if err.downcast_ref::<ScaffoldError>().is_some() {
                ConsoleReporter.fatal(&err);
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(flags: Flags) -> Result<()> {
    let root = std::env::current_dir().context("Failed to read the current directory")?;
    let options = SessionOptions::new(root, flags);

    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    let (manifest, written) = session::run(&options, &mut prompter, &ConsoleReporter)?;

    println!(
        "Created {} artifacts for {} in {}",
        written.len(),
        manifest.name,
        options.root.display()
    );

    Ok(())
}
