//! Errors the binary needs to tell apart from ordinary failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Creating an artifact directory failed for a reason other than it
    /// already existing. The run stops without writing further artifacts.
    #[error("Failed to create directory \"{name}\" at {}: {source}", path.display())]
    Directory {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
