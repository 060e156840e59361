use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort the whole run. A test whose output does not match
/// its expectation is not an error; it is a FAIL outcome.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read test script {}: {source}", path.display())]
    ReadScript { path: PathBuf, source: io::Error },

    #[error("failed to search {} for test scripts: {source}", path.display())]
    Discover { path: PathBuf, source: io::Error },

    #[error("failed to run interpreter {}: {source}", program.display())]
    Launch { program: PathBuf, source: io::Error },
}
