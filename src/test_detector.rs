use crate::error::DriverError;
use crate::global_configuration::global_config;
use std::fs::read_dir;
use std::path::{Path, PathBuf};

/// Expands the command-line path arguments, in order, into the list of
/// test scripts to run. A file argument is taken as a script as-is; a
/// directory argument is searched recursively for scripts with the
/// configured extension.
pub fn detect_tests() -> Result<Vec<PathBuf>, DriverError> {
    let config = global_config();

    let mut scripts = Vec::new();
    for path in &config.paths {
        if path.is_dir() {
            collect_scripts_in(path, &config.extension, &mut scripts)?;
        } else {
            scripts.push(path.clone());
        }
    }

    Ok(scripts)
}

// Depth-first, lexicographic within each directory, so repeated runs see
// the same script order.
fn collect_scripts_in(
    dir: &Path,
    extension: &str,
    scripts: &mut Vec<PathBuf>,
) -> Result<(), DriverError> {
    let mut entries: Vec<PathBuf> = read_dir(dir)
        .map_err(|source| DriverError::Discover {
            path: dir.to_path_buf(),
            source,
        })?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<_, _>>()
        .map_err(|source| DriverError::Discover {
            path: dir.to_path_buf(),
            source,
        })?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_scripts_in(&path, extension, scripts)?;
        } else if path.extension().is_some_and(|e| e == extension) {
            scripts.push(path);
        }
    }

    Ok(())
}
