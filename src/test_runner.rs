use crate::diff::FailureReport;
use crate::error::DriverError;
use crate::expectation::expected_output;
use crate::global_configuration::global_config;
use crate::tally::{Outcome, Tally};
use colored::Colorize;
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

fn interpreter_command(script: &Path) -> Command {
    let interpreter = &global_config().interpreter;

    let mut command = Command::new(&interpreter.program);
    command
        .args(&interpreter.args)
        .arg(script)
        .stdin(Stdio::null());
    command
}

fn run_test(script: &Path) -> Result<Outcome, DriverError> {
    let quiet = global_config().quiet;

    let source = std::fs::read_to_string(script).map_err(|source| DriverError::ReadScript {
        path: script.to_path_buf(),
        source,
    })?;
    let expected = expected_output(&source);

    if !quiet {
        print!("Running {}... ", script.display());
        stdout().flush().expect("failed to flush stdout");
    }

    let output = interpreter_command(script)
        .output()
        .map_err(|source| DriverError::Launch {
            program: global_config().interpreter.program.clone(),
            source,
        })?;

    // Combined output: stdout immediately followed by stderr, no separator.
    let mut actual = String::from_utf8_lossy(&output.stdout).into_owned();
    actual.push_str(&String::from_utf8_lossy(&output.stderr));

    if actual == expected {
        if !quiet {
            println!("{}", "PASS".green().bold());
        }
        Ok(Outcome::Pass)
    } else {
        if quiet {
            print!("Running {}... ", script.display());
        }
        println!("{}", "FAIL".red().bold());
        print!(
            "{}",
            FailureReport {
                expected: &expected,
                actual: &actual,
            }
        );
        Ok(Outcome::Fail)
    }
}

/// Runs every script in order, one interpreter process at a time, and
/// returns the accumulated outcome tally. The first read or launch
/// failure aborts the batch.
pub fn run_tests(scripts: &[PathBuf]) -> Result<Tally, DriverError> {
    let mut tally = Tally::new();
    for script in scripts {
        tally.record(run_test(script)?);
    }
    Ok(tally)
}
