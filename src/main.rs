mod diff;
mod error;
mod expectation;
mod global_configuration;
mod tally;
mod test_detector;
mod test_reporter;
mod test_runner;

use std::process::{exit, Command, ExitCode, Stdio};

use crate::global_configuration::global_config;
use crate::test_detector::detect_tests;
use crate::test_reporter::report_tally;
use crate::test_runner::run_tests;

// Launch the interpreter once with no script so a misconfigured path is
// reported before any test runs.
fn check_interpreter() {
    let interpreter = &global_config().interpreter;

    let output = Command::new(&interpreter.program)
        .args(&interpreter.args)
        .stdin(Stdio::null())
        .output();

    if let Err(error) = output {
        eprintln!(
            "Failed to run interpreter {}",
            interpreter.program.display()
        );
        eprintln!("Cause: {}", error);
        exit(1);
    }
}

fn main() -> ExitCode {
    check_interpreter();

    let scripts = match detect_tests() {
        Ok(scripts) => scripts,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let tally = match run_tests(&scripts) {
        Ok(tally) => tally,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    report_tally(&tally)
}
