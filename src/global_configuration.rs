use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::sync::OnceLock;

/// How to launch the interpreter under test: the executable plus the
/// launch arguments placed before the script path.
#[derive(Deserialize, Clone, Debug)]
pub struct InterpreterCommand {
    pub program: PathBuf,

    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct DriverConfigFile {
    interpreter: InterpreterCommand,
}

pub struct DriverConfig {
    pub interpreter: InterpreterCommand,
    pub paths: Vec<PathBuf>,
    pub extension: String,
    pub quiet: bool,
}

pub fn global_config() -> &'static DriverConfig {
    static CONFIG: OnceLock<DriverConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let args = Args::parse();

        let interpreter = match args.interpreter {
            Some(program) => InterpreterCommand {
                program,
                args: args.interpreter_args,
            },
            None => read_config_file(&args.config).interpreter,
        };

        DriverConfig {
            interpreter,
            paths: args.paths,
            extension: args.extension,
            quiet: args.quiet,
        }
    })
}

fn read_config_file(path: &Path) -> DriverConfigFile {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read config file {}", path.display());
            eprintln!("Cause: {}", error);
            exit(1);
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Failed to parse config file {}", path.display());
            eprintln!("Cause: {}", error);
            exit(1);
        }
    }
}

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// TOML file describing how to launch the interpreter
    #[arg(long, default_value = "driver.toml")]
    config: PathBuf,

    /// Interpreter executable; bypasses the config file
    #[arg(long)]
    interpreter: Option<PathBuf>,

    /// Launch argument placed before the script path (repeatable)
    #[arg(long = "interpreter-arg", requires = "interpreter")]
    interpreter_args: Vec<String>,

    /// File extension of test scripts when searching directories
    #[arg(long, default_value = "lox")]
    extension: String,

    /// Suppress status lines for passing tests
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Test scripts, or directories to search for them
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}
