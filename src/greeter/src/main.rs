#![allow(special_module_name)]
use crate::lib::diagnosis::diagnose;
use crate::lib::environment::{Environment, EnvironmentImpl};
use crate::lib::error::GreeterResult;
use crate::lib::logger::{create_root_logger, LoggingMode};
use crate::util::error_report::print_error_and_diagnosis;
use clap::{crate_version, ArgAction, Parser};
use greeter_core::clock::SystemClock;
use std::path::PathBuf;

mod lib;
mod util;

/// Introduces a couple of people and tells the time.
#[derive(Parser)]
#[command(name = "greeter", version = crate_version!(), styles = util::clap::style())]
pub struct CliOpts {
    /// Displays detailed information about operations. -vv will generate a very large number of messages.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    quiet: u8,

    /// The logging mode to use. You can log to stderr, a file, or both.
    #[arg(long = "log", env = "GREETER_LOG", default_value = "stderr", value_parser = ["stderr", "tee", "file"])]
    logmode: String,

    /// The file to log to, if logging to a file (see --log).
    #[arg(long, env = "GREETER_LOGFILE")]
    logfile: Option<PathBuf>,
}

impl CliOpts {
    fn verbose_level(&self) -> i64 {
        self.verbose as i64 - self.quiet as i64
    }

    fn logging_mode(&self) -> LoggingMode {
        let logfile = || {
            self.logfile
                .clone()
                .unwrap_or_else(|| PathBuf::from("log.txt"))
        };
        match self.logmode.as_str() {
            "tee" => LoggingMode::Tee(logfile()),
            "file" => LoggingMode::File(logfile()),
            _ => LoggingMode::Stderr,
        }
    }
}

/// Setup a logger with the proper configuration, based on arguments.
fn setup_logging(opts: &CliOpts) -> GreeterResult<slog::Logger> {
    create_root_logger(opts.verbose_level(), opts.logging_mode())
}

fn inner_main() -> GreeterResult {
    let cli_opts = CliOpts::parse();
    let log = setup_logging(&cli_opts)?;

    let env = EnvironmentImpl::new(SystemClock).with_logger(log);

    slog::trace!(
        env.get_logger(),
        "Trace mode enabled. Lots of logs coming up."
    );
    let stdout = std::io::stdout();
    lib::introduction::exec(&env, &mut stdout.lock())
}

fn main() {
    let result = inner_main();
    if let Err(err) = result {
        let error_diagnosis = diagnose(&err);
        print_error_and_diagnosis(&err, error_diagnosis);
        std::process::exit(255);
    }
}
