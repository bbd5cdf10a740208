use crate::lib::diagnosis::DiagnosedError;
use crate::lib::error::GreeterResult;
use anyhow::Context;
use slog::{Drain, Level, Logger};
use std::fs::File;
use std::path::PathBuf;

/// The logging mode to use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoggingMode {
    /// The default mode for logging; output without any decoration, to STDERR.
    Stderr,

    /// Tee logging to a file (in addition to STDERR). This mimics the verbose flag.
    /// So it would be similar to `greeter ... |& tee /some/file.txt`
    Tee(PathBuf),

    /// Output logs to a file only; STDERR stays silent.
    File(PathBuf),
}

/// A Slog formatter that writes to a term decorator.
pub struct GreeterFormat<D>
where
    D: slog_term::Decorator,
{
    decorator: D,
}

impl<D: slog_term::Decorator> GreeterFormat<D> {
    pub fn new(decorator: D) -> GreeterFormat<D> {
        GreeterFormat { decorator }
    }
}

impl<D: slog_term::Decorator> slog::Drain for GreeterFormat<D> {
    type Ok = ();
    type Err = std::io::Error;

    fn log(
        &self,
        record: &slog::Record<'_>,
        values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        self.decorator.with_record(record, values, |decorator| {
            if record.level() <= slog::Level::Warning {
                decorator.start_level()?;
                write!(decorator, "{}: ", record.level().as_str())?;
                // start_whitespace resets to normal coloring after printing the level
                decorator.start_whitespace()?;
            }

            decorator.start_msg()?;
            write!(decorator, "{}", record.msg())?;

            decorator.start_whitespace()?;
            writeln!(decorator)?;

            decorator.flush()?;
            Ok(())
        })
    }
}

/// Create a log drain.
fn create_drain(mode: LoggingMode) -> GreeterResult<Logger> {
    Ok(match mode {
        LoggingMode::Stderr => {
            let decorator = slog_term::TermDecorator::new().stderr().build();
            let drain = GreeterFormat::new(decorator).fuse();
            let async_drain = slog_async::Async::new(drain).build().fuse();
            Logger::root(async_drain, slog::o!())
        }
        LoggingMode::File(out) => {
            let file = File::create(&out)
                .with_context(|| {
                    DiagnosedError::new(
                        format!("The log file {} could not be created.", out.display()),
                        "Pass a writable path with --logfile, or use --log stderr.".to_string(),
                    )
                })
                .with_context(|| format!("Failed to open log file {}.", out.display()))?;
            let decorator = slog_term::PlainDecorator::new(file);
            let drain = slog_term::FullFormat::new(decorator).build().fuse();
            Logger::root(slog_async::Async::new(drain).build().fuse(), slog::o!())
        }
        // A Tee mode is basically 2 drains duplicated.
        LoggingMode::Tee(out) => Logger::root(
            slog::Duplicate::new(
                create_drain(LoggingMode::Stderr)?,
                create_drain(LoggingMode::File(out))?,
            )
            .fuse(),
            slog::o!(),
        ),
    })
}

/// The level matching a verbosity, or None when everything is silenced.
/// Negative levels remove warnings, then errors, then everything.
pub fn log_level(verbose_level: i64) -> Option<Level> {
    match verbose_level {
        -3 => Some(Level::Critical),
        -2 => Some(Level::Error),
        -1 => Some(Level::Warning),
        0 => Some(Level::Info),
        1 => Some(Level::Debug),
        x if x > 0 => Some(Level::Trace),
        _ => None,
    }
}

/// Create a root logger.
/// The verbose_level can be negative, in which case it's a quiet mode which removes warnings,
/// then errors entirely.
pub fn create_root_logger(verbose_level: i64, mode: LoggingMode) -> GreeterResult<Logger> {
    let Some(level) = log_level(verbose_level) else {
        return Ok(Logger::root(slog::Discard, slog::o!()));
    };

    let drain = slog::LevelFilter::new(create_drain(mode)?, level).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Ok(Logger::root(
        drain,
        slog::o!("version" => env!("CARGO_PKG_VERSION")),
    ))
}
