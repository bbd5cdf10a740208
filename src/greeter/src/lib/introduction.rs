use crate::lib::environment::Environment;
use crate::lib::error::GreeterResult;
use anyhow::Context;
use greeter_core::person::{Person, GREETING_KEY};
use slog::{debug, trace};
use std::io::Write;

/// Introduces Rinat and Dinara, greets, has Rinat grow a year older and tells the time.
pub fn exec(env: &dyn Environment, out: &mut dyn Write) -> GreeterResult {
    let log = env.get_logger();

    let mut rinat = Person::new("Rinat", 38);
    debug!(log, "Introducing {}", rinat.name; "age" => rinat.age);
    writeln!(out, "It's me {}", rinat).context("Failed to write introduction.")?;

    let dinara = Person::new("Dinara", 38);
    debug!(log, "Introducing {}", dinara.name; "age" => dinara.age);
    writeln!(out, "It's me, {} hi", dinara).context("Failed to write introduction.")?;

    let greeting = rinat.greet();
    trace!(log, "{} greets", rinat.name; "entries" => greeting.len());
    let hello = greeting
        .get(GREETING_KEY)
        .map(String::as_str)
        .unwrap_or_default();
    writeln!(out, "{}", hello).context("Failed to write greeting.")?;

    let age = rinat.increment_age();
    debug!(log, "{} is a year older", rinat.name; "age" => age);
    writeln!(out, "{}", age).context("Failed to write age.")?;

    let now = env
        .get_clock()
        .now()
        .context("Failed to read the current time.")?;
    trace!(log, "Clock read"; "now" => &now);
    writeln!(out, "Now is {}, year", now).context("Failed to write the current time.")?;

    out.flush().context("Failed to flush output.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::diagnosis::diagnose;
    use crate::lib::environment::EnvironmentImpl;
    use greeter_core::clock::{Clock, FixedClock};
    use greeter_core::error::clock::ClockError;
    use proptest::prelude::*;
    use std::io;

    fn run(env: &dyn Environment) -> String {
        let mut out = Vec::new();
        exec(env, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_five_lines_in_order() {
        let env = EnvironmentImpl::new(FixedClock::new("2024"));
        assert_eq!(
            run(&env),
            "It's me {Rinat 38}\n\
             It's me, {Dinara 38} hi\n\
             Hello\n\
             39\n\
             Now is 2024, year\n"
        );
    }

    #[test]
    fn logging_does_not_reach_output() {
        let log = slog::Logger::root(slog::Discard, slog::o!("version" => "test"));
        let env = EnvironmentImpl::new(FixedClock::new("2024")).with_logger(log);
        assert_eq!(run(&env).lines().count(), 5);
    }

    struct BrokenClock;

    impl Clock for BrokenClock {
        fn now(&self) -> Result<String, ClockError> {
            Err(ClockError::FormatTimeFailed(
                time::error::Format::InvalidComponent("year"),
            ))
        }
    }

    #[test]
    fn clock_failure_is_fatal_after_four_lines() {
        let env = EnvironmentImpl::new(BrokenClock);
        let mut out = Vec::new();
        let err = exec(&env, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Failed to read the current time.");
        assert!(diagnose(&err).0.is_some());
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_output_is_reported() {
        let env = EnvironmentImpl::new(FixedClock::new("2024"));
        let err = exec(&env, &mut ClosedPipe).unwrap_err();
        assert_eq!(err.to_string(), "Failed to write introduction.");
        assert!(diagnose(&err).0.unwrap().contains("closed"));
    }

    proptest! {
        #[test]
        fn last_line_embeds_timestamp(now in "[0-9A-Za-z :-]{0,32}") {
            let env = EnvironmentImpl::new(FixedClock::new(now.clone()));
            let output = run(&env);
            let expected = format!("Now is {}, year", now);
            prop_assert_eq!(output.lines().last(), Some(expected.as_str()));
        }
    }
}
