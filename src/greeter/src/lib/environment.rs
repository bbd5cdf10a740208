use greeter_core::clock::Clock;

pub trait Environment {
    fn get_logger(&self) -> &slog::Logger;

    /// The timestamp provider used for the closing line.
    fn get_clock(&self) -> &dyn Clock;
}

pub struct EnvironmentImpl {
    logger: slog::Logger,
    clock: Box<dyn Clock>,
}

impl EnvironmentImpl {
    /// Logs are discarded until a logger is supplied with `with_logger`.
    pub fn new(clock: impl Clock + 'static) -> Self {
        EnvironmentImpl {
            logger: slog::Logger::root(slog::Discard, slog::o!()),
            clock: Box::new(clock),
        }
    }

    pub fn with_logger(mut self, logger: slog::Logger) -> Self {
        self.logger = logger;
        self
    }
}

impl Environment for EnvironmentImpl {
    fn get_logger(&self) -> &slog::Logger {
        &self.logger
    }

    fn get_clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
