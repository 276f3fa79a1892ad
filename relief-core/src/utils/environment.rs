use std::sync::Arc;

/// A logger type which is called with messages produced by the planning pipeline.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences planning behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates an instance of `Environment` which writes log messages to stdout.
    pub fn new_with_stdout_logger() -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")))
    }

    /// Logs a message using the environment logger.
    pub fn log(&self, msg: &str) {
        (self.logger)(msg)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|_: &str| {}))
    }
}
