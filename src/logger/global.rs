//! Process-wide logger.
//!
//! `init` is called once from the application's entry point. The first
//! successful call builds the logger over stdout/stderr, installs it as the
//! global `tracing` subscriber and writes the self-test record. Later calls
//! return the same handle.

use std::sync::{Mutex, OnceLock, PoisonError};

use thiserror::Error;
use tracing::dispatcher::SetGlobalDefaultError;

use crate::config::LoggerConfig;
use crate::logger::Logger;

static GLOBAL: OnceLock<Logger> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Errors that can occur while publishing the global logger.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Some other code installed a global `tracing` subscriber first.
    #[error("a global tracing subscriber is already installed")]
    SubscriberAlreadySet(#[source] SetGlobalDefaultError),
}

/// Initialize from `LOG_LEVEL`.
pub fn init() -> Result<&'static Logger, LoggerError> {
    init_with(LoggerConfig::from_env())
}

/// Initialize from an explicit configuration.
///
/// If the global logger already exists it is returned unchanged and
/// `config` is ignored.
pub fn init_with(config: LoggerConfig) -> Result<&'static Logger, LoggerError> {
    if let Some(logger) = GLOBAL.get() {
        return Ok(already_initialized(logger, &config));
    }

    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(logger) = GLOBAL.get() {
        return Ok(already_initialized(logger, &config));
    }

    let logger = Logger::new(config);
    tracing::dispatcher::set_global_default(logger.dispatch().clone())
        .map_err(LoggerError::SubscriberAlreadySet)?;

    let logger = GLOBAL.get_or_init(|| logger);
    logger.announce();
    Ok(logger)
}

/// The global logger, if `init` has succeeded.
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}

fn already_initialized(logger: &'static Logger, requested: &LoggerConfig) -> &'static Logger {
    if logger.config() != requested {
        tracing::debug!(
            requested = %requested.level,
            active = %logger.threshold(),
            "Logger already initialized; keeping existing configuration"
        );
    }
    logger
}
