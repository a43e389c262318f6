//! Process-wide named logger registry

use super::error::{LoggerError, Result};
use super::logger::Logger;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

static LOGGERS: LazyLock<RwLock<HashMap<String, Arc<Logger>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Get the logger registered under `name`, creating it on first request
///
/// Every call with the same name returns the same instance.
///
/// # Example
///
/// ```
/// use pretty_logger::get_logger;
/// use std::sync::Arc;
///
/// let first = get_logger("docs.get_logger");
/// let second = get_logger("docs.get_logger");
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub fn get_logger(name: &str) -> Arc<Logger> {
    if let Some(logger) = LOGGERS.read().get(name) {
        return Arc::clone(logger);
    }

    let mut loggers = LOGGERS.write();
    Arc::clone(
        loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Logger::new(name))),
    )
}

/// Install a fully configured logger under its own name
pub(crate) fn register_logger(logger: Logger) -> Result<Arc<Logger>> {
    let mut loggers = LOGGERS.write();
    if loggers.contains_key(logger.name()) {
        return Err(LoggerError::config(
            "LoggerBuilder",
            format!("logger '{}' is already registered", logger.name()),
        ));
    }

    let logger = Arc::new(logger);
    loggers.insert(logger.name().to_string(), Arc::clone(&logger));
    Ok(logger)
}
