//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use pretty_logger::prelude::*;
//! use pretty_logger::{info, raw, success};
//!
//! let logger = Logger::new("deploy");
//!
//! raw!(logger, "{}", "=".repeat(30));
//! info!(logger, "Deploying {} services", 4);
//! success!(logger, "Deployed to {}", "staging");
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let logger = Logger::new("docs");
/// use pretty_logger::log;
/// log!(logger, LogLevel::INFO, "Simple message");
/// log!(logger, LogLevel::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::DEBUG, $($arg)+)
    };
}

/// Log a verbose-level message.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let logger = Logger::new("docs");
/// # logger.set_min_level(LogLevel::VERBOSE);
/// use pretty_logger::verbose;
/// verbose!(logger, "Cache hit ratio: {:.2}", 0.93);
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::VERBOSE, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::INFO, $($arg)+)
    };
}

/// Log a raw message: no level, timestamp or color.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let logger = Logger::new("docs");
/// use pretty_logger::raw;
/// raw!(logger, "{:-^40}", " summary ");
/// ```
#[macro_export]
macro_rules! raw {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::RAW, $($arg)+)
    };
}

/// Log a success-level message.
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::SUCCESS, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::WARNING, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::ERROR, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let logger = Logger::new("docs");
/// use pretty_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::CRITICAL, $($arg)+)
    };
}
