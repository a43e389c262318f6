//! # Pretty Logger
//!
//! A logging layer with three extra severity levels and terminal-aware
//! formatting.
//!
//! ## Features
//!
//! - **Extra Levels**: VERBOSE below INFO, RAW and SUCCESS just above it
//! - **Raw Output**: RAW entries print the bare message, ideal for banners
//! - **Colors Where They Belong**: colored lines on terminals, plain text in files
//! - **ANSI Stripping**: escape sequences removed from messages bound for plain sinks
//!
//! ## Example
//!
//! ```
//! use pretty_logger::prelude::*;
//!
//! let logger = Logger::builder("build")
//!     .min_level(LogLevel::VERBOSE)
//!     .appender(ConsoleAppender::new())
//!     .build();
//!
//! logger.verbose("resolving dependencies");
//! logger.success_banner("Build complete");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        get_logger, strip_ansi, Appender, FormatterConfig, LineTemplate, LogEntry, LogLevel,
        Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    color_prefix, format, get_logger, level_for_name, level_name, register_level, strip_ansi,
    Appender, FormatterConfig, LevelRegistry, LineTemplate, LogEntry, LogLevel, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Result, TimestampFormat, BANNER_PADDING,
    DEFAULT_TEMPLATE, RESET,
};
