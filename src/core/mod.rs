//! Core logger types and traits

pub mod ansi;
pub mod appender;
pub mod color;
pub mod error;
pub mod formatter;
pub mod level_registry;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod timestamp;

pub use ansi::strip_ansi;
pub use appender::Appender;
pub use color::{color_prefix, RESET};
pub use error::{LoggerError, Result};
pub use formatter::{format, FormatterConfig, LineTemplate, DEFAULT_TEMPLATE};
pub use level_registry::{level_for_name, level_name, register_level, LevelRegistry};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, BANNER_PADDING};
pub use metrics::LoggerMetrics;
pub use registry::get_logger;
pub use timestamp::TimestampFormat;
