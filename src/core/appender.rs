//! Appender trait for log output destinations
//!
//! An appender is a sink. It owns the formatting strategy chosen for that
//! sink and writes each rendered entry.

use super::{error::Result, log_entry::LogEntry};

/// A log output destination
///
/// `append` runs while the owning logger holds its appender list locked. A
/// record logged through that same logger from inside `append` is dropped
/// with a diagnostic, and calling the logger's `flush` from there blocks.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
