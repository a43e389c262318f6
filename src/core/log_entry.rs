//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message template; `{}` slots are filled from `args` in order
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub logger_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_info: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            args: Vec::new(),
            timestamp: Utc::now(),
            logger_name: String::new(),
            exception: None,
            stack_info: None,
        }
    }

    pub fn with_args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.args = args.into_iter().map(|arg| arg.to_string()).collect();
        self
    }

    pub fn with_logger_name(mut self, name: impl Into<String>) -> Self {
        self.logger_name = name.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    /// Attach an error and its `source()` chain as exception text
    pub fn with_error(self, error: &(dyn Error + 'static)) -> Self {
        let mut text = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            let _ = write!(text, "\nCaused by: {}", cause);
            source = cause.source();
        }
        self.with_exception(text)
    }

    pub fn with_stack_info(mut self, stack_info: impl Into<String>) -> Self {
        self.stack_info = Some(stack_info.into());
        self
    }

    /// Render the message template against the positional arguments
    ///
    /// Without arguments the template is returned as is. Surplus `{}` slots
    /// stay literal and surplus arguments are ignored.
    pub fn get_message(&self) -> String {
        if self.args.is_empty() {
            return self.message.clone();
        }

        let mut rendered = String::with_capacity(self.message.len());
        let mut args = self.args.iter();
        let mut rest = self.message.as_str();
        while let Some(pos) = rest.find("{}") {
            rendered.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => rendered.push_str(arg),
                None => rendered.push_str("{}"),
            }
            rest = &rest[pos + 2..];
        }
        rendered.push_str(rest);
        rendered
    }

    /// Append exception and stack text, each on its own line
    pub(crate) fn append_trailers(&self, line: &mut String) {
        for trailer in [&self.exception, &self.stack_info].into_iter().flatten() {
            if trailer.is_empty() {
                continue;
            }
            if !line.is_empty() && !line.ends_with('\n') {
                line.push('\n');
            }
            line.push_str(trailer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_without_args_is_verbatim() {
        let entry = LogEntry::new(LogLevel::INFO, "literal {} braces");
        assert_eq!(entry.get_message(), "literal {} braces");
    }

    #[test]
    fn test_message_args_substituted_in_order() {
        let entry = LogEntry::new(LogLevel::INFO, "{} of {} done").with_args([3, 5]);
        assert_eq!(entry.get_message(), "3 of 5 done");
    }

    #[test]
    fn test_message_arg_mismatch() {
        let entry = LogEntry::new(LogLevel::INFO, "{} and {}").with_args(["one"]);
        assert_eq!(entry.get_message(), "one and {}");

        let entry = LogEntry::new(LogLevel::INFO, "only {}").with_args(["a", "b"]);
        assert_eq!(entry.get_message(), "only a");
    }

    #[test]
    fn test_message_keeps_newlines() {
        let entry = LogEntry::new(LogLevel::RAW, "line one\nline two");
        assert_eq!(entry.get_message(), "line one\nline two");
    }

    #[test]
    fn test_with_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
        let err = crate::core::LoggerError::io_operation("loading config", "cannot read", io_err);
        let entry = LogEntry::new(LogLevel::ERROR, "startup failed").with_error(&err);

        let exception = entry.exception.unwrap();
        assert!(exception.starts_with("IO error while loading config: cannot read"));
        assert!(exception.contains("\nCaused by: config.toml missing"));
    }

    #[test]
    fn test_append_trailers() {
        let entry = LogEntry::new(LogLevel::ERROR, "boom")
            .with_exception("Traceback")
            .with_stack_info("Stack");
        let mut line = String::from("ERROR - boom");
        entry.append_trailers(&mut line);
        assert_eq!(line, "ERROR - boom\nTraceback\nStack");
    }
}
