//! Console appender implementation
//!
//! ERROR and above go to stderr, everything else to stdout. Each stream gets
//! its own formatter, so redirecting one of them does not leak escape codes
//! into the file while the other stays colorized.

use crate::core::{Appender, FormatterConfig, LogEntry, LogLevel, Result, TimestampFormat};
use std::io::IsTerminal;

pub struct ConsoleAppender {
    formatter: FormatterConfig,
    error_formatter: FormatterConfig,
}

impl ConsoleAppender {
    /// Colorized per stream, wherever that stream is a terminal and the
    /// environment allows color
    ///
    /// `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` are honoured.
    pub fn new() -> Self {
        Self::with_stream_colors(Self::supports_color(), Self::stderr_supports_color())
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self::with_stream_colors(use_colors, use_colors)
    }

    pub fn with_stream_colors(stdout_colors: bool, stderr_colors: bool) -> Self {
        Self {
            formatter: FormatterConfig::for_sink(stdout_colors),
            error_formatter: FormatterConfig::for_sink(stderr_colors),
        }
    }

    fn color_enabled(stream: &impl IsTerminal) -> bool {
        stream.is_terminal() && colored::control::SHOULD_COLORIZE.should_colorize()
    }

    /// Whether stdout can show colors
    pub fn supports_color() -> bool {
        Self::color_enabled(&std::io::stdout())
    }

    /// Whether stderr can show colors
    pub fn stderr_supports_color() -> bool {
        Self::color_enabled(&std::io::stderr())
    }

    /// Replace the formatter configuration of both streams
    ///
    /// # Example
    ///
    /// ```
    /// use pretty_logger::appenders::ConsoleAppender;
    /// use pretty_logger::FormatterConfig;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_formatter(FormatterConfig::colored().with_template("{level} {message}"));
    /// ```
    #[must_use]
    pub fn with_formatter(mut self, formatter: FormatterConfig) -> Self {
        self.error_formatter = formatter.clone();
        self.formatter = formatter;
        self
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use pretty_logger::appenders::ConsoleAppender;
    /// use pretty_logger::TimestampFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.error_formatter.timestamp_format = format.clone();
        self.formatter.timestamp_format = format;
        self
    }

    /// Formatter for the stdout route
    pub fn formatter(&self) -> &FormatterConfig {
        &self.formatter
    }

    /// Formatter for the stderr route (ERROR and above)
    pub fn error_formatter(&self) -> &FormatterConfig {
        &self.error_formatter
    }

    fn goes_to_stderr(level: LogLevel) -> bool {
        level >= LogLevel::ERROR
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        if Self::goes_to_stderr(entry.level) {
            eprintln!("{}", self.error_formatter.format(entry));
        } else {
            println!("{}", self.formatter.format(entry));
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
