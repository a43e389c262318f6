//! Render pipeline
//!
//! Turns a [`LogEntry`] into the final text for one sink. A sink picks its
//! [`FormatterConfig`] once, at construction time: colorized for interactive
//! terminals, plain (optionally stripped) for files and pipes.

use super::ansi::strip_ansi;
use super::color::{color_prefix, RESET};
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// The default line layout: `LEVEL:timestamp - message`
pub const DEFAULT_TEMPLATE: &str = "{level}:{timestamp} - {message}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Level,
    LevelNo,
    Timestamp,
    Name,
    Message,
}

impl Placeholder {
    const ALL: [Placeholder; 5] = [
        Placeholder::Level,
        Placeholder::LevelNo,
        Placeholder::Timestamp,
        Placeholder::Name,
        Placeholder::Message,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Placeholder::Level => "level",
            Placeholder::LevelNo => "levelno",
            Placeholder::Timestamp => "timestamp",
            Placeholder::Name => "name",
            Placeholder::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A line template parsed once into literal and placeholder segments
///
/// Known placeholders are `{level}`, `{levelno}`, `{timestamp}`, `{name}` and
/// `{message}`. Anything else in braces is kept as literal text.
///
/// # Examples
///
/// ```
/// use pretty_logger::LineTemplate;
///
/// let template = LineTemplate::parse("[{level}] {name}: {message}");
/// assert_eq!(template.as_str(), "[{level}] {name}: {message}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LineTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl LineTemplate {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
                break;
            };
            let name = &rest[open + 1..close];
            match Placeholder::ALL.into_iter().find(|ph| ph.as_str() == name) {
                Some(placeholder) => {
                    literal.push_str(&rest[..open]);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(placeholder));
                }
                None => literal.push_str(&rest[..=close]),
            }
            rest = &rest[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: template.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn render(&self, entry: &LogEntry, message: &str, timestamp_format: &TimestampFormat) -> String {
        let mut line = String::with_capacity(self.source.len() + message.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Placeholder(Placeholder::Level) => line.push_str(&entry.level.to_string()),
                Segment::Placeholder(Placeholder::LevelNo) => {
                    line.push_str(&entry.level.value().to_string())
                }
                Segment::Placeholder(Placeholder::Timestamp) => {
                    line.push_str(&timestamp_format.format(&entry.timestamp))
                }
                Segment::Placeholder(Placeholder::Name) => line.push_str(&entry.logger_name),
                Segment::Placeholder(Placeholder::Message) => line.push_str(message),
            }
        }
        line
    }
}

impl Default for LineTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl From<String> for LineTemplate {
    fn from(template: String) -> Self {
        Self::parse(&template)
    }
}

impl From<LineTemplate> for String {
    fn from(template: LineTemplate) -> Self {
        template.source
    }
}

impl fmt::Display for LineTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Rendering strategy for one sink
///
/// # Examples
///
/// ```
/// use pretty_logger::{FormatterConfig, TimestampFormat};
///
/// let file_config = FormatterConfig::plain()
///     .with_strip(true)
///     .with_timestamp_format(TimestampFormat::Iso8601);
/// assert!(!file_config.color);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Wrap templated lines in the level's ANSI color
    pub color: bool,
    /// Remove ANSI sequences already present in the message
    pub strip: bool,
    /// Layout for every level except RAW
    pub template: LineTemplate,
    /// Style of the `{timestamp}` placeholder
    pub timestamp_format: TimestampFormat,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::plain()
    }
}

impl FormatterConfig {
    /// Colorized configuration for interactive terminals
    #[must_use]
    pub fn colored() -> Self {
        Self {
            color: true,
            ..Self::plain()
        }
    }

    /// Plain configuration for files and other non-interactive sinks
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            strip: false,
            template: LineTemplate::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Colorized when the sink is a terminal, plain otherwise
    #[must_use]
    pub fn for_sink(is_terminal: bool) -> Self {
        if is_terminal {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: &str) -> Self {
        self.template = LineTemplate::parse(template);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    /// Wrap this config in an Arc for sharing across appenders
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Render `entry` with this configuration
    pub fn format(&self, entry: &LogEntry) -> String {
        format(entry, self)
    }
}

/// Render `entry` for a sink configured by `config`
///
/// Stripping applies to the message alone, before any template or color is
/// added. RAW entries produce just their message (plus exception and stack
/// text) and are never colorized. Other levels go through the line template
/// and are wrapped in their color when `config.color` is set and the level
/// has a color table entry.
pub fn format(entry: &LogEntry, config: &FormatterConfig) -> String {
    let rendered = entry.get_message();
    let message = if config.strip {
        strip_ansi(&rendered)
    } else {
        Cow::Borrowed(rendered.as_str())
    };

    if entry.level == LogLevel::RAW {
        let mut line = message.into_owned();
        entry.append_trailers(&mut line);
        return line;
    }

    let mut line = config
        .template
        .render(entry, &message, &config.timestamp_format);
    entry.append_trailers(&mut line);

    match color_prefix(entry.level).filter(|_| config.color) {
        Some(prefix) => format!("{prefix}{line}{RESET}"),
        None => line,
    }
}
