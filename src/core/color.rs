//! Level color table
//!
//! Maps each colorized level to the escape prefix that starts its line.
//! RAW is deliberately absent: raw lines are never wrapped.

use super::log_level::LogLevel;
use colored::Color;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Resets all attributes
pub const RESET: &str = "\x1b[0m";

/// The one palette: level, foreground color, bold
const PALETTE: [(LogLevel, Color, bool); 7] = [
    (LogLevel::DEBUG, Color::BrightMagenta, false),
    (LogLevel::VERBOSE, Color::Blue, false),
    (LogLevel::INFO, Color::White, false),
    (LogLevel::SUCCESS, Color::Green, false),
    (LogLevel::WARNING, Color::Yellow, false),
    (LogLevel::ERROR, Color::Red, false),
    (LogLevel::CRITICAL, Color::Red, true),
];

static COLOR_TABLE: LazyLock<HashMap<LogLevel, String>> = LazyLock::new(|| {
    PALETTE
        .iter()
        .map(|&(level, color, bold)| (level, fg_prefix(color, bold)))
        .collect()
});

fn fg_prefix(color: Color, bold: bool) -> String {
    if bold {
        format!("\x1b[1;{}m", color.to_fg_str())
    } else {
        format!("\x1b[{}m", color.to_fg_str())
    }
}

/// The escape prefix for `level`, if the level is colorized
pub fn color_prefix(level: LogLevel) -> Option<&'static str> {
    COLOR_TABLE.get(&level).map(String::as_str)
}
