//! Log level definitions
//!
//! Levels are plain numbers so that custom levels can be slotted in between
//! the standard ones. The numbering follows the conventional
//! 10/20/30/40/50 scheme, which leaves room directly below and above INFO.

use super::level_registry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(u8);

impl LogLevel {
    pub const DEBUG: LogLevel = LogLevel(10);
    pub const INFO: LogLevel = LogLevel(20);
    pub const WARNING: LogLevel = LogLevel(30);
    pub const ERROR: LogLevel = LogLevel(40);
    pub const CRITICAL: LogLevel = LogLevel(50);

    /// Chatty detail, one step below INFO
    pub const VERBOSE: LogLevel = LogLevel(Self::INFO.0 - 1);
    /// Message-only output that bypasses the line template
    pub const RAW: LogLevel = LogLevel(Self::INFO.0 + 1);
    pub const SUCCESS: LogLevel = LogLevel(Self::RAW.0 + 1);

    #[must_use]
    pub const fn new(value: u8) -> Self {
        LogLevel(value)
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl From<u8> for LogLevel {
    fn from(value: u8) -> Self {
        LogLevel(value)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match level_registry::level_name(*self) {
            Some(name) => f.pad(&name),
            None => f.pad(&format!("Level {}", self.0)),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Ok(LogLevel(value));
        }

        level_registry::level_for_name(trimmed)
            .ok_or_else(|| format!("Invalid log level: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_level_ordering() {
        assert!(LogLevel::DEBUG < LogLevel::VERBOSE);
        assert!(LogLevel::VERBOSE < LogLevel::INFO);
        assert!(LogLevel::INFO < LogLevel::RAW);
        assert!(LogLevel::RAW < LogLevel::SUCCESS);
        assert!(LogLevel::SUCCESS < LogLevel::WARNING);
    }

    #[test]
    fn test_custom_level_values() {
        assert_eq!(LogLevel::VERBOSE.value(), LogLevel::INFO.value() - 1);
        assert_eq!(LogLevel::RAW.value(), LogLevel::INFO.value() + 1);
        assert_eq!(LogLevel::SUCCESS.value(), LogLevel::RAW.value() + 1);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LogLevel::VERBOSE.to_string(), "VERBOSE");
        assert_eq!(LogLevel::RAW.to_string(), "RAW");
        assert_eq!(LogLevel::SUCCESS.to_string(), "SUCCESS");
        assert_eq!(LogLevel::WARNING.to_string(), "WARNING");
        assert_eq!(LogLevel::new(7).to_string(), "Level 7");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:8}|", LogLevel::INFO), "INFO    |");
    }

    #[test]
    fn test_parse() {
        assert_eq!("success".parse::<LogLevel>().unwrap(), LogLevel::SUCCESS);
        assert_eq!("Verbose".parse::<LogLevel>().unwrap(), LogLevel::VERBOSE);
        assert_eq!("RAW".parse::<LogLevel>().unwrap(), LogLevel::RAW);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::WARNING);
        assert_eq!("fatal".parse::<LogLevel>().unwrap(), LogLevel::CRITICAL);
        assert_eq!("35".parse::<LogLevel>().unwrap(), LogLevel::new(35));
        assert!("LOUD".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::INFO);
    }
}
