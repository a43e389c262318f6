//! Process-wide level name registry
//!
//! Every logger in the process resolves level names through one registry.
//! It is built lazily on first use and comes up with the standard names and
//! the VERBOSE/RAW/SUCCESS levels already in place, so concurrent first use
//! from several threads observes the same complete table.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, LazyLock};

static REGISTRY: LazyLock<RwLock<LevelRegistry>> =
    LazyLock::new(|| RwLock::new(LevelRegistry::with_builtin_levels()));

/// Extra names accepted when parsing; they claim the name but not the number
const ALIASES: [(&str, LogLevel); 2] = [
    ("WARN", LogLevel::WARNING),
    ("FATAL", LogLevel::CRITICAL),
];

/// Bidirectional mapping between level numbers and display names
#[derive(Debug, Default)]
pub struct LevelRegistry {
    names: BTreeMap<LogLevel, Arc<str>>,
    levels: HashMap<String, LogLevel>,
}

impl LevelRegistry {
    /// An empty registry with no names at all
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the standard levels plus VERBOSE, RAW and SUCCESS
    pub fn with_builtin_levels() -> Self {
        let mut registry = Self::new();
        let builtin = [
            (LogLevel::DEBUG, "DEBUG"),
            (LogLevel::VERBOSE, "VERBOSE"),
            (LogLevel::INFO, "INFO"),
            (LogLevel::RAW, "RAW"),
            (LogLevel::SUCCESS, "SUCCESS"),
            (LogLevel::WARNING, "WARNING"),
            (LogLevel::ERROR, "ERROR"),
            (LogLevel::CRITICAL, "CRITICAL"),
        ];
        for (level, name) in builtin {
            registry.insert(level, name);
        }
        for (alias, level) in ALIASES {
            registry.levels.insert(alias.to_string(), level);
        }
        registry
    }

    fn insert(&mut self, level: LogLevel, name: &str) {
        self.names.insert(level, Arc::from(name));
        self.levels.insert(name.to_uppercase(), level);
    }

    /// Register `name` for `level`
    ///
    /// Registering a pair that is already present is a no-op. Reusing either
    /// the number or the name for a different partner is a conflict.
    pub fn register(&mut self, level: LogLevel, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoggerError::config("LevelRegistry", "level name must not be empty"));
        }

        if let Some(existing) = self.names.get(&level) {
            if existing.as_ref() == name {
                return Ok(());
            }
            return Err(LoggerError::level_conflict(
                level.value().to_string(),
                existing.as_ref(),
                name,
            ));
        }

        if let Some(existing) = self.levels.get(&name.to_uppercase()) {
            return Err(LoggerError::level_conflict(
                name,
                existing.value().to_string(),
                level.value().to_string(),
            ));
        }

        self.insert(level, name);
        Ok(())
    }

    pub fn name(&self, level: LogLevel) -> Option<Arc<str>> {
        self.names.get(&level).cloned()
    }

    /// Case-insensitive reverse lookup
    pub fn level(&self, name: &str) -> Option<LogLevel> {
        self.levels.get(&name.trim().to_uppercase()).copied()
    }

    /// All registered levels, ascending
    pub fn levels(&self) -> Vec<LogLevel> {
        self.names.keys().copied().collect()
    }
}

/// Force the one-time setup of the process-wide registry
///
/// Safe to call any number of times from any thread.
pub fn init() {
    LazyLock::force(&REGISTRY);
}

/// Register a level name in the process-wide registry
pub fn register_level(level: LogLevel, name: &str) -> Result<()> {
    REGISTRY.write().register(level, name)
}

pub fn level_name(level: LogLevel) -> Option<Arc<str>> {
    REGISTRY.read().name(level)
}

pub fn level_for_name(name: &str) -> Option<LogLevel> {
    REGISTRY.read().level(name)
}

pub fn registered_levels() -> Vec<LogLevel> {
    REGISTRY.read().levels()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels_present() {
        let registry = LevelRegistry::with_builtin_levels();
        assert_eq!(registry.name(LogLevel::VERBOSE).as_deref(), Some("VERBOSE"));
        assert_eq!(registry.name(LogLevel::RAW).as_deref(), Some("RAW"));
        assert_eq!(registry.name(LogLevel::SUCCESS).as_deref(), Some("SUCCESS"));
        assert_eq!(registry.level("success"), Some(LogLevel::SUCCESS));
        assert_eq!(registry.levels().len(), 8);
    }

    #[test]
    fn test_reregistration_is_idempotent() {
        let mut registry = LevelRegistry::with_builtin_levels();
        registry.register(LogLevel::RAW, "RAW").unwrap();
        registry.register(LogLevel::RAW, "RAW").unwrap();
        assert_eq!(registry.levels().len(), 8);
    }

    #[test]
    fn test_number_conflict() {
        let mut registry = LevelRegistry::with_builtin_levels();
        let err = registry.register(LogLevel::RAW, "PLAIN").unwrap_err();
        assert!(matches!(err, LoggerError::LevelConflict { .. }));
        assert_eq!(registry.name(LogLevel::RAW).as_deref(), Some("RAW"));
    }

    #[test]
    fn test_name_conflict() {
        let mut registry = LevelRegistry::with_builtin_levels();
        let err = registry.register(LogLevel::new(25), "success").unwrap_err();
        assert!(matches!(err, LoggerError::LevelConflict { .. }));
        assert!(registry.name(LogLevel::new(25)).is_none());
    }

    #[test]
    fn test_aliases_resolve_and_cannot_be_claimed() {
        let mut registry = LevelRegistry::with_builtin_levels();
        assert_eq!(registry.level("warn"), Some(LogLevel::WARNING));
        assert_eq!(registry.level("Fatal"), Some(LogLevel::CRITICAL));

        let err = registry.register(LogLevel::new(31), "WARN").unwrap_err();
        assert!(matches!(err, LoggerError::LevelConflict { .. }));
        assert_eq!(registry.level("warn"), Some(LogLevel::WARNING));
        assert!(registry.name(LogLevel::new(31)).is_none());
        assert_eq!(registry.levels().len(), 8);
    }

    #[test]
    fn test_register_new_level() {
        let mut registry = LevelRegistry::new();
        registry.register(LogLevel::new(5), "TRACE").unwrap();
        assert_eq!(registry.level("trace"), Some(LogLevel::new(5)));
        assert!(registry.register(LogLevel::new(6), "  ").is_err());
    }

    #[test]
    fn test_global_registry() {
        init();
        init();
        assert!(register_level(LogLevel::SUCCESS, "SUCCESS").is_ok());
        assert!(register_level(LogLevel::SUCCESS, "DONE").is_err());
        assert_eq!(level_for_name("verbose"), Some(LogLevel::VERBOSE));
        assert!(registered_levels().contains(&LogLevel::RAW));
    }
}
