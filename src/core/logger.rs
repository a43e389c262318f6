//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    registry,
};
use parking_lot::RwLock;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

/// Width added to the message length for the bars around a success banner
pub const BANNER_PADDING: usize = 40;

thread_local! {
    /// Loggers this thread is currently dispatching through
    static DISPATCHING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks a logger as dispatching on the current thread until dropped
struct DispatchGuard(usize);

impl DispatchGuard {
    /// `None` if this thread is already inside `logger`'s dispatch
    fn enter(logger: &Logger) -> Option<Self> {
        let id = logger as *const Logger as usize;
        DISPATCHING.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&id) {
                return None;
            }
            active.push(id);
            Some(DispatchGuard(id))
        })
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        DISPATCHING.with(|active| active.borrow_mut().retain(|&id| id != self.0));
    }
}

pub struct Logger {
    name: String,
    min_level: RwLock<LogLevel>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    /// Per-level delivered counts and the dropped count
    metrics: LoggerMetrics,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        super::level_registry::init();
        Self {
            name: name.into(),
            min_level: RwLock::new(LogLevel::INFO),
            appenders: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Process log entry with per-appender panic isolation
    ///
    /// One failing appender never prevents the others from receiving the
    /// entry. Returns `true` if any appender failed.
    fn process_sync(
        appenders: &mut [Box<dyn Appender>],
        entry: &LogEntry,
        metrics: &LoggerMetrics,
    ) -> bool {
        if appenders.is_empty() {
            return false;
        }

        let mut has_error = false;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(entry)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                        idx,
                        appender.name(),
                        e
                    );
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx, panic_msg
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            metrics.record_dropped();
        } else {
            metrics.record_logged(entry.level);
        }

        has_error
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    #[inline]
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled_for(level) {
            return;
        }

        self.dispatch(LogEntry::new(level, message));
    }

    /// Log a template whose `{}` slots are filled from `args`
    pub fn log_args<I, T>(&self, level: LogLevel, template: impl Into<String>, args: I)
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        if !self.is_enabled_for(level) {
            return;
        }

        self.dispatch(LogEntry::new(level, template).with_args(args));
    }

    /// Log a pre-built entry under this logger's name
    pub fn log_entry(&self, entry: LogEntry) {
        if !self.is_enabled_for(entry.level) {
            return;
        }

        self.dispatch(entry);
    }

    /// Deliver `entry` to every appender
    ///
    /// The appender list stays locked for the whole delivery. A record logged
    /// through this same logger from inside one of its appenders is dropped
    /// with a diagnostic rather than waiting on that lock forever.
    fn dispatch(&self, entry: LogEntry) {
        let Some(_guard) = DispatchGuard::enter(self) else {
            eprintln!(
                "[LOGGER ERROR] Logger '{}' was called from one of its own appenders; \
                 record dropped",
                self.name
            );
            self.metrics.record_dropped();
            return;
        };

        let entry = entry.with_logger_name(self.name.as_str());
        let mut appenders = self.appenders.write();
        Self::process_sync(&mut appenders, &entry, &self.metrics);
    }

    /// Get the number of dropped logs
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    /// Per-level delivery counters
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush every appender
    ///
    /// Must not be called from inside one of this logger's own appenders.
    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::DEBUG, message);
    }

    #[inline]
    pub fn verbose(&self, message: impl Into<String>) {
        self.log(LogLevel::VERBOSE, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::INFO, message);
    }

    /// Log the message alone, with no level, timestamp or color
    #[inline]
    pub fn raw(&self, message: impl Into<String>) {
        self.log(LogLevel::RAW, message);
    }

    #[inline]
    pub fn success(&self, message: impl Into<String>) {
        self.log(LogLevel::SUCCESS, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::WARNING, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::ERROR, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::CRITICAL, message);
    }

    /// Log at ERROR with `error` and its source chain attached
    pub fn exception(&self, message: impl Into<String>, error: &(dyn Error + 'static)) {
        if !self.is_enabled_for(LogLevel::ERROR) {
            return;
        }

        self.dispatch(LogEntry::new(LogLevel::ERROR, message).with_error(error));
    }

    /// Log `message` at SUCCESS between two RAW bars of `=`
    ///
    /// Each bar is 40 characters longer than the message.
    ///
    /// # Example
    ///
    /// ```
    /// use pretty_logger::Logger;
    ///
    /// let logger = Logger::new("build");
    /// logger.success_banner("Build complete");
    /// ```
    pub fn success_banner(&self, message: &str) {
        let bar = "=".repeat(message.chars().count() + BANNER_PADDING);
        self.raw(bar.as_str());
        self.success(message);
        self.raw(bar);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("root")
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger '{}' shutting down with {} dropped logs (drop rate: {:.2}%)",
                self.name,
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use pretty_logger::prelude::*;
///
/// let logger = Logger::builder("app")
///     .min_level(LogLevel::VERBOSE)
///     .appender(ConsoleAppender::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    name: String,
    min_level: LogLevel,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: LogLevel::INFO,
            appenders: Vec::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Build a standalone Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name);
        logger.set_min_level(self.min_level);
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }

    /// Build the Logger and install it in the process-wide registry
    ///
    /// Fails if a logger with the same name is already registered.
    pub fn register(self) -> Result<Arc<Logger>> {
        registry::register_logger(self.build())
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingAppender {
        count: Arc<AtomicUsize>,
    }

    impl Appender for CountingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            self.count.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    struct BrokenAppender {
        panic: bool,
    }

    impl Appender for BrokenAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            if self.panic {
                panic!("appender exploded");
            }
            Err(LoggerError::writer("sink closed"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn counting_logger(level: LogLevel) -> (Logger, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let logger = Logger::builder("test")
            .min_level(level)
            .appender(CountingAppender {
                count: Arc::clone(&count),
            })
            .build();
        (logger, count)
    }

    #[test]
    fn test_min_level_filtering() {
        let (logger, count) = counting_logger(LogLevel::INFO);
        logger.debug("hidden");
        logger.verbose("hidden");
        logger.info("shown");
        logger.raw("shown");
        logger.success("shown");
        assert_eq!(count.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_verbose_enabled_below_info() {
        let (logger, count) = counting_logger(LogLevel::VERBOSE);
        logger.debug("hidden");
        logger.verbose("shown");
        assert_eq!(count.load(Ordering::Relaxed), 1);
        assert!(logger.is_enabled_for(LogLevel::VERBOSE));
        assert!(!logger.is_enabled_for(LogLevel::DEBUG));
    }

    #[test]
    fn test_success_banner_emits_three_entries() {
        let (logger, count) = counting_logger(LogLevel::INFO);
        logger.success_banner("Build complete");
        assert_eq!(count.load(Ordering::Relaxed), 3);
        assert_eq!(logger.metrics().logged(LogLevel::RAW), 2);
        assert_eq!(logger.metrics().logged(LogLevel::SUCCESS), 1);
        assert_eq!(logger.metrics().total_logged(), 3);
    }

    #[test]
    fn test_no_appenders_counts_nothing() {
        let logger = Logger::new("empty");
        logger.success("nowhere to go");
        assert_eq!(logger.metrics().total_logged(), 0);
        assert_eq!(logger.dropped_count(), 0);
    }

    struct ReentrantAppender {
        logger_name: &'static str,
        count: Arc<AtomicUsize>,
    }

    impl Appender for ReentrantAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            self.count.fetch_add(1, Ordering::Relaxed);
            registry::get_logger(self.logger_name).info("from inside the appender");
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "reentrant"
        }
    }

    #[test]
    fn test_logging_from_own_appender_does_not_deadlock() {
        let count = Arc::new(AtomicUsize::new(0));
        let logger = Logger::builder("logger.reentrant")
            .appender(ReentrantAppender {
                logger_name: "logger.reentrant",
                count: Arc::clone(&count),
            })
            .register()
            .expect("register");

        logger.info("outer");

        assert_eq!(count.load(Ordering::Relaxed), 1);
        assert_eq!(logger.metrics().logged(LogLevel::INFO), 1);
        assert_eq!(logger.dropped_count(), 1);

        logger.info("again");
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_failing_appender_isolated() {
        let (logger, count) = counting_logger(LogLevel::INFO);
        logger.add_appender(Box::new(BrokenAppender { panic: false }));
        logger.add_appender(Box::new(BrokenAppender { panic: true }));

        logger.info("still delivered");

        assert_eq!(count.load(Ordering::Relaxed), 1);
        assert_eq!(logger.dropped_count(), 1);
    }

    #[test]
    fn test_builder_default_level() {
        let logger = Logger::builder("defaults").build();
        assert_eq!(logger.min_level(), LogLevel::INFO);
        assert_eq!(logger.name(), "defaults");
    }
}
