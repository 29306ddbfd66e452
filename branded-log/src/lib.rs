//! Logging for the branded validator crates.
//!
//! A small level-filtered logger driven by environment variables. Records
//! go to stderr as JSON lines by default, as compact text lines, or through
//! the `log` crate so a host application's logger receives them.
//!
//! # Usage
//!
//! ```rust
//! use branded_log::{debug, trace};
//!
//! trace!("compiling rule table");
//! debug!(target: "branded::validation", "rejected {} input", "email");
//! ```
//!
//! # Environment Variables
//!
//! - `BRANDED_DEBUG=1` - Enable debug logging
//! - `BRANDED_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `BRANDED_LOG_FORMAT=json|compact|facade` - Set output format
//! - `BRANDED_LOG_TIMESTAMPS=1|0` - Include timestamps in text output

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

// ============================================================================
// Log Levels
// ============================================================================

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Per-call detail (every rejected input)
    Trace = 0,
    /// Diagnostic detail
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Nothing is emitted
    Off = 5,
}

impl Level {
    /// Upper-case level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }

    /// Matching level of the `log` facade, `None` for [`Level::Off`].
    fn to_facade(self) -> Option<::log::Level> {
        match self {
            Level::Trace => Some(::log::Level::Trace),
            Level::Debug => Some(::log::Level::Debug),
            Level::Info => Some(::log::Level::Info),
            Level::Warn => Some(::log::Level::Warn),
            Level::Error => Some(::log::Level::Error),
            Level::Off => None,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Single text line: `HH:MM:SS L target: message`
    Compact,
    /// One JSON object per line
    Json,
    /// Hand records to the `log` crate
    Facade,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            "facade" | "log" => Ok(Format::Facade),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

// ============================================================================
// Global Configuration
// ============================================================================

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(|| {
    let config = LogConfig::from_env();
    DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
    LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);
    config
});

/// Logging configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum level emitted
    pub level: Level,
    pub format: Format,
    /// Whether text output carries a timestamp
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            timestamps: true,
        }
    }
}

impl LogConfig {
    /// Build a config from `BRANDED_*` environment variables. The global
    /// switches are seeded from the first config only.
    pub fn from_env() -> Self {
        let debug = env::var("BRANDED_DEBUG")
            .map(|v| flag(&v))
            .unwrap_or(false);

        let level = env::var("BRANDED_LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = env::var("BRANDED_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Format::Json);

        let timestamps = env::var("BRANDED_LOG_TIMESTAMPS")
            .map(|v| flag(&v))
            .unwrap_or(true);

        Self {
            debug,
            level,
            format,
            timestamps,
        }
    }
}

fn flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

// ============================================================================
// Public API
// ============================================================================

/// Read the environment now instead of on the first record.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// Check if debug logging is enabled.
#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Check if a log level is enabled.
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Current minimum level.
pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Override the minimum level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Enable or disable debug mode at runtime.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

/// The configuration read from the environment.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Log Output
// ============================================================================

/// Emit one record. Called by the macros after the level check.
#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if !is_level_enabled(level) {
        return;
    }

    let config = config();
    match config.format {
        Format::Compact => log_compact(level, target, message, config),
        Format::Json => log_json(level, target, message),
        Format::Facade => log_facade(level, target, message),
    }
}

fn log_compact(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%H:%M:%S%.3f"));
    }

    let _ = write!(stderr, "{} ", level.as_str().chars().next().unwrap_or('?'));

    if !target.is_empty() {
        let _ = write!(stderr, "{}: ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

#[cfg(feature = "json")]
fn log_json(level: Level, target: &str, message: &str) {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Record<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let record = Record {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    if let Ok(json) = serde_json::to_string(&record) {
        eprintln!("{}", json);
    }
}

#[cfg(not(feature = "json"))]
fn log_json(level: Level, target: &str, message: &str) {
    eprintln!(
        r#"{{"timestamp":"{}","level":"{}","target":"{}","message":"{}"}}"#,
        chrono::Utc::now().to_rfc3339(),
        level.as_str(),
        escape_json(target),
        escape_json(message)
    );
}

#[cfg(not(feature = "json"))]
fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

fn log_facade(level: Level, target: &str, message: &str) {
    if let Some(level) = level.to_facade() {
        ::log::log!(target: target, level, "{}", message);
    }
}

// ============================================================================
// Macros
// ============================================================================

/// Log a trace message.
///
/// Only enabled when `BRANDED_LOG_LEVEL=trace`.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a debug message.
///
/// Enabled by `BRANDED_DEBUG=1` or `BRANDED_LOG_LEVEL=debug`.
///
/// # Example
///
/// ```rust
/// use branded_log::debug;
///
/// let kind = "uuid";
/// debug!("{} rule compiled", kind);
/// debug!(target: "branded::rules", "rule table ready");
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, module_path!(), &format!($($arg)+));
        }
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("TRACE".parse::<Level>(), Ok(Level::Trace));
        assert_eq!("warning".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("none".parse::<Level>(), Ok(Level::Off));
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert_eq!("Compact".parse::<Format>(), Ok(Format::Compact));
        assert_eq!("log".parse::<Format>(), Ok(Format::Facade));
        assert!("pretty".parse::<Format>().is_err());
    }

    #[test]
    fn test_level_roundtrips_through_atomic() {
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Off,
        ] {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }

    #[test]
    fn test_flag_parsing() {
        assert!(flag("1"));
        assert!(flag("TRUE"));
        assert!(!flag("0"));
        assert!(!flag("yes"));
    }

    #[test]
    fn test_runtime_overrides() {
        let original_level = current_level();
        let original_debug = is_debug_enabled();

        set_level(Level::Error);
        assert_eq!(current_level(), Level::Error);
        assert!(!is_level_enabled(Level::Warn));
        assert!(is_level_enabled(Level::Error));
        assert!(!is_level_enabled(Level::Off));

        // reading the environment again leaves runtime overrides alone
        let _ = LogConfig::from_env();
        assert_eq!(current_level(), Level::Error);
        assert_eq!(is_debug_enabled(), original_debug);

        set_debug(true);
        assert!(is_debug_enabled());
        assert_eq!(current_level(), Level::Debug);

        set_debug(original_debug);
        set_level(original_level);
    }

    #[test]
    fn test_macros_compile() {
        trace!("trace message");
        debug!("debug message");
        info!("info message");
        warn!("warn message");
        error!("error message");

        debug!(target: "branded::test", "with target {}", 1);
        trace!(target: "branded::test", "with target");
    }
}
