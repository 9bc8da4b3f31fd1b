// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::CaptureBuffer;
use miette::IntoDiagnostic;
use std::str::FromStr;
use tracing_core::LevelFilter;

/// Name of the environment variable read by [`TracingConfig::try_from_env`]. Accepts
/// the values that [`LevelFilter`] parses, eg: `trace`, `debug`, `off`.
pub const LOG_LEVEL_ENV_VAR: &str = "R3BL_CURSOR_LOG";

/// Configure where the trace events go, and which ones are kept.
///
/// The events that the traversals emit are all at [`tracing::Level::TRACE`], so use
/// [`LevelFilter::TRACE`] to see them.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] to choose which events are kept.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Clone)]
pub enum WriterConfig {
    Stdout,
    Stderr,
    /// Output goes through the test harness, so it is only shown for failing tests.
    TestWriter,
    /// Output goes to an in-memory [`CaptureBuffer`], without ANSI escape sequences.
    Capture(CaptureBuffer),
}

impl std::fmt::Debug for WriterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriterConfig::Stdout => write!(f, "Stdout"),
            WriterConfig::Stderr => write!(f, "Stderr"),
            WriterConfig::TestWriter => write!(f, "TestWriter"),
            WriterConfig::Capture(_) => write!(f, "Capture"),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::Stderr,
            level_filter: LevelFilter::DEBUG,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new(writer_config: WriterConfig, level_filter: LevelFilter) -> Self {
        Self {
            writer_config,
            level_filter,
        }
    }

    /// Every event goes through the test harness.
    #[must_use]
    pub fn new_test_writer() -> Self {
        Self::new(WriterConfig::TestWriter, LevelFilter::TRACE)
    }

    /// Every event goes to `buffer`.
    #[must_use]
    pub fn new_capture(buffer: CaptureBuffer) -> Self {
        Self::new(WriterConfig::Capture(buffer), LevelFilter::TRACE)
    }

    /// Replaces the level filter with the one named by `level`.
    ///
    /// # Errors
    ///
    /// Returns an error if `level` isn't a valid [`LevelFilter`] name.
    pub fn try_with_level(mut self, level: &str) -> miette::Result<Self> {
        self.level_filter = LevelFilter::from_str(level.trim()).into_diagnostic()?;
        Ok(self)
    }

    /// Uses `writer_config`, and the level named by [`LOG_LEVEL_ENV_VAR`] if it is set
    /// (or the default level if it isn't).
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set to something that isn't a valid
    /// [`LevelFilter`] name.
    pub fn try_from_env(writer_config: WriterConfig) -> miette::Result<Self> {
        let it = Self {
            writer_config,
            ..Self::default()
        };
        match std::env::var(LOG_LEVEL_ENV_VAR) {
            Ok(level) => it.try_with_level(&level),
            Err(_) => Ok(it),
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("trace", LevelFilter::TRACE)]
    #[test_case("DEBUG", LevelFilter::DEBUG)]
    #[test_case(" off ", LevelFilter::OFF)]
    fn test_try_with_level(level: &str, expected: LevelFilter) {
        let config = TracingConfig::default().try_with_level(level).unwrap();
        assert_eq!(config.get_level_filter(), expected);
    }

    #[test]
    fn test_try_with_level_rejects_garbage() {
        assert!(TracingConfig::default().try_with_level("loud").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = TracingConfig::default();
        assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(format!("{:?}", config.get_writer_config()), "Stderr");
        assert_eq!(
            TracingConfig::new_test_writer().get_level_filter(),
            LevelFilter::TRACE
        );
    }
}
