// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error says what went wrong, why it might have happened, and how to
//! fix it.

use std::fmt;
use std::path::Path;
use tk_core::{ConfigError, Demo};
use tk_engine::EngineError;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct TkError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TkError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for TkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for TkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl TkError {
    /// The configuration could not be read, parsed or validated.
    pub fn invalid_config(path: Option<&Path>, err: ConfigError) -> Self {
        let location = match path {
            Some(path) => format!("'{}'", path.display()),
            None => "the built-in defaults".to_string(),
        };
        TkError::new(format!("Configuration from {} is not usable", location))
            .with_context(err.to_string())
            .with_suggestion("Show the defaults: tk config")
            .with_suggestion("Durations use humantime syntax, e.g. \"100ms\" or \"7s\"")
            .with_source(err)
    }

    /// The demo name did not match any known demo.
    pub fn unknown_demo(name: &str) -> Self {
        let known: Vec<&str> = Demo::ALL.iter().map(|d| d.name()).collect();
        TkError::new(format!("Unknown demo '{}'", name))
            .with_context(format!("Known demos: {}", known.join(", ")))
            .with_suggestion("List demos with descriptions: tk demos")
    }

    /// The demo's primitives or roles could not be created.
    pub fn demo_start_failed(demo: Demo, err: EngineError) -> Self {
        TkError::new(format!("Demo '{}' failed to start", demo))
            .with_context(err.to_string())
            .with_suggestion("Check the configuration: tk config")
            .with_source(err)
    }

    /// A demo task stopped on its own.
    pub fn demo_failed(demo: Demo, err: EngineError) -> Self {
        TkError::new(format!("Demo '{}' stopped unexpectedly", demo))
            .with_context(err.to_string())
            .with_suggestion(format!("Rerun with debug logs: RUST_LOG=debug tk run {}", demo))
            .with_source(err)
    }

    /// The Ctrl-C handler could not be installed.
    pub fn signal_unavailable(err: std::io::Error) -> Self {
        TkError::new("Cannot listen for Ctrl-C")
            .with_context(err.to_string())
            .with_suggestion("Bound the run instead: tk run <demo> --duration 30s")
            .with_source(err)
    }

    /// The log file could not be created.
    pub fn log_file_unusable(path: &Path, reason: impl fmt::Display) -> Self {
        TkError::new(format!("Cannot write logs to '{}'", path.display()))
            .with_context(reason.to_string())
            .with_suggestion("Pick a writable path, or omit --log-file to log to stderr")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TkError::new("Something went wrong")
            .with_context("First context")
            .with_context("Second context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn test_unknown_demo_lists_known_demos() {
        let output = TkError::unknown_demo("semaphore").to_string();
        assert!(output.contains("'semaphore'"));
        assert!(output.contains("handoff, mutex, queue"));
        assert!(output.contains("tk demos"));
    }

    #[test]
    fn test_invalid_config_keeps_source() {
        let err = TkError::invalid_config(
            Some(Path::new("tk.toml")),
            ConfigError::Invalid("queue.capacity must be at least 1".to_string()),
        );
        let output = err.to_string();
        assert!(output.contains("'tk.toml'"));
        assert!(output.contains("queue.capacity"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
