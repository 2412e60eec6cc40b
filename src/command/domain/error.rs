//! Error types for command matching and catalog lookup.

use thiserror::Error;

use super::{CommandInput, CommandName};

/// No bound command slug or alias matched the input.
///
/// Carries the input exactly as it was received so callers can fall back to
/// help text or treat it as a plain message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no command matched input '{unmatched_input}'")]
pub struct CommandNotMatchedError {
    unmatched_input: CommandInput,
}

impl CommandNotMatchedError {
    /// Creates the error for an input that matched nothing.
    #[must_use]
    pub const fn new(unmatched_input: CommandInput) -> Self {
        Self { unmatched_input }
    }

    /// Returns the original, unadjusted input.
    #[must_use]
    pub const fn unmatched_input(&self) -> &CommandInput {
        &self.unmatched_input
    }

    /// Consumes the error and returns the original input.
    #[must_use]
    pub fn into_unmatched_input(self) -> CommandInput {
        self.unmatched_input
    }
}

/// Errors for catalog lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandCatalogError {
    /// The name does not identify any catalog command.
    #[error("unknown command name '{0}'")]
    UnknownCommandName(String),
}

/// Errors raised while building a dispatcher from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchConfigError {
    /// The fallback command has no handler in this dispatcher.
    #[error("fallback command {0} has no bound handler")]
    FallbackNotBound(CommandName),
}
