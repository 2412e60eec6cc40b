//! Messaging integration port.
//!
//! Each chat platform integration exposes the commands it supports and the
//! callback that handles each one.

use std::fmt;
use std::sync::Arc;

use crate::command::domain::{CommandInput, LogicalCommand};

/// Shared handler callback producing an integration-specific response.
pub type CommandHandler<R> = Arc<dyn Fn(CommandInput) -> R + Send + Sync>;

/// A catalog command bound to the handler that serves it.
pub struct CommandBinding<R> {
    command: &'static LogicalCommand,
    handler: CommandHandler<R>,
}

impl<R> CommandBinding<R> {
    /// Binds a handler closure to a catalog command.
    #[must_use]
    pub fn new<F>(command: &'static LogicalCommand, handler: F) -> Self
    where
        F: Fn(CommandInput) -> R + Send + Sync + 'static,
    {
        Self {
            command,
            handler: Arc::new(handler),
        }
    }

    /// Binds an already shared handler to a catalog command.
    #[must_use]
    pub const fn from_shared(command: &'static LogicalCommand, handler: CommandHandler<R>) -> Self {
        Self { command, handler }
    }

    /// Returns the bound command.
    #[must_use]
    pub const fn command(&self) -> &'static LogicalCommand {
        self.command
    }

    /// Returns the shared handler.
    #[must_use]
    pub const fn handler(&self) -> &CommandHandler<R> {
        &self.handler
    }

    /// Calls the handler with an input whose command tokens are stripped.
    pub fn invoke(&self, input: CommandInput) -> R {
        (self.handler)(input)
    }
}

impl<R> Clone for CommandBinding<R> {
    fn clone(&self) -> Self {
        Self {
            command: self.command,
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<R> fmt::Debug for CommandBinding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandBinding")
            .field("command", &self.command.name())
            .finish_non_exhaustive()
    }
}

/// Port implemented by every messaging integration.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Bind only catalog commands the platform actually supports
/// - List bindings in a stable order, since equal-length slugs are tried in
///   binding order
/// - Provide handlers that are safe to call from several requests at once
pub trait MessagingIntegration<R> {
    /// Returns the integration's command bindings.
    fn command_handlers(&self) -> Vec<CommandBinding<R>>;
}
