//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

use crate::command::domain::CommandName;

/// What the dispatcher does when no bound slug matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "command")]
pub enum UnmatchedPolicy {
    /// Report the input as a `CommandNotMatchedError`.
    #[default]
    Reject,
    /// Call the named command's handler with the original input.
    FallbackTo(CommandName),
}

/// Configuration for a command dispatcher.
///
/// # Examples
///
/// ```
/// use chatops_dispatch::command::domain::CommandName;
/// use chatops_dispatch::command::services::{DispatchConfig, UnmatchedPolicy};
///
/// let config = DispatchConfig::default();
/// assert_eq!(config.unmatched, UnmatchedPolicy::Reject);
///
/// let help = DispatchConfig::help_fallback();
/// assert_eq!(help.unmatched, UnmatchedPolicy::FallbackTo(CommandName::Help));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Handling of input that matches no bound command.
    #[serde(default)]
    pub unmatched: UnmatchedPolicy,
}

impl DispatchConfig {
    /// Routes unmatched input to the `HELP` handler.
    #[must_use]
    pub const fn help_fallback() -> Self {
        Self {
            unmatched: UnmatchedPolicy::FallbackTo(CommandName::Help),
        }
    }
}
