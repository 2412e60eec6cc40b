//! The fixed catalog of commands shared by every messaging integration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CommandCatalogError, CommandSlug};

/// Stable identity of a logical command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandName {
    /// Show usage help.
    Help,
    /// Link a chat user to an account.
    LinkIdentity,
    /// Remove a chat user's account link.
    UnlinkIdentity,
    /// Link a chat channel to a team.
    LinkTeam,
    /// Remove a chat channel's team link.
    UnlinkTeam,
}

impl CommandName {
    /// Returns the stable screaming-snake name, e.g. `LINK_TEAM`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Help => "HELP",
            Self::LinkIdentity => "LINK_IDENTITY",
            Self::UnlinkIdentity => "UNLINK_IDENTITY",
            Self::LinkTeam => "LINK_TEAM",
            Self::UnlinkTeam => "UNLINK_TEAM",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = CommandCatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CommandCatalog::all()
            .iter()
            .map(|command| command.name())
            .find(|name| name.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| CommandCatalogError::UnknownCommandName(value.to_owned()))
    }
}

/// A named command with one canonical slug and any number of aliases.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct LogicalCommand {
    name: CommandName,
    command_text: &'static str,
    aliases: &'static [&'static str],
}

impl LogicalCommand {
    const fn new(
        name: CommandName,
        command_text: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            command_text,
            aliases,
        }
    }

    /// Returns the command identity.
    #[must_use]
    pub const fn name(&self) -> CommandName {
        self.name
    }

    /// Returns the canonical slug.
    #[must_use]
    pub fn command_slug(&self) -> CommandSlug {
        CommandSlug::from_text(self.command_text)
    }

    /// Returns the alias slugs in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = CommandSlug> + '_ {
        self.aliases.iter().map(|alias| CommandSlug::from_text(alias))
    }

    /// Returns the canonical slug followed by every alias.
    pub fn all_command_slugs(&self) -> impl Iterator<Item = CommandSlug> + '_ {
        std::iter::once(self.command_slug()).chain(self.aliases())
    }
}

/// Usage help. The empty alias makes it the default for blank input.
pub static HELP: LogicalCommand =
    LogicalCommand::new(CommandName::Help, "help", &["", "support", "docs"]);
/// Link a chat user to an account.
pub static LINK_IDENTITY: LogicalCommand =
    LogicalCommand::new(CommandName::LinkIdentity, "link", &[]);
/// Remove a chat user's account link.
pub static UNLINK_IDENTITY: LogicalCommand =
    LogicalCommand::new(CommandName::UnlinkIdentity, "unlink", &[]);
/// Link a chat channel to a team.
pub static LINK_TEAM: LogicalCommand =
    LogicalCommand::new(CommandName::LinkTeam, "link team", &[]);
/// Remove a chat channel's team link.
pub static UNLINK_TEAM: LogicalCommand =
    LogicalCommand::new(CommandName::UnlinkTeam, "unlink team", &[]);

static MESSAGING_INTEGRATION_COMMANDS: [&LogicalCommand; 5] =
    [&HELP, &LINK_IDENTITY, &UNLINK_IDENTITY, &LINK_TEAM, &UNLINK_TEAM];

/// Read-only lookup over the command table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandCatalog;

impl CommandCatalog {
    /// Returns every command in declaration order.
    #[must_use]
    pub fn all() -> &'static [&'static LogicalCommand] {
        &MESSAGING_INTEGRATION_COMMANDS
    }

    /// Returns the command with the given identity.
    #[must_use]
    pub fn find(name: CommandName) -> &'static LogicalCommand {
        match name {
            CommandName::Help => &HELP,
            CommandName::LinkIdentity => &LINK_IDENTITY,
            CommandName::UnlinkIdentity => &UNLINK_IDENTITY,
            CommandName::LinkTeam => &LINK_TEAM,
            CommandName::UnlinkTeam => &UNLINK_TEAM,
        }
    }

    /// Looks a command up by its stable name, ignoring ASCII case.
    #[must_use]
    pub fn find_by_name(name: &str) -> Option<&'static LogicalCommand> {
        name.parse().ok().map(Self::find)
    }
}
