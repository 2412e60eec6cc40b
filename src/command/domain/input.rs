//! Tokenized command text received from a messaging platform.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CommandSlug;

/// Command text split into a head token and ordered argument tokens.
///
/// # Examples
///
/// ```
/// use chatops_dispatch::command::domain::CommandInput;
///
/// let input = CommandInput::parse("  link   team #ops ");
/// assert_eq!(input.head(), "link");
/// assert_eq!(input.args(), ["team", "#ops"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandInput {
    head: String,
    #[serde(default)]
    args: Vec<String>,
}

impl CommandInput {
    /// Creates an input from an explicit head and argument list.
    #[must_use]
    pub fn new(head: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            head: head.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses raw platform text by splitting on whitespace.
    ///
    /// The first token becomes the head and the rest become arguments. Blank
    /// text yields an empty head and no arguments.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut tokens = raw.split_whitespace();
        let head = tokens.next().unwrap_or_default().to_owned();
        let args = tokens.map(str::to_owned).collect();
        Self { head, args }
    }

    /// Returns the first token.
    #[must_use]
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Returns the tokens following the head.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns `true` when the input carries no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.args.is_empty()
    }

    /// Yields the head followed by every argument.
    ///
    /// Each call starts a fresh iterator over the same tokens.
    pub fn all_tokens(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.head.as_str()).chain(self.args.iter().map(String::as_str))
    }

    /// Removes the tokens that belong to a matched slug from the arguments.
    ///
    /// The returned head holds the matched command text as it appeared in the
    /// input, and the arguments hold every token after it. The empty slug
    /// consumes nothing.
    ///
    /// The slug must already match this input; anything else is a caller bug.
    #[must_use]
    pub fn adjust(&self, slug: &CommandSlug) -> Self {
        debug_assert!(
            slug.matches(self),
            "adjust called with non-matching slug {slug:?} for {self:?}"
        );
        if slug.is_empty() {
            return self.clone();
        }

        let token_count = slug.token_count();
        let head = self
            .all_tokens()
            .take(token_count)
            .collect::<Vec<_>>()
            .join(" ");
        let args = self
            .args
            .iter()
            .skip(token_count.saturating_sub(1))
            .cloned()
            .collect();
        Self { head, args }
    }
}

impl fmt::Display for CommandInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.all_tokens().collect::<Vec<_>>().join(" "))
    }
}
