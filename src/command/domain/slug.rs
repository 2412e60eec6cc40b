//! Case-insensitive command name patterns.

use std::fmt;

use super::CommandInput;

/// One way of invoking a command, such as `help` or `link team`.
///
/// Tokens are stored lower-cased. The empty slug stands for the default
/// command and matches only blank input.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CommandSlug {
    tokens: Vec<String>,
}

impl CommandSlug {
    /// Builds a slug by splitting `text` on whitespace and lower-casing each
    /// token.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatops_dispatch::command::domain::CommandSlug;
    ///
    /// let slug = CommandSlug::from_text(" Link  Team ");
    /// assert_eq!(slug.tokens(), ["link", "team"]);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Returns the lower-cased tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the number of tokens in the slug.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` for the empty slug.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Checks whether the input starts with exactly this slug's tokens.
    ///
    /// Comparison is case-insensitive. An input with fewer tokens than the
    /// slug never matches.
    #[must_use]
    pub fn matches(&self, input: &CommandInput) -> bool {
        if self.tokens.is_empty() {
            return input.is_empty();
        }

        let mut input_tokens = input.all_tokens();
        self.tokens.iter().all(|expected| {
            input_tokens
                .next()
                .is_some_and(|token| token.to_lowercase() == *expected)
        })
    }
}

impl From<&str> for CommandSlug {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl fmt::Display for CommandSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl fmt::Debug for CommandSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandSlug({:?})", self.tokens.join(" "))
    }
}
