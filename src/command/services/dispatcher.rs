//! Longest-slug-first command dispatcher.

use std::cmp::Reverse;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::{DispatchConfig, UnmatchedPolicy};
use crate::command::domain::{
    CommandInput, CommandName, CommandNotMatchedError, CommandSlug, DispatchConfigError,
    LogicalCommand,
};
use crate::command::ports::{CommandBinding, CommandHandler, MessagingIntegration};

/// The command and slug that won matching, with the stripped input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    command: &'static LogicalCommand,
    slug: CommandSlug,
    input: CommandInput,
}

impl ResolvedCommand {
    /// Returns the matched command.
    #[must_use]
    pub const fn command(&self) -> &'static LogicalCommand {
        self.command
    }

    /// Returns the slug that matched.
    #[must_use]
    pub const fn slug(&self) -> &CommandSlug {
        &self.slug
    }

    /// Returns the input with the slug's tokens stripped from the arguments.
    #[must_use]
    pub const fn input(&self) -> &CommandInput {
        &self.input
    }
}

struct Candidate<R> {
    command: &'static LogicalCommand,
    slug: CommandSlug,
    handler: CommandHandler<R>,
}

/// Routes command input to the handlers of one messaging integration.
///
/// Every slug of every bound command is a candidate. Candidates are tried
/// longest slug first so that `link team` wins over `link`; slugs of equal
/// length keep binding order, canonical slug before aliases.
pub struct CommandDispatcher<R> {
    bindings: Vec<CommandBinding<R>>,
    candidates: Vec<Candidate<R>>,
    fallback: Option<CommandBinding<R>>,
}

impl<R> CommandDispatcher<R> {
    /// Creates a dispatcher that rejects unmatched input.
    #[must_use]
    pub fn new(bindings: impl IntoIterator<Item = CommandBinding<R>>) -> Self {
        let collected: Vec<CommandBinding<R>> = bindings.into_iter().collect();
        let candidates = expand_candidates(&collected);
        debug!(
            commands = collected.len(),
            candidates = candidates.len(),
            "built command dispatcher"
        );
        Self {
            bindings: collected,
            candidates,
            fallback: None,
        }
    }

    /// Creates a dispatcher with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchConfigError::FallbackNotBound`] when the configured
    /// fallback command has no binding.
    pub fn with_config(
        bindings: impl IntoIterator<Item = CommandBinding<R>>,
        config: &DispatchConfig,
    ) -> Result<Self, DispatchConfigError> {
        let mut dispatcher = Self::new(bindings);
        if let UnmatchedPolicy::FallbackTo(name) = config.unmatched {
            let fallback = dispatcher
                .binding_for(name)
                .cloned()
                .ok_or(DispatchConfigError::FallbackNotBound(name))?;
            dispatcher.fallback = Some(fallback);
        }
        Ok(dispatcher)
    }

    /// Creates a dispatcher from an integration's handler set.
    #[must_use]
    pub fn for_integration<I>(integration: &I) -> Self
    where
        I: MessagingIntegration<R> + ?Sized,
    {
        Self::new(integration.command_handlers())
    }

    /// Returns the bound commands in binding order.
    pub fn commands(&self) -> impl Iterator<Item = &'static LogicalCommand> + '_ {
        self.bindings.iter().map(CommandBinding::command)
    }

    /// Finds the winning command without invoking its handler.
    #[must_use]
    pub fn resolve(&self, input: &CommandInput) -> Option<ResolvedCommand> {
        self.find_candidate(input).map(|candidate| ResolvedCommand {
            command: candidate.command,
            slug: candidate.slug.clone(),
            input: input.adjust(&candidate.slug),
        })
    }

    /// Invokes the handler of the first matching slug and returns its result.
    ///
    /// Whatever the handler returns, including its own errors, is passed
    /// through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CommandNotMatchedError`] with the original input when no
    /// slug matches and no fallback is configured.
    pub fn dispatch(&self, input: &CommandInput) -> Result<R, CommandNotMatchedError> {
        if let Some(candidate) = self.find_candidate(input) {
            let arg_input = input.adjust(&candidate.slug);
            debug!(
                command = %candidate.command.name(),
                slug = %candidate.slug,
                args = arg_input.args().len(),
                "command matched"
            );
            return Ok((candidate.handler)(arg_input));
        }

        if let Some(fallback) = &self.fallback {
            info!(
                command = %fallback.command().name(),
                input = %input,
                "no command matched, using fallback"
            );
            return Ok(fallback.invoke(input.clone()));
        }

        debug!(input = %input, "no command matched");
        Err(CommandNotMatchedError::new(input.clone()))
    }

    /// Parses raw text and dispatches it.
    ///
    /// # Errors
    ///
    /// Returns [`CommandNotMatchedError`] under the same conditions as
    /// [`Self::dispatch`].
    pub fn dispatch_text(&self, raw: &str) -> Result<R, CommandNotMatchedError> {
        self.dispatch(&CommandInput::parse(raw))
    }

    fn find_candidate(&self, input: &CommandInput) -> Option<&Candidate<R>> {
        self.candidates
            .iter()
            .find(|candidate| candidate.slug.matches(input))
    }

    fn binding_for(&self, name: CommandName) -> Option<&CommandBinding<R>> {
        self.bindings
            .iter()
            .find(|binding| binding.command().name() == name)
    }
}

impl<R> fmt::Debug for CommandDispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slugs: Vec<&CommandSlug> = self
            .candidates
            .iter()
            .map(|candidate| &candidate.slug)
            .collect();
        f.debug_struct("CommandDispatcher")
            .field("candidates", &slugs)
            .field(
                "fallback",
                &self.fallback.as_ref().map(|binding| binding.command().name()),
            )
            .finish_non_exhaustive()
    }
}

fn expand_candidates<R>(bindings: &[CommandBinding<R>]) -> Vec<Candidate<R>> {
    let mut candidates: Vec<Candidate<R>> = bindings
        .iter()
        .flat_map(|binding| {
            binding
                .command()
                .all_command_slugs()
                .map(move |slug| Candidate {
                    command: binding.command(),
                    slug,
                    handler: Arc::clone(binding.handler()),
                })
        })
        .collect();
    // Stable, so equal lengths keep binding order.
    candidates.sort_by_key(|candidate| Reverse(candidate.slug.token_count()));
    candidates
}
