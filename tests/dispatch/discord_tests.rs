//! Integration tests for an integration binding a catalog subset.

use crate::dispatch::helpers::{DiscordIntegration, discord};
use chatops_dispatch::command::{
    domain::{CommandName, DispatchConfigError},
    ports::MessagingIntegration,
    services::{CommandDispatcher, DispatchConfig, UnmatchedPolicy},
};
use rstest::rstest;

#[rstest]
fn team_commands_are_not_bound(discord: DiscordIntegration) {
    let dispatcher = CommandDispatcher::for_integration(&discord);

    let reply = dispatcher
        .dispatch_text("link team #ops")
        .expect("link still matches the identity command");

    assert_eq!(reply.command, CommandName::LinkIdentity);
}

#[rstest]
fn unmatched_input_falls_back_to_help(discord: DiscordIntegration) {
    let dispatcher =
        CommandDispatcher::with_config(discord.command_handlers(), &DispatchConfig::help_fallback())
            .expect("help is bound");

    let reply = dispatcher
        .dispatch_text("what can you do")
        .expect("fallback should answer");

    assert_eq!(reply.command, CommandName::Help);
    assert_eq!(reply.text, "Unknown command: what can you do");
}

#[rstest]
fn blank_message_gets_help_without_fallback(discord: DiscordIntegration) {
    let dispatcher = CommandDispatcher::for_integration(&discord);

    let reply = dispatcher.dispatch_text("   ").expect("blank input is help");

    assert_eq!(reply.text, "Here is what I can do");
}

#[rstest]
fn fallback_to_unbound_command_is_rejected(discord: DiscordIntegration) {
    let config = DispatchConfig {
        unmatched: UnmatchedPolicy::FallbackTo(CommandName::LinkTeam),
    };

    let error = CommandDispatcher::with_config(discord.command_handlers(), &config)
        .expect_err("discord does not bind link team");

    assert_eq!(
        error,
        DispatchConfigError::FallbackNotBound(CommandName::LinkTeam)
    );
}
