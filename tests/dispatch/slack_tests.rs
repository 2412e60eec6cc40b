//! Integration tests for an integration binding the full catalog.

use crate::dispatch::helpers::{SlackIntegration, slack};
use chatops_dispatch::command::{
    domain::{CommandInput, CommandName},
    services::CommandDispatcher,
};
use rstest::rstest;

#[rstest]
#[case("help", CommandName::Help)]
#[case("", CommandName::Help)]
#[case("docs", CommandName::Help)]
#[case("link", CommandName::LinkIdentity)]
#[case("unlink", CommandName::UnlinkIdentity)]
#[case("link team #ops", CommandName::LinkTeam)]
#[case("unlink team #ops", CommandName::UnlinkTeam)]
fn slack_routes_each_catalog_command(
    slack: SlackIntegration,
    #[case] raw: &str,
    #[case] expected: CommandName,
) {
    let dispatcher = CommandDispatcher::for_integration(&slack);

    let reply = dispatcher
        .dispatch_text(raw)
        .expect("catalog command should match");

    assert_eq!(reply.command, expected);
}

#[rstest]
fn link_team_receives_channel_argument(slack: SlackIntegration) {
    let dispatcher = CommandDispatcher::for_integration(&slack);

    let reply = dispatcher
        .dispatch_text("LINK TEAM #ops")
        .expect("link team should match");

    assert_eq!(reply.text, "Linked #ops");
    assert_eq!(slack.linked_channels(), ["#ops"]);
}

#[rstest]
fn link_and_unlink_team_share_state(slack: SlackIntegration) {
    let dispatcher = CommandDispatcher::for_integration(&slack);

    for raw in ["link team #ops", "link team #eng", "unlink team #ops"] {
        dispatcher
            .dispatch_text(raw)
            .expect("team command should match");
    }

    assert_eq!(slack.linked_channels(), ["#eng"]);
}

#[rstest]
fn unknown_slack_command_surfaces_not_matched(slack: SlackIntegration) {
    let dispatcher = CommandDispatcher::for_integration(&slack);

    let error = dispatcher
        .dispatch_text("deploy prod")
        .expect_err("deploy is not a catalog command");

    assert_eq!(
        error.unmatched_input(),
        &CommandInput::new("deploy", ["prod"])
    );
    assert!(slack.linked_channels().is_empty());
}

#[rstest]
fn dispatcher_serves_concurrent_requests(slack: SlackIntegration) {
    let dispatcher = CommandDispatcher::for_integration(&slack);

    std::thread::scope(|scope| {
        let shared = &dispatcher;
        let handles: Vec<_> = (0..4)
            .map(|index| {
                scope.spawn(move || {
                    shared
                        .dispatch_text(&format!("link team #room-{index}"))
                        .map(|reply| reply.command)
                })
            })
            .collect();
        for handle in handles {
            let outcome = handle.join().expect("dispatch thread should not panic");
            assert_eq!(outcome, Ok(CommandName::LinkTeam));
        }
    });

    let mut channels = slack.linked_channels();
    channels.sort();
    assert_eq!(channels, ["#room-0", "#room-1", "#room-2", "#room-3"]);
}
