//! Integration tests for handlers that return futures.

use std::future::Future;
use std::pin::Pin;

use chatops_dispatch::command::{
    domain::{CommandInput, LINK_IDENTITY, LINK_TEAM},
    ports::CommandBinding,
    services::CommandDispatcher,
};
use rstest::rstest;

type BoxedReply = Pin<Box<dyn Future<Output = Result<String, String>> + Send>>;

async fn link_team(input: CommandInput) -> Result<String, String> {
    tokio::task::yield_now().await;
    input
        .args()
        .first()
        .map(|channel| format!("linked {channel}"))
        .ok_or_else(|| "a channel is required".to_owned())
}

fn async_dispatcher() -> CommandDispatcher<BoxedReply> {
    CommandDispatcher::new([
        CommandBinding::new(&LINK_TEAM, |input| -> BoxedReply {
            Box::pin(link_team(input))
        }),
        CommandBinding::new(&LINK_IDENTITY, |_input| -> BoxedReply {
            Box::pin(async { Ok("identity".to_owned()) })
        }),
    ])
}

#[rstest]
#[tokio::test]
async fn async_handler_future_is_returned_unchanged() {
    let dispatcher = async_dispatcher();

    let future = dispatcher
        .dispatch_text("link team #ops")
        .expect("link team should match");

    assert_eq!(future.await, Ok("linked #ops".to_owned()));
}

#[rstest]
#[tokio::test]
async fn async_handler_errors_surface_when_awaited() {
    let dispatcher = async_dispatcher();

    let future = dispatcher
        .dispatch_text("link team")
        .expect("link team should match");

    assert_eq!(future.await, Err("a channel is required".to_owned()));
}

#[rstest]
#[tokio::test]
async fn unmatched_input_fails_before_any_future_runs() {
    let dispatcher = async_dispatcher();

    let error = dispatcher
        .dispatch_text("unlink team #ops")
        .err()
        .expect("unlink is not bound");

    assert_eq!(error.unmatched_input().head(), "unlink");
}
