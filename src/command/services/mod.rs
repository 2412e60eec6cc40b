//! Application services for command routing.

mod config;
mod dispatcher;

pub use config::{DispatchConfig, UnmatchedPolicy};
pub use dispatcher::{CommandDispatcher, ResolvedCommand};
