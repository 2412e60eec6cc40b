//! Command routing for messaging integrations.
//!
//! Turns free text from a chat platform into a call to the handler of the
//! best-matching catalog command.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values ([`domain::CommandInput`], [`domain::CommandSlug`], [`domain::LogicalCommand`])
//! - **Ports**: The [`ports::MessagingIntegration`] trait each integration implements
//! - **Services**: The [`services::CommandDispatcher`] that matches and invokes handlers
//!
//! # Example
//!
//! ```
//! use chatops_dispatch::command::domain::{CommandInput, LINK_IDENTITY, LINK_TEAM};
//! use chatops_dispatch::command::ports::CommandBinding;
//! use chatops_dispatch::command::services::CommandDispatcher;
//!
//! let dispatcher = CommandDispatcher::new([
//!     CommandBinding::new(&LINK_IDENTITY, |input: CommandInput| {
//!         format!("identity {}", input.args().join(" "))
//!     }),
//!     CommandBinding::new(&LINK_TEAM, |input: CommandInput| {
//!         format!("team {}", input.args().join(" "))
//!     }),
//! ]);
//!
//! let reply = dispatcher
//!     .dispatch(&CommandInput::parse("link team #ops"))
//!     .expect("link team should match");
//! assert_eq!(reply, "team #ops");
//! ```

pub mod domain;
pub mod ports;
pub mod services;
