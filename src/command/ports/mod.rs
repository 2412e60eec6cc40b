//! Port trait definitions for command routing.
//!
//! Integrations implement these ports to hand their handler sets to the
//! dispatcher.

pub mod integration;

pub use integration::{CommandBinding, CommandHandler, MessagingIntegration};
