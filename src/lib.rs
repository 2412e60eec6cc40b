//! Chatops dispatch: command routing for chat-platform bot integrations.
//!
//! This crate decides which command handler should process a piece of text
//! received from a messaging platform, strips the command tokens, and hands
//! the remaining arguments to that handler.
//!
//! # Modules
//!
//! - [`command`]: Tokenization, the command catalog, and the dispatcher

pub mod command;
