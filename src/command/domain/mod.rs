//! Domain types for command routing.
//!
//! Pure values with no infrastructure dependencies: tokenized input, slugs,
//! and the fixed command catalog.

mod catalog;
mod error;
mod input;
mod slug;

pub use catalog::{
    CommandCatalog, CommandName, HELP, LINK_IDENTITY, LINK_TEAM, LogicalCommand, UNLINK_IDENTITY,
    UNLINK_TEAM,
};
pub use error::{CommandCatalogError, CommandNotMatchedError, DispatchConfigError};
pub use input::CommandInput;
pub use slug::CommandSlug;
