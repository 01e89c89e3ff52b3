//! Command implementations
//!
//! Each submodule implements one CLI subcommand; shared helpers live in
//! [`helpers`].

pub mod completions;
pub mod helpers;
pub mod icons;
pub mod link;
pub mod locate;
pub mod report;
pub mod sw;
pub mod validate;
pub mod version;
