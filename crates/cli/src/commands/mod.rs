//! Subcommand handlers.

pub mod add;
pub mod init;
