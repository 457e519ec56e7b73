//! Subcommand implementations.

pub mod login;
pub mod status;
pub mod token;
