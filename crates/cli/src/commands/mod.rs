//! CLI subcommand implementations.

pub mod user;
