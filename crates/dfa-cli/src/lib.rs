//! Library side of the `dfa` command-line tool.

pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
pub mod types;
