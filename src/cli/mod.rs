//! Command-line interface module.

mod args;
pub mod classify;
pub mod common;
pub mod init;
pub mod rules;

pub use args::{Cli, Commands};
