//! SVG import routing for bundler rule chains.
//!
//! Every imported SVG is handled by exactly one pipeline: an emitted file
//! (`?url`), a data URI (`?inline`), a generated component (`?react`, or a
//! bare import from script source), or a size-based choice between the first
//! two. [`plugin::SvgrPlugin`] replaces a host's built-in SVG rule with the
//! rule implementing that routing.

pub mod logger;

pub mod chain;
pub mod cli;
pub mod config;
pub mod plugin;
