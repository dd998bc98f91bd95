//! Crucible CLI library.
//!
//! Command handlers, output formatting and terminal styling for the
//! `crucible` binary.

pub mod commands;
pub mod output;
pub mod terminal;
