//! Command line interface for typofix.

pub mod args;
pub mod commands;
pub mod output;
