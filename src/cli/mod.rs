//! Command-line interface for Palaver.

pub mod args;
pub mod commands;
