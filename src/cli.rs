//! Command line interface for Pilum.

pub mod args;
pub mod commands;
pub mod output;
