//! Command-line interface for `foliogen`.

pub mod args;
pub mod commands;
