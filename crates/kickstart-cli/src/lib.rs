//! Kickstart CLI Library
//!
//! Core library components for the Kickstart CLI.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
