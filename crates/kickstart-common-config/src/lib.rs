//! Configuration types for Kickstart.
//!
//! This crate provides the configuration types used by Kickstart
//! for `config.yaml` files.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
