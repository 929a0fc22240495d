//! wfcfg CLI library exports for integration testing.
//!
//! This module exposes command implementations so they can be driven
//! without going through argument parsing.

pub mod commands;
pub mod config;
pub mod discovery;
pub mod errors;
