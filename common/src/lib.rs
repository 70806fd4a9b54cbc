//! Shared plumbing for the workspace: environment-driven configuration and
//! the `fern` logger used by the demo binary.

pub mod config;
pub mod logger;
