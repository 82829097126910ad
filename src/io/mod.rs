//! Input/output plumbing: command line, configuration, errors and progress

/// Command-line parsing and command dispatch
pub mod cli;
/// Reference layout constants and crop job parameters
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Progress display for crop runs
pub mod progress;
