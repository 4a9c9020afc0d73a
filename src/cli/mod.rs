//! # CLI Module
//!
//! Command-line entry point for the generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Write both documents to the output directory:
//!
//! ```bash
//! postgen generate --output postman
//! ```
//!
//! `--output` defaults to `postman/`; the directory is created if missing and
//! existing files are overwritten.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
