//! # Submission Check - pre-grading format checker
//!
//! Validates that a student project directory follows the submission
//! checklist before it is handed to the graders.
//!
//! ## Overview
//!
//! A run is a single fail-fast pass over the project directory:
//!
//! 1. `README.md` and `secret_flags` must exist and must not use
//!    Windows-style line endings.
//! 2. The build tool (`make` by default) must succeed in the directory. The
//!    canonical "no targets" message counts as success.
//! 3. The build must leave a `client` program behind.
//! 4. `secret_flags` must hold at least one 64-byte flag.
//!
//! The first failing check is the only one reported.
//!
//! ## Modules
//!
//! - [`checker`] - Orchestrates the checklist and maps results to exit codes
//! - [`config`] - Checklist settings and their defaults
//! - [`error`] - Check failures and their diagnostics
//! - [`flags`] - Secret flag parsing and validation
//! - [`line_endings`] - CRLF detection
//! - [`listing`] - Directory listing and required file lookup
//! - [`make`] - Build tool invocation
//! - [`output`] - Mode-aware terminal output
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use submission_check::checker;
//! use submission_check::config::CheckConfig;
//! use submission_check::output::{Output, OutputMode};
//!
//! let config = CheckConfig::default();
//! let output = Output::new(OutputMode::Human);
//! let status = checker::execute(Path::new("project"), &config, &output);
//! std::process::exit(i32::from(status));
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod flags;
pub mod line_endings;
pub mod listing;
pub mod make;
pub mod output;

/// Default names of the files every submission must contain.
pub mod files {
    /// Project write-up: `README.md`
    pub const README: &str = "README.md";
    /// Secret flags collected while testing against the server: `secret_flags`
    pub const SECRET_FLAGS: &str = "secret_flags";
    /// Program produced by the build: `client`
    pub const CLIENT: &str = "client";
}

/// Printed once every check has passed.
pub const SUCCESS_MESSAGE: &str = "Looks like you have all the required files, you are good to go!";
