//! skillkit - A CLI tool for building and managing voice skill projects
//!
//! The binary is a thin wrapper around [`skillkit::cli::run`]: parse the
//! command line, dispatch, and report any error with a non-zero exit code.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use colored::Colorize;

/// Main entry point for the skillkit CLI
fn main() {
    if let Err(err) = skillkit::cli::run() {
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
