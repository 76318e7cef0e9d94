//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for a specific CLI
//! subcommand and returns the process exit code.

mod catalog;
mod convert;
mod resolve;
mod search;

pub use catalog::{run_available, run_stats};
pub use convert::{run_convert, ConvertTarget};
pub use resolve::{run_exists, run_files, run_get};
pub use search::{run_search, SearchMode};
