//! env-startup -- Environment Bootstrap Helper
//!
//! A small startup helper for host applications: loads a `.env` file into
//! the environment on construction, interactively collects and persists
//! missing configuration values, and prints a colorized report of which
//! expected variables are set.

pub mod types;
pub mod env;
pub mod env_file;
pub mod prompts;
pub mod report;
pub mod startup;
