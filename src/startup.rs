//! Startup
//!
//! The process-startup helper a host application drives: loads an existing
//! `.env` file into the environment store on construction, interactively
//! collects and persists missing configuration, and prints the
//! variable-presence report.

use std::path::{Path, PathBuf};

use colored::Color;

use crate::env::{load_env_file, EnvStore, ProcessEnv};
use crate::env_file::{self, DEFAULT_ENV_FILE};
use crate::prompts::{PromptError, PromptRequest, Prompter};
use crate::report::{colorize, render_report};
use crate::types::{CollectOutcome, ConfigSchema, EnsureOutcome, Section, StartupError};

/// The startup helper. Generic over the environment store so hosts and
/// tests can inject an in-memory store instead of mutating real process
/// state.
pub struct Startup<E: EnvStore = ProcessEnv> {
    name: String,
    env_file: PathBuf,
    env: E,
}

impl Startup<ProcessEnv> {
    /// Helper bound to the real process environment and `.env` in the
    /// current working directory. Loads the file (if present) and prints
    /// the welcome banner.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_store(name, DEFAULT_ENV_FILE, ProcessEnv)
    }
}

impl<E: EnvStore> Startup<E> {
    /// Helper bound to an explicit env file path and store. Loads the file
    /// into the store (a missing file loads nothing) and prints the
    /// welcome banner.
    pub fn with_store(name: impl Into<String>, env_file: impl Into<PathBuf>, mut env: E) -> Self {
        let name = name.into();
        let env_file = env_file.into();

        load_env_file(&env_file, &mut env);
        println!("Welcome to {}", name);

        Self {
            name,
            env_file,
            env,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Interactively collect a value for every schema entry, in schema
    /// order, then persist them to the env file.
    ///
    /// Required fields are re-asked until non-empty; hidden fields use
    /// masked input; each field's transform is applied to the raw input
    /// before storage. With `overwrite` false an existing file fails the
    /// write with `StartupError::FileExists`; with `overwrite` true it is
    /// replaced unconditionally.
    ///
    /// Cancelling the session returns `Ok(CollectOutcome::Cancelled)` and
    /// writes nothing.
    pub fn create_configuration(
        &mut self,
        schema: &ConfigSchema,
        prompter: &mut dyn Prompter,
        overwrite: bool,
    ) -> Result<CollectOutcome, StartupError> {
        let mut values: Vec<(String, String)> = Vec::with_capacity(schema.len());

        for (key, field) in schema.entries() {
            let label = format!("{}\n", colorize(&field.description, None));
            let request = PromptRequest {
                label: &label,
                hidden: field.hidden,
                allow_empty: !field.required,
            };

            let raw = loop {
                match prompter.read(&request) {
                    Ok(reply) => {
                        if reply.is_empty() && field.required {
                            println!("{}", colorize("This field is required.", Some(Color::Yellow)));
                            continue;
                        }
                        break reply;
                    }
                    Err(PromptError::Cancelled) => return Ok(CollectOutcome::Cancelled),
                    Err(PromptError::Io(e)) => return Err(e.into()),
                }
            };

            values.push((key.to_string(), field.apply(&raw)));
        }

        env_file::write(&self.env_file, &self.name, &values, overwrite)?;
        Ok(CollectOutcome::Completed)
    }

    /// Print the presence report for the given sections. Diagnostic only;
    /// the environment store is not modified.
    pub fn verify_configuration(&self, sections: &[Section]) {
        for line in render_report(sections, &self.env) {
            println!("{}", line);
        }
    }

    /// Run collection only when the env file does not exist yet.
    ///
    /// Returns `AlreadyPresent` without prompting when the file exists,
    /// otherwise `Created` or `Cancelled` from the collection session.
    pub fn ensure_configuration_file(
        &mut self,
        schema: &ConfigSchema,
        prompter: &mut dyn Prompter,
    ) -> Result<EnsureOutcome, StartupError> {
        if self.env_file.exists() {
            return Ok(EnsureOutcome::AlreadyPresent);
        }

        match self.create_configuration(schema, prompter, false)? {
            CollectOutcome::Completed => Ok(EnsureOutcome::Created),
            CollectOutcome::Cancelled => Ok(EnsureOutcome::Cancelled),
        }
    }

    /// Legacy wrapper around `ensure_configuration_file`: cancellation
    /// prints a short notice and exits the process with status 0, and any
    /// other failure is printed and also exits with status 0. Returns
    /// whether the file was created.
    ///
    /// Hosts that want to decide exit semantics themselves should call
    /// `ensure_configuration_file` instead.
    pub fn ensure_or_exit(&mut self, schema: &ConfigSchema, prompter: &mut dyn Prompter) -> bool {
        match self.ensure_configuration_file(schema, prompter) {
            Ok(EnsureOutcome::Created) => true,
            Ok(EnsureOutcome::AlreadyPresent) => false,
            Ok(EnsureOutcome::Cancelled) => {
                println!("Canceled by the user");
                std::process::exit(0);
            }
            Err(e) => {
                println!("{}", e);
                std::process::exit(0);
            }
        }
    }
}
