//! Shared Types
//!
//! Configuration schema descriptors, report sections, operation outcomes,
//! and the library error type.

use std::path::PathBuf;

use thiserror::Error;

/// A pure transform applied to raw prompt input before it is stored.
pub type Transform = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Descriptor for a single configuration variable.
///
/// `description` is shown as the prompt label. `required` fields cannot be
/// submitted empty; `hidden` fields use masked input. The optional `before`
/// transform rewrites the raw input before it is persisted.
pub struct ConfigField {
    pub description: String,
    pub required: bool,
    pub hidden: bool,
    pub before: Option<Transform>,
}

impl ConfigField {
    /// A required, visible field with no transform.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            required: true,
            hidden: false,
            before: None,
        }
    }

    /// Allow the field to be submitted empty.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Mask the input while the user types it.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Attach a transform applied to the raw input before storage.
    pub fn map(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.before = Some(Box::new(f));
        self
    }

    /// Apply the `before` transform, or return the raw value unchanged.
    pub fn apply(&self, raw: &str) -> String {
        match &self.before {
            Some(f) => f(raw),
            None => raw.to_string(),
        }
    }
}

/// An ordered set of configuration fields keyed by variable name.
///
/// Insertion order is prompt order and file order. Re-adding a key replaces
/// the previous descriptor, so each key maps to exactly one value.
#[derive(Default)]
pub struct ConfigSchema {
    entries: Vec<(String, ConfigField)>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any existing entry with the same key.
    pub fn field(mut self, key: impl Into<String>, field: ConfigField) -> Self {
        let key = key.into();
        if let Some(existing) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = field;
        } else {
            self.entries.push((key, field));
        }
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ConfigField)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A labelled group of variable names for the verification report.
/// Purely presentational.
pub struct Section {
    pub label: String,
    pub variables: Vec<String>,
}

impl Section {
    pub fn new(label: impl Into<String>, variables: &[&str]) -> Self {
        Self {
            label: label.into(),
            variables: variables.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Result of an interactive collection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutcome {
    /// Every field was answered and the file was written.
    Completed,
    /// The user cancelled the session; nothing was written.
    Cancelled,
}

/// Result of `ensure_configuration_file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The file was absent and has been created.
    Created,
    /// The file already existed; no prompting occurred.
    AlreadyPresent,
    /// The user cancelled the session; no file was created.
    Cancelled,
}

impl EnsureOutcome {
    /// True when this call created the configuration file.
    pub fn created(&self) -> bool {
        matches!(self, EnsureOutcome::Created)
    }
}

/// Errors surfaced by the library. User cancellation is not an error; it is
/// reported through the outcome enums.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("refusing to overwrite existing environment file: {0}")]
    FileExists(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
