//! Generated Environment File
//!
//! Renders and writes the flat `KEY=value` file produced by the
//! collection flow. Keys are upper-cased; values are written verbatim
//! with no quoting or escaping, which is a documented limitation of the
//! format rather than something to repair here.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::types::StartupError;

/// Conventional file name, relative to the current working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Tool name written into the generated header comment.
pub const GENERATOR_TAG: &str = "env-startup";

/// Render the full file body: one header comment naming the generator,
/// then one `KEY=value` line per collected entry, in collection order.
pub fn render(name: &str, values: &[(String, String)]) -> String {
    let mut content = format!(
        "# Environment variables generated by {} using {}\n",
        name, GENERATOR_TAG
    );
    for (key, value) in values {
        content.push_str(&format!("{}={}\n", key.to_uppercase(), value));
    }
    content
}

/// Write the rendered file to `path`.
///
/// With `overwrite` false an existing file is left untouched and
/// `StartupError::FileExists` is returned; with `overwrite` true any
/// existing file is replaced unconditionally.
pub fn write(
    path: &Path,
    name: &str,
    values: &[(String, String)],
    overwrite: bool,
) -> Result<(), StartupError> {
    if !overwrite && path.exists() {
        return Err(StartupError::FileExists(path.to_path_buf()));
    }

    fs::write(path, render(name, values))?;
    debug!(
        "Wrote {} variable(s) to {}",
        values.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn temp_file(tag: &str) -> PathBuf {
        env::temp_dir().join(format!(
            "env-startup-file-{}-{}.env",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_render_header_names_generator() {
        let content = render("my-app", &[]);
        assert_eq!(
            content,
            "# Environment variables generated by my-app using env-startup\n"
        );
    }

    #[test]
    fn test_render_uppercases_keys_in_order() {
        let content = render(
            "my-app",
            &pairs(&[("db_host", "localhost"), ("db_port", "5432"), ("token", "s3cret")]),
        );

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "DB_HOST=localhost");
        assert_eq!(lines[2], "DB_PORT=5432");
        assert_eq!(lines[3], "TOKEN=s3cret");
    }

    #[test]
    fn test_render_leaves_values_verbatim() {
        let content = render("my-app", &pairs(&[("url", "postgres://u:p@h/db?x=1 y")]));
        assert!(content.contains("URL=postgres://u:p@h/db?x=1 y\n"));
    }

    #[test]
    fn test_write_refuses_existing_without_overwrite() {
        let path = temp_file("refuse");
        fs::write(&path, "KEEP=me\n").unwrap();

        let err = write(&path, "my-app", &pairs(&[("a", "1")]), false).unwrap_err();
        assert!(matches!(err, StartupError::FileExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "KEEP=me\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_overwrite_replaces_existing() {
        let path = temp_file("replace");
        fs::write(&path, "OLD=value\n").unwrap();

        write(&path, "my-app", &pairs(&[("a", "1")]), true).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("A=1\n"));
        assert!(!content.contains("OLD=value"));

        fs::remove_file(&path).unwrap();
    }
}
