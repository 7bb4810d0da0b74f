//! Environment Store
//!
//! A thin abstraction over the string-keyed environment mapping so the
//! host can run against the real process environment while tests inject
//! an in-memory store. Also loads a `.env` file into a store at startup.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use tracing::{debug, warn};

/// A mutable string-keyed, string-valued environment mapping.
pub trait EnvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);

    /// Present with a non-empty value.
    fn is_set(&self, key: &str) -> bool {
        self.get(key).map_or(false, |v| !v.is_empty())
    }
}

/// The real process-wide environment.
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
    }
}

/// An in-memory environment store for tests and embedded hosts.
#[derive(Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut store = Self::new();
        for (k, v) in pairs {
            store.set(k, v);
        }
        store
    }
}

impl EnvStore for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

/// Load `KEY=value` pairs from an env file into a store.
///
/// A missing file is normal and loads nothing. Keys already present in the
/// store are left untouched, matching dotenv semantics where the real
/// environment wins over the file. Returns the number of keys loaded.
pub fn load_env_file(path: &Path, store: &mut dyn EnvStore) -> usize {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(_) => {
            debug!("No environment file at {}, skipping load", path.display());
            return 0;
        }
    };

    let mut loaded = 0;
    for item in iter {
        match item {
            Ok((key, value)) => {
                if store.get(&key).is_none() {
                    store.set(&key, &value);
                    loaded += 1;
                }
            }
            Err(e) => {
                warn!("Skipping malformed line in {}: {}", path.display(), e);
            }
        }
    }

    debug!("Loaded {} variable(s) from {}", loaded, path.display());
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_file(tag: &str) -> PathBuf {
        env::temp_dir().join(format!("env-startup-env-{}-{}.env", tag, std::process::id()))
    }

    #[test]
    fn test_map_env_roundtrip() {
        let mut store = MapEnv::new();
        assert_eq!(store.get("HOST"), None);

        store.set("HOST", "localhost");
        assert_eq!(store.get("HOST"), Some("localhost".to_string()));
    }

    #[test]
    fn test_is_set_requires_non_empty_value() {
        let store = MapEnv::from_pairs(&[("HOST", "localhost"), ("PORT", "")]);
        assert!(store.is_set("HOST"));
        assert!(!store.is_set("PORT"));
        assert!(!store.is_set("MISSING"));
    }

    #[test]
    fn test_load_env_file_populates_store() {
        let path = temp_file("load");
        fs::write(&path, "HOST=localhost\nPORT=5432\n").unwrap();

        let mut store = MapEnv::new();
        let loaded = load_env_file(&path, &mut store);

        assert_eq!(loaded, 2);
        assert_eq!(store.get("HOST"), Some("localhost".to_string()));
        assert_eq!(store.get("PORT"), Some("5432".to_string()));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_env_file_missing_is_noop() {
        let path = temp_file("missing");
        let mut store = MapEnv::new();
        assert_eq!(load_env_file(&path, &mut store), 0);
    }

    #[test]
    fn test_load_env_file_does_not_override_existing() {
        let path = temp_file("override");
        fs::write(&path, "HOST=from-file\n").unwrap();

        let mut store = MapEnv::from_pairs(&[("HOST", "from-env")]);
        let loaded = load_env_file(&path, &mut store);

        assert_eq!(loaded, 0);
        assert_eq!(store.get("HOST"), Some("from-env".to_string()));

        fs::remove_file(&path).unwrap();
    }
}
