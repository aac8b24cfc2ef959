//! Defaults file management

use crate::error::{DaterangeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming a defaults file when `--config` is absent
pub const CONFIG_ENV: &str = "DATERANGE_CONFIG";

/// Values that replace the built-in defaults when a flag is not given
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub format: Option<String>,
    pub delimiter: Option<String>,
    pub interval: Option<i64>,
    pub count: Option<i64>,
    pub reverse: Option<bool>,
}

impl Defaults {
    /// Load defaults from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaterangeError::Config(format!("Config file not found: {}", path.display()))
            } else {
                DaterangeError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            DaterangeError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load the file named by `explicit`, else by `DATERANGE_CONFIG`.
    ///
    /// With neither set, every value falls back to the built-in default.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load_from_path(Path::new(&path)),
            _ => Ok(Defaults::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("daterange.toml");
        fs::write(
            &path,
            "format = \"%Y-%m-%d\"\ndelimiter = \",\"\ninterval = 2\ncount = 3\nreverse = true\n",
        )
        .unwrap();

        let defaults = Defaults::load_from_path(&path).unwrap();
        assert_eq!(
            defaults,
            Defaults {
                format: Some("%Y-%m-%d".to_string()),
                delimiter: Some(",".to_string()),
                interval: Some(2),
                count: Some(3),
                reverse: Some(true),
            }
        );
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("daterange.toml");
        fs::write(&path, "count = 14\n").unwrap();

        let defaults = Defaults::load_from_path(&path).unwrap();
        assert_eq!(defaults.count, Some(14));
        assert_eq!(defaults.format, None);
        assert_eq!(defaults.reverse, None);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Defaults::load_from_path(&temp.path().join("missing.toml"));

        match result.unwrap_err() {
            DaterangeError::Config(msg) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("daterange.toml");
        fs::write(&path, "delimeter = \",\"\n").unwrap();

        let result = Defaults::load_from_path(&path);
        assert!(matches!(result, Err(DaterangeError::Config(_))));
    }

    #[test]
    fn test_discover_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "interval = 1\n").unwrap();

        let defaults = Defaults::discover(Some(&path)).unwrap();
        assert_eq!(defaults.interval, Some(1));
    }
}
