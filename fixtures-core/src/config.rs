use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::Family;
use crate::error::{Error, Result};

/// Configuration for evaluating and cross-checking fixture routines.
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest `n` the Fibonacci routines will be run with.
    pub fibonacci_limit: u32,
    /// Integer families are checked on every `n` in `0..=check_max_n`.
    pub check_max_n: u32,
    /// Sample sequences for the sequence families.
    pub check_sequences: Vec<Vec<i64>>,
    /// Families skipped by `check`.
    pub exclude: Vec<Family>,
    /// Directory the config was loaded from.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fibonacci_limit: 30,
            check_max_n: 10,
            check_sequences: vec![
                vec![],
                vec![1, 2, 3],
                vec![-1, 0, 5, -7, 3],
                vec![0, -4],
            ],
            exclude: Vec::new(),
            root: PathBuf::from("."),
        }
    }
}

/// Config as stored in fixtures.toml or Cargo.toml metadata.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    fibonacci_limit: Option<u32>,
    check_max_n: Option<u32>,
    check_sequences: Option<Vec<Vec<i64>>>,
    exclude: Option<Vec<Family>>,
}

/// Cargo.toml metadata section.
#[derive(Debug, Deserialize)]
struct CargoMetadata {
    #[serde(default)]
    package: Option<CargoPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoPackage {
    #[serde(default)]
    metadata: Option<CargoPackageMetadata>,
}

#[derive(Debug, Deserialize)]
struct CargoPackageMetadata {
    #[serde(default)]
    fixtures: Option<FileConfig>,
}

impl Config {
    /// Load config with the following precedence:
    /// 1. CLI overrides (applied by the caller after this method)
    /// 2. fixtures.toml in the root
    /// 3. [package.metadata.fixtures] in Cargo.toml
    /// 4. Defaults
    ///
    /// A Cargo.toml that cannot be read or parsed is skipped; a malformed
    /// fixtures.toml is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Config {
            root: root.to_path_buf(),
            ..Default::default()
        };

        let cargo_toml = root.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = std::fs::read_to_string(&cargo_toml)
            && let Ok(cargo) = toml::from_str::<CargoMetadata>(&content)
            && let Some(pkg) = cargo.package
            && let Some(meta) = pkg.metadata
            && let Some(fixtures) = meta.fixtures
        {
            config.apply_file_config(&fixtures);
        }

        let fixtures_toml = root.join("fixtures.toml");
        if fixtures_toml.exists() {
            let content = std::fs::read_to_string(&fixtures_toml)?;
            let file_config =
                toml::from_str::<FileConfig>(&content).map_err(|e| Error::ConfigParse {
                    path: fixtures_toml.clone(),
                    message: e.to_string(),
                })?;
            config.apply_file_config(&file_config);
        }

        tracing::debug!(?config, "loaded config");
        Ok(config)
    }

    fn apply_file_config(&mut self, fc: &FileConfig) {
        if let Some(v) = fc.fibonacci_limit {
            self.fibonacci_limit = v;
        }
        if let Some(v) = fc.check_max_n {
            self.check_max_n = v;
        }
        if let Some(ref v) = fc.check_sequences {
            self.check_sequences = v.clone();
        }
        if let Some(ref v) = fc.exclude {
            self.exclude = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.fibonacci_limit, 30);
        assert_eq!(config.check_max_n, 10);
        assert_eq!(config.check_sequences.len(), 4);
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn load_from_fixtures_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("fixtures.toml"),
            r#"
            fibonacci_limit = 20
            check_max_n = 4
            check_sequences = [[1, -1], [7]]
            exclude = ["fibonacci"]
            "#,
        )
        .unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.fibonacci_limit, 20);
        assert_eq!(config.check_max_n, 4);
        assert_eq!(config.check_sequences, vec![vec![1, -1], vec![7]]);
        assert_eq!(config.exclude, vec![Family::Fibonacci]);
    }

    #[test]
    fn load_from_cargo_toml_metadata() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("Cargo.toml"),
            r#"
            [package]
            name = "test"
            version = "0.1.0"
            edition = "2024"

            [package.metadata.fixtures]
            fibonacci_limit = 15
            exclude = ["filter-double", "sum"]
            "#,
        )
        .unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.fibonacci_limit, 15);
        assert_eq!(config.exclude, vec![Family::FilterDouble, Family::Sum]);
    }

    #[test]
    fn fixtures_toml_overrides_cargo_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("Cargo.toml"),
            r#"
            [package]
            name = "test"
            version = "0.1.0"
            edition = "2024"

            [package.metadata.fixtures]
            fibonacci_limit = 15
            check_max_n = 3
            "#,
        )
        .unwrap();
        fs::write(tmp.path().join("fixtures.toml"), "fibonacci_limit = 25\n").unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.fibonacci_limit, 25);
        assert_eq!(config.check_max_n, 3);
    }

    #[test]
    fn load_no_config_files() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.fibonacci_limit, 30); // default
        assert_eq!(config.root, tmp.path());
    }

    #[test]
    fn malformed_cargo_toml_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Cargo.toml"), "this is [not toml").unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.check_max_n, 10);
    }

    #[test]
    fn malformed_fixtures_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("fixtures.toml"), "fibonacci_limit = \"lots\"\n").unwrap();
        let err = Config::load(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("fixtures.toml"));
    }

    #[test]
    fn negative_check_max_n_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("fixtures.toml"), "check_max_n = -1\n").unwrap();
        let err = Config::load(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn unknown_family_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("fixtures.toml"), "exclude = [\"sorting\"]\n").unwrap();
        assert!(Config::load(tmp.path()).is_err());
    }
}
