use serde::{Deserialize, Serialize};
use smart_stylus_linter_engine::{LintOptions, RuleSeverities};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in a project directory before the user config.
pub const PROJECT_CONFIG_FILE: &str = ".smart-stylus-linter.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid include pattern '{pattern}': {source}")]
    PatternError {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language id of documents the linter acts on.
    pub language_id: String,
    /// File extensions (without the dot) treated as that language.
    pub extensions: Vec<String>,
    /// Glob patterns for files to process when none are given explicitly.
    pub include: Vec<String>,
    pub severity: RuleSeverities,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_id: "stylus".to_string(),
            extensions: vec!["styl".to_string()],
            include: Vec::new(),
            severity: RuleSeverities::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Project config in `dir`, falling back to the user config.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        match Self::load_from_path(Self::project_config_path(dir))? {
            Some(config) => Ok(Some(config)),
            None => Self::load(),
        }
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/smart-stylus-linter");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn project_config_path(dir: &Path) -> PathBuf {
        dir.join(PROJECT_CONFIG_FILE)
    }

    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            language_id: self.language_id.clone(),
            severities: self.severity,
        }
    }

    /// Files matched by the `include` patterns.
    ///
    /// Patterns are shell-expanded first; relative ones are anchored at `root`.
    /// Directories and unreadable entries are skipped. The result is sorted
    /// and free of duplicates.
    pub fn resolve_include(&self, root: &Path) -> Result<Vec<PathBuf>, ConfigError> {
        let mut files = Vec::new();

        for pattern in &self.include {
            let expanded = Self::expand_pattern(pattern);
            let anchored = if Path::new(&expanded).is_absolute() {
                expanded
            } else {
                root.join(&expanded).to_string_lossy().into_owned()
            };

            let paths = glob::glob(&anchored).map_err(|source| ConfigError::PatternError {
                pattern: pattern.clone(),
                source,
            })?;
            files.extend(paths.filter_map(Result::ok).filter(|path| path.is_file()));
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn expand_pattern(pattern: &str) -> String {
        match shellexpand::full(pattern) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => pattern.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_stylus_linter_engine::Severity;
    use std::env;
    use tempfile::TempDir;

    fn touch(dir: &Path, relative: &str) -> PathBuf {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, ".a\n").unwrap();
        path
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/smart-stylus-linter/config.toml"));
    }

    #[test]
    fn test_defaults_when_table_is_empty() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.language_id, "stylus");
        assert_eq!(config.extensions, vec!["styl"]);
        assert_eq!(config.severity.unsorted, Severity::Error);
    }

    #[test]
    fn test_partial_severity_table() {
        let config: Config = toml::from_str(
            r#"
language_id = "styl"

[severity]
unsorted = "warning"
"#,
        )
        .unwrap();

        assert_eq!(config.language_id, "styl");
        assert_eq!(config.severity.unsorted, Severity::Warning);
        assert_eq!(config.severity.colon, Severity::Error);

        let options = config.lint_options();
        assert_eq!(options.language_id, "styl");
        assert_eq!(options.severities.unsorted, Severity::Warning);
    }

    #[test]
    fn test_unknown_severity_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[severity]\ncolon = \"fatal\"\n").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            include: vec!["src/**/*.styl".to_string()],
            severity: RuleSeverities {
                semicolon: Severity::Hint,
                ..RuleSeverities::default()
            },
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_discover_prefers_project_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            Config::project_config_path(temp_dir.path()),
            "extensions = [\"styl\", \"stylus\"]\n",
        )
        .unwrap();

        let config = Config::discover(temp_dir.path()).unwrap().unwrap();

        assert_eq!(config.extensions, vec!["styl", "stylus"]);
    }

    #[test]
    fn test_resolve_include_relative_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let a = touch(temp_dir.path(), "styles/a.styl");
        let b = touch(temp_dir.path(), "styles/nested/b.styl");
        touch(temp_dir.path(), "styles/c.css");
        let config = Config {
            include: vec!["styles/**/*.styl".to_string(), "styles/*.styl".to_string()],
            ..Config::default()
        };

        let files = config.resolve_include(temp_dir.path()).unwrap();

        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_resolve_include_expands_env_vars() {
        let temp_dir = TempDir::new().unwrap();
        let a = touch(temp_dir.path(), "theme/a.styl");
        unsafe {
            env::set_var("SSL_TEST_THEME_DIR", temp_dir.path().join("theme"));
        }
        let config = Config {
            include: vec!["$SSL_TEST_THEME_DIR/*.styl".to_string()],
            ..Config::default()
        };

        let files = config.resolve_include(Path::new("/unused")).unwrap();

        assert_eq!(files, vec![a]);
        unsafe {
            env::remove_var("SSL_TEST_THEME_DIR");
        }
    }

    #[test]
    fn test_resolve_include_invalid_pattern() {
        let config = Config {
            include: vec!["styles/[".to_string()],
            ..Config::default()
        };

        let result = config.resolve_include(Path::new("."));

        assert!(matches!(result, Err(ConfigError::PatternError { .. })));
    }
}
