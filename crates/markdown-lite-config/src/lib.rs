use anyhow::Context;
use markdown_lite_engine::{BlockKind, TagRegistry, UnknownBlockKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

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

    #[error("Invalid tag override: {0}")]
    InvalidTag(#[from] UnknownBlockKind),

    #[error("Invalid input pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read input matched by '{pattern}': {source}")]
    UnreadableInput {
        pattern: String,
        source: glob::GlobError,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Glob patterns selecting markdown files to convert.
    #[serde(default)]
    pub inputs: Vec<String>,

    /// Where converted `.html` files go; stdout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Tag name overrides keyed by block kind name (`bullet`, `header1`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl Config {
    /// Directory (before `~` expansion) holding `config.toml`.
    const CONFIG_DIR: &'static str = "~/.config/markdown-lite";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Loads the config at `config_path`; `Ok(None)` when there is no file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        match fs::read_to_string(config_path) {
            Ok(content) => Self::parse(&content, config_path).map(Some),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Parses TOML text, expands `output_dir` and checks tag overrides.
    fn parse(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        if let Some(dir) = config.output_dir.take() {
            config.output_dir = Some(Self::expand_path(&dir).unwrap_or(dir));
        }
        config.tag_registry()?;
        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        let toml = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        fs::write(config_path, toml)
            .with_context(|| format!("Failed to write {}", config_path.display()))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        Path::new(shellexpand::tilde(Self::CONFIG_DIR).as_ref()).join(Self::CONFIG_FILE)
    }

    /// Builds the tag registry for this config: defaults plus overrides.
    pub fn tag_registry(&self) -> Result<TagRegistry, ConfigError> {
        let overrides = self
            .tags
            .iter()
            .map(|(kind, name)| kind.parse::<BlockKind>().map(|kind| (kind, name.clone())))
            .collect::<Result<Vec<_>, UnknownBlockKind>>()?;
        Ok(TagRegistry::with_overrides(overrides))
    }

    /// Expands every input pattern into the sorted, de-duplicated list of
    /// matching paths.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut paths = Vec::new();
        for pattern in &self.inputs {
            let expanded = shellexpand::full(pattern)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| pattern.clone());
            let entries =
                glob::glob(&expanded).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            for entry in entries {
                let path = entry.map_err(|source| ConfigError::UnreadableInput {
                    pattern: pattern.clone(),
                    source,
                })?;
                paths.push(path);
            }
        }
        paths.sort();
        paths.dedup();
        Ok(paths)
    }

    /// Expands `~` and `$VAR`; `None` when a variable is undefined.
    fn expand_path(path: &Path) -> Option<PathBuf> {
        shellexpand::full(&path.to_string_lossy())
            .ok()
            .map(|expanded| PathBuf::from(expanded.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-lite/config.toml"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.tag_registry().unwrap(), TagRegistry::default());
    }

    #[test]
    fn test_tag_overrides_build_registry() {
        let config: Config = toml::from_str(
            r#"
[tags]
bullet = "div"
horizontal_rule = "section"
"#,
        )
        .unwrap();

        let tags = config.tag_registry().unwrap();
        assert_eq!(tags.tag_name(BlockKind::Bullet), "div");
        assert_eq!(tags.tag_name(BlockKind::HorizontalRule), "section");
        assert_eq!(tags.tag_name(BlockKind::Header1), "h1");
    }

    #[test]
    fn test_unknown_tag_kind_is_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[tags]\nblockquote = \"q\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidTag(_)));
        assert!(err.to_string().contains("blockquote"));
    }

    #[test]
    fn test_unreadable_config_is_an_error_not_missing() {
        let temp_dir = TempDir::new().unwrap();

        let err = Config::load_from_path(temp_dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
    }

    #[test]
    fn test_malformed_toml_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "inputs = [unterminated").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("MDLITE_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$MDLITE_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("MDLITE_TEST_VAR");
        }
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
            inputs: vec!["notes/*.md".to_string()],
            output_dir: Some(PathBuf::from("/tmp/site")),
            tags: BTreeMap::from([("bullet".to_string(), "div".to_string())]),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_output_dir_expanded_on_load() {
        unsafe {
            env::set_var("MDLITE_SITE_ROOT", "/custom/site");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "output_dir = \"$MDLITE_SITE_ROOT/html\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.output_dir, Some(PathBuf::from("/custom/site/html")));

        unsafe {
            env::remove_var("MDLITE_SITE_ROOT");
        }
    }

    #[test]
    fn test_resolve_inputs_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.md", "a.md", "skip.txt"] {
            fs::write(temp_dir.path().join(name), "# x").unwrap();
        }
        let root = temp_dir.path().to_string_lossy();
        let config = Config {
            inputs: vec![format!("{root}/*.md"), format!("{root}/a.md")],
            ..Config::default()
        };

        let inputs = config.resolve_inputs().unwrap();

        assert_eq!(
            inputs,
            vec![temp_dir.path().join("a.md"), temp_dir.path().join("b.md")]
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let config = Config {
            inputs: vec!["notes/[*.md".to_string()],
            ..Config::default()
        };

        let err = config.resolve_inputs().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }
}
