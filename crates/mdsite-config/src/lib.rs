//! Configuration management for mdsite.
//!
//! Parses `mdsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `site.base_path` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown content directory.
    pub content_dir: Option<PathBuf>,
    /// Override static assets directory.
    pub static_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override page template file.
    pub template: Option<PathBuf>,
    /// Override deployment base path.
    pub base_path: Option<String>,
    /// Override fail-fast flag.
    pub fail_fast: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdsite.toml";

/// Template file picked up from the project directory when none is configured.
const DEFAULT_TEMPLATE_FILENAME: &str = "template.html";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site layout configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Build behaviour.
    pub build: BuildConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    content_dir: Option<String>,
    static_dir: Option<String>,
    output_dir: Option<String>,
    template: Option<String>,
    base_path: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Directory containing markdown sources.
    pub content_dir: PathBuf,
    /// Directory copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Generated site directory, wiped on every build.
    pub output_dir: PathBuf,
    /// Page template file. `None` selects the built-in template.
    pub template: Option<PathBuf>,
    /// Prefix substituted for root-relative `href`/`src` URLs.
    pub base_path: String,
}

/// Build behaviour configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Abort on the first page that fails to convert.
    ///
    /// When false, failing pages are skipped and reported.
    pub fail_fast: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_path`").
        field: String,
        /// Error message (e.g., "${`BASE_PATH`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdsite.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated after the overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let site = &mut self.site_resolved;
        if let Some(content_dir) = &settings.content_dir {
            site.content_dir.clone_from(content_dir);
        }
        if let Some(static_dir) = &settings.static_dir {
            site.static_dir.clone_from(static_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            site.output_dir.clone_from(output_dir);
        }
        if let Some(template) = &settings.template {
            site.template = Some(template.clone());
        }
        if let Some(base_path) = &settings.base_path {
            site.base_path.clone_from(base_path);
        }
        if let Some(fail_fast) = settings.fail_fast {
            self.build.fail_fast = fail_fast;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let site = &self.site_resolved;

        if !site.base_path.starts_with('/') || !site.base_path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_path must start and end with '/', got {:?}",
                site.base_path
            )));
        }

        for (other, field) in [
            (&site.content_dir, "site.content_dir"),
            (&site.static_dir, "site.static_dir"),
        ] {
            // The output directory is wiped before each build.
            if other.starts_with(&site.output_dir) {
                return Err(ConfigError::Validation(format!(
                    "site.output_dir cannot be or contain {field}"
                )));
            }
        }

        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            site: SiteConfigRaw::default(),
            build: BuildConfig::default(),
            site_resolved: SiteConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref base_path) = self.site.base_path {
            self.site.base_path = Some(expand::expand_env(base_path, "site.base_path")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// Without an explicit template, `template.html` next to the config file
    /// is used if it exists.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        let template = match self.site.template.as_deref() {
            Some(template) => Some(config_dir.join(template)),
            None => Some(config_dir.join(DEFAULT_TEMPLATE_FILENAME)).filter(|p| p.is_file()),
        };

        self.site_resolved = SiteConfig {
            content_dir: resolve(self.site.content_dir.as_deref(), "content"),
            static_dir: resolve(self.site.static_dir.as_deref(), "static"),
            output_dir: resolve(self.site.output_dir.as_deref(), "public"),
            template,
            base_path: self.site.base_path.clone().unwrap_or_else(|| "/".to_owned()),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        let site = &config.site_resolved;
        assert_eq!(site.content_dir, PathBuf::from("/test/content"));
        assert_eq!(site.static_dir, PathBuf::from("/test/static"));
        assert_eq!(site.output_dir, PathBuf::from("/test/public"));
        assert_eq!(site.template, None);
        assert_eq!(site.base_path, "/");
        assert!(config.build.fail_fast);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.build.fail_fast);
        assert!(config.site.content_dir.is_none());
    }

    #[test]
    fn test_parse_build_config() {
        let toml = r"
[build]
fail_fast = false
";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.build.fail_fast);
    }

    #[test]
    fn test_parse_unknown_field_type_fails() {
        let toml = r#"
[build]
fail_fast = "yes"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[site]
content_dir = "pages"
static_dir = "assets"
output_dir = "docs"
template = "layouts/page.html"
base_path = "/blog/"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        let site = &config.site_resolved;
        assert_eq!(site.content_dir, PathBuf::from("/project/pages"));
        assert_eq!(site.static_dir, PathBuf::from("/project/assets"));
        assert_eq!(site.output_dir, PathBuf::from("/project/docs"));
        assert_eq!(
            site.template,
            Some(PathBuf::from("/project/layouts/page.html"))
        );
        assert_eq!(site.base_path, "/blog/");
    }

    #[test]
    fn test_default_template_picked_up_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("template.html"), "{{ Content }}").unwrap();

        let config = Config::default_with_base(dir.path());
        assert_eq!(
            config.site_resolved.template,
            Some(dir.path().join("template.html"))
        );
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdsite.toml");
        std::fs::write(
            &path,
            r#"
[site]
output_dir = "out"
base_path = "/site/"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.site_resolved.output_dir, dir.path().join("out"));
        assert_eq!(config.site_resolved.base_path, "/site/");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/mdsite.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("/nonexistent/mdsite.toml"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdsite.toml");
        std::fs::write(&path, "[site\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_expands_base_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdsite.toml");
        std::fs::write(
            &path,
            r#"
[site]
base_path = "${MDSITE_CONFIG_TEST_UNSET_BASE:-/fallback/}"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.site_resolved.base_path, "/fallback/");
    }

    #[test]
    fn test_apply_cli_settings_paths() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings {
            content_dir: Some(PathBuf::from("/elsewhere/md")),
            template: Some(PathBuf::from("/elsewhere/t.html")),
            ..CliSettings::default()
        });

        let site = &config.site_resolved;
        assert_eq!(site.content_dir, PathBuf::from("/elsewhere/md"));
        assert_eq!(site.template, Some(PathBuf::from("/elsewhere/t.html")));
        assert_eq!(site.output_dir, PathBuf::from("/test/public")); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_base_path_and_fail_fast() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings {
            base_path: Some("/repo/".to_owned()),
            fail_fast: Some(false),
            ..CliSettings::default()
        });

        assert_eq!(config.site_resolved.base_path, "/repo/");
        assert!(!config.build.fail_fast);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.site_resolved.base_path, "/");
        assert!(config.build.fail_fast);
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_base_path_without_leading_slash() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.base_path = "blog/".to_owned();
        assert_validation_error(&config, &["site.base_path", "blog/"]);
    }

    #[test]
    fn test_validate_base_path_without_trailing_slash() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.base_path = "/blog".to_owned();
        assert_validation_error(&config, &["site.base_path"]);
    }

    #[test]
    fn test_validate_output_dir_same_as_content_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.output_dir = PathBuf::from("/test/content");
        assert_validation_error(&config, &["site.output_dir", "site.content_dir"]);
    }

    #[test]
    fn test_validate_output_dir_same_as_static_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.output_dir = PathBuf::from("/test/static");
        assert_validation_error(&config, &["site.static_dir"]);
    }

    #[test]
    fn test_validate_output_dir_containing_sources() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.output_dir = PathBuf::from("/test");
        assert_validation_error(&config, &["site.output_dir", "site.content_dir"]);

        config.site_resolved.content_dir = PathBuf::from("/elsewhere/content");
        assert_validation_error(&config, &["site.static_dir"]);
    }

    #[test]
    fn test_validate_output_dir_current_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdsite.toml");
        std::fs::write(&path, "[site]\noutput_dir = \".\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_sibling_output_dir_passes() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.output_dir = PathBuf::from("/test/content-out");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_applies_cli_settings_before_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdsite.toml");
        std::fs::write(&path, "").unwrap();

        let settings = CliSettings {
            base_path: Some("no-slashes".to_owned()),
            ..CliSettings::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
