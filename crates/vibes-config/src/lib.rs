//! Configuration management for the type wiki.
//!
//! Parses `vibes.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `site.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use vibes_sitemap::{BaseUrl, FeatureRoute, RouteCatalog};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override content root directory.
    pub content_dir: Option<PathBuf>,
    /// Override public base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vibes.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Public site configuration.
    pub site: SiteConfig,
    /// Sitemap route catalog overrides.
    sitemap: SitemapConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved sitemap route catalog (set after loading).
    #[serde(skip)]
    pub sitemap_resolved: RouteCatalog,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    root_dir: Option<String>,
    extension: Option<String>,
    preload: Option<bool>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug)]
pub struct ContentConfig {
    /// Content root (`{root}/{language}/{slug}.{extension}`).
    pub root_dir: PathBuf,
    /// Document extension without the leading dot.
    pub extension: String,
    /// Parse every document at start instead of on first access.
    pub preload: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("content"),
            extension: "md".to_owned(),
            preload: true,
        }
    }
}

/// Public site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name appended to page titles.
    pub name: String,
    /// Absolute public URL used for sitemap locations.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "MBTI Wiki".to_owned(),
            base_url: "https://mbtivibes.com".to_owned(),
        }
    }
}

/// Raw sitemap configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SitemapConfigRaw {
    detail_prefix: Option<String>,
    details: Option<Vec<String>>,
    routes: Option<Vec<FeatureRoute>>,
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
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `vibes.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated again after the overrides.
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

    /// Parsed public base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `site.base_url` is not an absolute
    /// http(s) URL.
    pub fn base_url(&self) -> Result<BaseUrl, ConfigError> {
        BaseUrl::parse(&self.site.base_url)
            .map_err(|e| ConfigError::Validation(format!("site.base_url: {e}")))
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(content_dir) = &settings.content_dir {
            self.content_resolved.root_dir.clone_from(content_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
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
        Self {
            server: ServerConfig::default(),
            content: ContentConfigRaw::default(),
            site: SiteConfig::default(),
            sitemap: SitemapConfigRaw::default(),
            content_resolved: ContentConfig {
                root_dir: base.join("content"),
                ..ContentConfig::default()
            },
            sitemap_resolved: RouteCatalog::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_content()?;
        self.validate_site()?;
        self.validate_sitemap()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        let extension = self.content_resolved.extension.trim_start_matches('.');
        require_non_empty(extension, "content.extension")?;
        if extension.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "content.extension cannot contain path separators".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;
        self.base_url()?;
        Ok(())
    }

    fn validate_sitemap(&self) -> Result<(), ConfigError> {
        let catalog = &self.sitemap_resolved;
        for route in &catalog.feature_routes {
            require_non_empty(&route.path, "sitemap.routes.path")?;
        }
        for id in &catalog.detail_ids {
            require_non_empty(id, "sitemap.details")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory and fill in
    /// defaults for everything the file leaves out.
    fn resolve(&mut self, config_dir: &Path) {
        let defaults = ContentConfig::default();
        self.content_resolved = ContentConfig {
            root_dir: config_dir.join(self.content.root_dir.as_deref().unwrap_or("content")),
            extension: self
                .content
                .extension
                .as_deref()
                .map_or(defaults.extension, |ext| ext.trim_start_matches('.').to_owned()),
            preload: self.content.preload.unwrap_or(defaults.preload),
        };

        let mut catalog = RouteCatalog::default();
        if let Some(prefix) = &self.sitemap.detail_prefix {
            catalog.detail_prefix.clone_from(prefix);
        }
        if let Some(details) = &self.sitemap.details {
            catalog.detail_ids.clone_from(details);
        }
        if let Some(routes) = &self.sitemap.routes {
            catalog.feature_routes.clone_from(routes);
        }
        self.sitemap_resolved = catalog;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vibes_sitemap::ChangeFrequency;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(
            config.content_resolved.root_dir,
            PathBuf::from("/test/content")
        );
        assert_eq!(config.content_resolved.extension, "md");
        assert!(config.content_resolved.preload);
        assert_eq!(config.site.name, "MBTI Wiki");
        assert_eq!(config.site.base_url, "https://mbtivibes.com");
        assert_eq!(config.sitemap_resolved, RouteCatalog::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000

[content]
root_dir = "site/content"
extension = ".markdown"
preload = false

[site]
name = "Type Wiki"
base_url = "https://types.example.com/"

[sitemap]
detail_prefix = "profiles"
details = ["INTJ", "ENFP"]

[[sitemap.routes]]
path = "battle"
changefreq = "monthly"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(Path::new("/project"));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.content_resolved.root_dir,
            PathBuf::from("/project/site/content")
        );
        assert_eq!(config.content_resolved.extension, "markdown");
        assert!(!config.content_resolved.preload);
        assert_eq!(config.site.name, "Type Wiki");
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://types.example.com"
        );
        assert_eq!(
            config.sitemap_resolved,
            RouteCatalog {
                feature_routes: vec![FeatureRoute::new("battle", ChangeFrequency::Monthly)],
                detail_prefix: "profiles".to_owned(),
                detail_ids: vec!["INTJ".to_owned(), "ENFP".to_owned()],
            }
        );
    }

    #[test]
    fn test_partial_sitemap_keeps_defaults() {
        let toml = r#"
[sitemap]
detail_prefix = "mbti"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(Path::new("/project"));

        let defaults = RouteCatalog::default();
        assert_eq!(config.sitemap_resolved.detail_prefix, "mbti");
        assert_eq!(config.sitemap_resolved.detail_ids, defaults.detail_ids);
        assert_eq!(
            config.sitemap_resolved.feature_routes,
            defaults.feature_routes
        );
    }

    #[test]
    fn test_invalid_changefreq_is_parse_error() {
        let toml = r#"
[[sitemap.routes]]
path = "battle"
changefreq = "hourly"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("vibes.toml");
        std::fs::write(
            &path,
            "[content]\nroot_dir = \"docs\"\n\n[server]\nport = 8080\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.content_resolved.root_dir, temp_dir.path().join("docs"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/vibes.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_applies_cli_settings_then_validates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("vibes.toml");
        std::fs::write(&path, "").unwrap();

        let settings = CliSettings {
            base_url: Some("not a url".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            content_dir: Some(PathBuf::from("/custom/content")),
            base_url: Some("http://localhost:9000".to_owned()),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.content_resolved.root_dir,
            PathBuf::from("/custom/content")
        );
        assert_eq!(config.site.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, before.server.host);
        assert_eq!(config.server.port, before.server.port);
        assert_eq!(
            config.content_resolved.root_dir,
            before.content_resolved.root_dir
        );
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("VIBES_TEST_SITE_HOST", "wiki.example.com");
        }

        let toml = r#"
[server]
host = "${VIBES_TEST_BIND:-0.0.0.0}"

[site]
base_url = "https://${VIBES_TEST_SITE_HOST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.site.base_url, "https://wiki.example.com");

        unsafe {
            std::env::remove_var("VIBES_TEST_SITE_HOST");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("VIBES_MISSING_SITE_URL");
        }

        let toml = r#"
[site]
base_url = "${VIBES_MISSING_SITE_URL}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("site.base_url"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "{err:?}");
        let msg = err.to_string();
        for substring in expected_substrings {
            assert!(msg.contains(substring), "'{msg}' should contain '{substring}'");
        }
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.host = String::new();
        assert_validation_error(&config, &["server.host", "empty"]);
    }

    #[test]
    fn test_validate_port_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.port = 0;
        assert_validation_error(&config, &["server.port"]);
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_url = "mbtivibes.com".to_owned();
        assert_validation_error(&config, &["site.base_url", "http"]);
    }

    #[test]
    fn test_validate_extension() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.content_resolved.extension = "md/x".to_owned();
        assert_validation_error(&config, &["content.extension"]);

        config.content_resolved.extension = ".".to_owned();
        assert_validation_error(&config, &["content.extension", "empty"]);
    }

    #[test]
    fn test_validate_empty_route_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.sitemap_resolved.feature_routes =
            vec![FeatureRoute::new("", ChangeFrequency::Weekly)];
        assert_validation_error(&config, &["sitemap.routes.path"]);
    }

    #[test]
    fn test_validate_empty_detail_id() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.sitemap_resolved.detail_ids = vec!["INTJ".to_owned(), " ".to_owned()];
        assert_validation_error(&config, &["sitemap.details"]);
    }
}
