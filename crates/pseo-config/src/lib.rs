//! Run configuration for the programmatic page generator.
//!
//! Parses `pseo.toml` with serde and auto-discovers it in the current
//! directory or any parent. Without a config file, defaults rooted at the
//! current directory are used.
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base_url`
//! - `site.analytics_id`

mod expand;

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pseo.toml";

/// Default location of the dimension document, relative to the config file.
const DEFAULT_DIMENSIONS: &str = "programmatic/dimensions.json";

/// Default output root for generated pages.
const DEFAULT_OUTPUT_DIR: &str = "public/p";

/// Default sitemap location.
const DEFAULT_SITEMAP: &str = "public/sitemap-programmatic.xml";

/// Analytics measurement id used when `site.analytics_id` is absent.
pub const DEFAULT_ANALYTICS_ID: &str = "G-P4ZLGKH1E1";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Output locations (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Related-link selection policy.
    pub related: RelatedConfig,
    /// Sitemap entry policy.
    pub sitemap: SitemapConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    dimensions: Option<String>,
    name: Option<String>,
    analytics_id: Option<String>,
    base_url: Option<String>,
}

/// Resolved site configuration.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Dimension document path.
    pub dimensions_path: PathBuf,
    /// Brand shown in page header and footer.
    pub name: String,
    /// Analytics measurement id. `None` omits the snippet.
    pub analytics_id: Option<String>,
    /// Overrides the dimension document's `baseUrl` when set.
    pub base_url: Option<String>,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    sitemap: Option<String>,
}

/// Resolved output locations with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Root directory holding one directory per page. Wiped on every run.
    pub dir: PathBuf,
    /// Sitemap document path.
    pub sitemap: PathBuf,
}

/// Secondary rule used when too few pages share a slug part with the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedFallback {
    /// Pages following the target in enumeration order, wrapping around.
    #[default]
    Sequential,
    /// Seeded pseudo-random inclusion of non-adjacent pages.
    Sampled,
}

/// Related-link configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RelatedConfig {
    /// Maximum number of related links per page.
    pub limit: usize,
    /// Fallback rule.
    pub fallback: RelatedFallback,
    /// Seed for [`RelatedFallback::Sampled`].
    pub seed: u64,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            fallback: RelatedFallback::Sequential,
            seed: 0,
        }
    }
}

/// Sitemap `<changefreq>` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// Value as written in the sitemap.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Sitemap configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Change frequency applied to every entry.
    pub changefreq: ChangeFrequency,
    /// Priority applied to every entry.
    pub priority: f32,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            changefreq: ChangeFrequency::Monthly,
            priority: 0.6,
        }
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
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`PSEO_BASE_URL`} not set").
        message: String,
    },
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `pseo.toml` in the current directory and its parents, falling back
    /// to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default_with_cwd()),
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
            site: SiteConfigRaw::default(),
            output: OutputConfigRaw::default(),
            related: RelatedConfig::default(),
            sitemap: SitemapConfig::default(),
            site_resolved: SiteConfig {
                dimensions_path: base.join(DEFAULT_DIMENSIONS),
                name: default_site_name(),
                analytics_id: Some(DEFAULT_ANALYTICS_ID.to_owned()),
                base_url: None,
            },
            output_resolved: OutputConfig {
                dir: base.join(DEFAULT_OUTPUT_DIR),
                sitemap: base.join(DEFAULT_SITEMAP),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.site_resolved.base_url {
            require_http_url(base_url, "site.base_url")?;
        }

        if self.related.limit == 0 {
            return Err(ConfigError::Validation(
                "related.limit must be greater than 0".to_owned(),
            ));
        }

        if !(0.0..=1.0).contains(&self.sitemap.priority) {
            return Err(ConfigError::Validation(
                "sitemap.priority must be between 0.0 and 1.0".to_owned(),
            ));
        }

        self.validate_output_dir()
    }

    /// The output root is removed before every run, so it must not hold
    /// anything the run reads.
    fn validate_output_dir(&self) -> Result<(), ConfigError> {
        if self.output.dir.as_deref().is_some_and(|dir| dir.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "output.dir must not be empty".to_owned(),
            ));
        }

        let output_dir = normalize(&self.output_resolved.dir);
        if output_dir.parent().is_none() {
            return Err(ConfigError::Validation(format!(
                "output.dir cannot be a filesystem root: {}",
                self.output_resolved.dir.display()
            )));
        }

        if let Some(config_dir) = self.config_path.as_deref().and_then(Path::parent) {
            let config_dir = normalize(config_dir);
            if config_dir.starts_with(&output_dir) {
                return Err(ConfigError::Validation(format!(
                    "output.dir {} contains the config file directory {}",
                    self.output_resolved.dir.display(),
                    config_dir.display()
                )));
            }
        }

        let dimensions = normalize(&self.site_resolved.dimensions_path);
        if dimensions.starts_with(&output_dir) || output_dir.starts_with(&dimensions) {
            return Err(ConfigError::Validation(format!(
                "output.dir {} overlaps site.dimensions {}",
                self.output_resolved.dir.display(),
                self.site_resolved.dimensions_path.display()
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.site.base_url {
            self.site.base_url = Some(expand::expand_env(url, "site.base_url")?);
        }
        if let Some(ref id) = self.site.analytics_id {
            self.site.analytics_id = Some(expand::expand_env(id, "site.analytics_id")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory and fill defaults.
    fn resolve(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));
        let non_empty = |value: Option<&String>| value.filter(|v| !v.is_empty()).cloned();

        self.site_resolved = SiteConfig {
            dimensions_path: resolve(self.site.dimensions.as_deref(), DEFAULT_DIMENSIONS),
            name: non_empty(self.site.name.as_ref()).unwrap_or_else(default_site_name),
            // Absent uses the default id; an explicit "" disables analytics
            analytics_id: match &self.site.analytics_id {
                None => Some(DEFAULT_ANALYTICS_ID.to_owned()),
                Some(id) => non_empty(Some(id)),
            },
            base_url: non_empty(self.site.base_url.as_ref()),
        };

        self.output_resolved = OutputConfig {
            dir: resolve(self.output.dir.as_deref(), DEFAULT_OUTPUT_DIR),
            sitemap: resolve(self.output.sitemap.as_deref(), DEFAULT_SITEMAP),
        };
    }
}

/// Make `path` absolute and lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            _ => normalized.push(component),
        }
    }
    normalized
}

fn default_site_name() -> String {
    "AI Fact Checker".to_owned()
}
