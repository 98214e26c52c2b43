//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/feedpage/feedpage.toml`
//! 3. Explicit config file (`--config <path>`)
//! 4. Environment variables: `FEEDPAGE_*` prefix, `__` between nested keys

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Breakpoint, Destination, PageSpec, DEFAULT_BREAKPOINT};
use crate::infrastructure::stylesheet::BOOTSTRAP_CDN;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "FEEDPAGE";

/// Grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width (px) at which the columns go side by side
    pub breakpoint: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

/// Link destinations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinksConfig {
    /// Source repository shown in the corner of the page
    pub repository_url: String,
    /// Form the feedback path redirects to
    pub feedback_form_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            repository_url: "https://github.com/victorzhuk/homyak".into(),
            feedback_form_url: "http://localhost:8080".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    pub stylesheet_href: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stylesheet_href: BOOTSTRAP_CDN.into(),
        }
    }
}

/// Unified configuration for feedpage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Document title
    pub title: String,
    /// Target directory of `render`
    pub output_dir: PathBuf,
    pub layout: LayoutConfig,
    pub links: LinksConfig,
    pub style: StyleConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "feedback me".into(),
            output_dir: PathBuf::from("dist"),
            layout: LayoutConfig::default(),
            links: LinksConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

/// Documented environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub name: String,
    pub default: String,
    pub description: &'static str,
}

/// Get the XDG config directory for feedpage.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "feedpage").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("feedpage.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the path untouched.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Load settings from all layers.
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        Self::load_layers(global_config_path().as_deref(), config_file, None)
    }

    /// Load settings from explicit layers.
    ///
    /// `env` replaces the process environment as source of `FEEDPAGE_*`
    /// overrides when given.
    pub fn load_layers(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> ApplicationResult<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Settings::default()).map_err(config_err)?);

        if let Some(global_path) = global {
            debug!("config: global {}", global_path.display());
            builder = builder.add_source(File::from(global_path).required(false));
        }

        if let Some(path) = config_file {
            debug!("config: explicit {}", path.display());
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.output_dir = expand_path(&settings.output_dir);

        Ok(settings)
    }

    /// Validated build-time inputs of the page.
    pub fn page_spec(&self) -> ApplicationResult<PageSpec> {
        Ok(PageSpec {
            repository: Destination::parse(&self.links.repository_url)?,
            breakpoint: Breakpoint::new(self.layout.breakpoint)?,
        })
    }

    /// Directory `render` writes to: `out` when given, else `output_dir`.
    /// Both are shell-expanded.
    pub fn render_dir(&self, out: Option<&Path>) -> PathBuf {
        match out {
            Some(dir) => expand_path(dir),
            None => self.output_dir.clone(),
        }
    }

    /// Validated destination of the feedback redirect.
    pub fn feedback_form(&self) -> ApplicationResult<Destination> {
        Ok(Destination::parse(&self.links.feedback_form_url)?)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Environment variables understood by [`Settings::load`], with defaults.
    pub fn env_vars() -> Vec<EnvVar> {
        let d = Settings::default();
        let var = |key: &str, default: String, description| EnvVar {
            name: format!("{ENV_PREFIX}_{key}"),
            default,
            description,
        };
        vec![
            var("TITLE", d.title, "Document title"),
            var(
                "OUTPUT_DIR",
                d.output_dir.display().to_string(),
                "Directory written by `render`",
            ),
            var(
                "LAYOUT__BREAKPOINT",
                d.layout.breakpoint.to_string(),
                "Width (px) where columns go side by side",
            ),
            var(
                "LINKS__REPOSITORY_URL",
                d.links.repository_url,
                "Source repository link",
            ),
            var(
                "LINKS__FEEDBACK_FORM_URL",
                d.links.feedback_form_url,
                "Feedback form URL",
            ),
            var(
                "STYLE__STYLESHEET_HREF",
                d.style.stylesheet_href,
                "Stylesheet URL",
            ),
        ]
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# feedpage configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/feedpage/feedpage.toml
#   Explicit: feedpage --config <file>
#   Env:      FEEDPAGE_* environment variables (FEEDPAGE_LAYOUT__BREAKPOINT=992)

# Document title
# title = "feedback me"

# Directory written by `feedpage render`
# output_dir = "dist"

[layout]
# Width (px) at which the two columns go side by side.
# One of the stylesheet tiers: 576, 768, 992, 1200, 1400
# breakpoint = 768

[links]
# Repository shown in the corner of the page
# repository_url = "https://github.com/victorzhuk/homyak"

# Where /feedback redirects to
# feedback_form_url = "http://localhost:8080"

[style]
# stylesheet_href = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn load_clean() -> Settings {
        Settings::load_layers(None, None, Some(Map::new())).expect("load defaults")
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = load_clean();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_defaults_when_building_page_spec_then_succeeds() {
        let spec = load_clean().page_spec().expect("valid defaults");
        assert_eq!(spec.breakpoint.px(), 768);
        assert_eq!(
            spec.repository.as_str(),
            "https://github.com/victorzhuk/homyak"
        );
    }

    #[test]
    fn given_breakpoint_between_tiers_when_building_page_spec_then_rejects() {
        let mut settings = Settings::default();
        settings.layout.breakpoint = 800;
        let err = settings.page_spec().unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::UnsupportedBreakpoint(800))
        ));
    }

    #[test]
    fn given_tilde_in_out_flag_when_resolving_render_dir_then_expands_like_setting() {
        let home = std::env::var("HOME").expect("HOME should be set");
        let mut settings = Settings::default();
        settings.output_dir = expand_path(Path::new("~/site"));

        let from_flag = settings.render_dir(Some(Path::new("~/site")));

        assert_eq!(from_flag, settings.render_dir(None));
        assert!(from_flag.starts_with(&home));
    }

    #[test]
    fn given_empty_repository_when_building_page_spec_then_reports_destination() {
        let mut settings = Settings::default();
        settings.links.repository_url = String::new();
        let err = settings.page_spec().unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidDestination { .. })
        ));
    }

    #[test]
    fn given_tilde_in_output_dir_when_expand_path_then_expands_to_home() {
        let home = std::env::var("HOME").expect("HOME should be set");
        let expanded = expand_path(Path::new("~/site"));
        assert!(
            expanded.to_string_lossy().starts_with(&home),
            "output_dir should start with home dir: {}",
            expanded.display()
        );
    }

    #[test]
    fn given_env_vars_when_listing_then_all_carry_prefix_and_default() {
        let vars = Settings::env_vars();
        assert_eq!(vars.len(), 6);
        for v in &vars {
            assert!(v.name.starts_with("FEEDPAGE_"), "{}", v.name);
            assert!(!v.default.is_empty(), "{}", v.name);
        }
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let parsed: Settings = toml::from_str(&Settings::template()).expect("template parses");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_settings_when_serialized_then_round_trips_through_toml() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("[layout]"));
        assert!(toml.contains("breakpoint = 768"));
    }
}
