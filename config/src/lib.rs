//! Configuration for the lecture deck.
//!
//! Read from `~/.lecture/config.toml`. Every section and field is optional;
//! a missing file means defaults.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [demo]
//! base_url = "https://jsonplaceholder.typicode.com"
//! min_id = 1
//! max_id = 5
//! timeout_secs = 10
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use lecture_fetch::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use lecture_types::{BoundsError, KeyBounds, ui::UiOptions};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Overrides `[demo] base_url` when set.
pub const BASE_URL_ENV: &str = "LECTURE_BASE_URL";

#[derive(Debug, Default, Deserialize)]
pub struct LectureConfig {
    pub app: Option<AppConfig>,
    pub demo: Option<DemoConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid demo base_url {value:?}: {source}")]
    BaseUrl {
        value: String,
        source: url::ParseError,
    },
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and the completed marker.
    #[serde(default)]
    pub ascii_only: bool,
    #[serde(default)]
    pub high_contrast: bool,
    /// Freeze the loading placeholder instead of animating it.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoConfig {
    /// Supports `${VAR}` references.
    pub base_url: Option<String>,
    pub min_id: Option<u32>,
    pub max_id: Option<u32>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved live-view settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub base_url: Url,
    pub bounds: KeyBounds,
    pub timeout: Duration,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bounds: KeyBounds::DEFAULT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

/// Expand `${VAR}` references from the environment. Unset variables expand
/// to the empty string; an unterminated `${` is kept verbatim.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

impl LectureConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    /// Resolve `[demo]`, honoring [`BASE_URL_ENV`].
    pub fn demo_settings(&self) -> Result<DemoSettings, ConfigError> {
        self.demo_settings_with(env::var(BASE_URL_ENV).ok())
    }

    pub fn demo_settings_with(
        &self,
        base_url_override: Option<String>,
    ) -> Result<DemoSettings, ConfigError> {
        let defaults = DemoSettings::default();
        let Some(demo) = self.demo.as_ref() else {
            return match base_url_override {
                Some(raw) => Ok(DemoSettings {
                    base_url: parse_base_url(&raw)?,
                    ..defaults
                }),
                None => Ok(defaults),
            };
        };

        let base_url = match base_url_override.or_else(|| demo.base_url.clone()) {
            Some(raw) => parse_base_url(&raw)?,
            None => defaults.base_url,
        };
        let bounds = KeyBounds::new(
            demo.min_id.unwrap_or(defaults.bounds.min()),
            demo.max_id.unwrap_or(defaults.bounds.max()),
        )?;
        let timeout = demo
            .timeout_secs
            .map_or(defaults.timeout, Duration::from_secs);

        Ok(DemoSettings {
            base_url,
            bounds,
            timeout,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let expanded = expand_env_vars(raw.trim());
    Url::parse(&expanded).map_err(|source| ConfigError::BaseUrl {
        value: expanded,
        source,
    })
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lecture").join("config.toml"))
}
