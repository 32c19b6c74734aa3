//! Configuration types for fsvars.
//!
//! [`Config::load`] layers an optional TOML file on top of the built-in
//! defaults. Without an explicit path it looks for
//! `$XDG_CONFIG_HOME/fsvars/config.toml` (or `~/.config/fsvars/config.toml`)
//! and silently falls back to the defaults when the file is absent.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::infer::DateDetection;
use crate::normalizer::NormalizeOptions;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalize]
camel_case     = false
sanitize       = false
date_detection = "permissive"

[identify]
reserved_traits = ["email", "name"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub identify: IdentifyConfig,
}

/// `[normalize]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub camel_case: bool,
    #[serde(default)]
    pub sanitize: bool,
    #[serde(default)]
    pub date_detection: DateDetection,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            camel_case: false,
            sanitize: false,
            date_detection: DateDetection::Permissive,
        }
    }
}

impl From<&NormalizeConfig> for NormalizeOptions {
    fn from(cfg: &NormalizeConfig) -> Self {
        NormalizeOptions {
            camel_case: cfg.camel_case,
            sanitize: cfg.sanitize,
            dates: cfg.date_detection,
        }
    }
}

/// `[identify]` section of `config.toml`.
///
/// Reserved traits are lifted out of identify traits before normalization
/// because the destination carries them as dedicated fields.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentifyConfig {
    #[serde(default = "default_reserved_traits")]
    pub reserved_traits: Vec<String>,
}

fn default_reserved_traits() -> Vec<String> {
    vec!["email".to_string(), "name".to_string()]
}

impl Default for IdentifyConfig {
    fn default() -> Self {
        Self {
            reserved_traits: default_reserved_traits(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults overlaid with a TOML file.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let (path, required) = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(CoreError::ConfigNotFound(p.to_path_buf()));
                }
                (p.to_path_buf(), true)
            }
            None => (config_path(), false),
        };
        tracing::debug!(path = %path.display(), required, "loading config");

        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions::from(&self.normalize)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fsvars")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
