//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it, only the
//! [`QuestionRules`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`DALFORM_OUTPUT__FORMAT`, `DALFORM_RULES__TITLE_MAX`, ...)
//! 3. Config file (`--config`, else `./.dalform.toml`, else the user config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use dalform_core::domain::{QuestionRules, rules};
use dalform_core::error::DalformResult;
use serde::{Deserialize, Serialize};

use crate::cli::global::OutputFormat;

/// File name used for per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".dalform.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Question form limits.
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

/// Question limits as written in the config file.
///
/// Checked for consistency when converted with [`RulesConfig::to_rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub title_min: usize,
    pub title_max: usize,
    pub description_min: usize,
    pub tags_max: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            title_min: rules::TITLE_MIN_LENGTH,
            title_max: rules::TITLE_MAX_LENGTH,
            description_min: rules::DESCRIPTION_MIN_LENGTH,
            tags_max: rules::TAGS_MAX,
        }
    }
}

impl RulesConfig {
    pub fn to_rules(&self) -> DalformResult<QuestionRules> {
        QuestionRules::try_new(
            self.title_min,
            self.title_max,
            self.description_min,
            self.tags_max,
        )
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicitly passed `config_file` must exist; the implicit locations
    /// are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// [`AppConfig::load`] reading `DALFORM_*` variables from `env` instead
    /// of the process environment when it is given.
    pub(crate) fn load_with_env(
        config_file: Option<&PathBuf>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                config::Environment::with_prefix("DALFORM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let cfg: Self = settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        // Reject contradictory limits at startup rather than per command.
        cfg.rules.to_rules()?;

        Ok(cfg)
    }

    /// The file [`AppConfig::load`] reads for a given `--config` value.
    pub fn resolve_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return local.to_path_buf();
        }
        Self::config_path()
    }

    /// Path to the default (per-user) configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dalform.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("ca", "dal-overflow", "dalform")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
