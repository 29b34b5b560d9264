//! Configuration loading and validation for relnotes.
//!
//! Loads configuration from `relnotes.toml` in the working directory, or
//! from the path named by the `RELNOTES_CONFIG` environment variable.
//! When neither file exists the defaults apply and the built-in changelog
//! sections are used. A path given explicitly on the command line must exist.

use relnotes_sections::{Section, SectionRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "relnotes.toml";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV_VAR: &str = "RELNOTES_CONFIG";

/// The root configuration structure.
///
/// Maps directly to `relnotes.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Custom changelog sections, in display order.
    ///
    /// When empty, the built-in sections are used. When non-empty they
    /// replace the built-ins entirely.
    #[serde(default)]
    pub sections: Vec<SectionConfig>,

    /// Markdown rendering options
    #[serde(default)]
    pub render: RenderConfig,
}

/// A changelog section definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Heading shown in the changelog
    pub title: String,

    /// Labels that place an issue in this section. Empty = never matches.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl From<&SectionConfig> for Section {
    fn from(sc: &SectionConfig) -> Self {
        Section::new(sc.title.clone(), sc.labels.iter().cloned())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Markdown heading level for section titles (1-6)
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,

    /// Render issue numbers as links when the issue has a URL
    #[serde(default = "default_true")]
    pub link_issues: bool,
}

fn default_heading_level() -> u8 {
    2
}
fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            heading_level: default_heading_level(),
            link_issues: true,
        }
    }
}

impl AppConfig {
    /// Load configuration for a run.
    ///
    /// An explicit path must point at a readable file. Without one,
    /// `RELNOTES_CONFIG` (if set) takes precedence over `./relnotes.toml`,
    /// and a missing file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_required(path),
            None => Self::load_from(&Self::default_path()),
        }
    }

    /// The path used when none is given explicitly.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist. Any other read failure is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_file(path, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file found at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    /// Load configuration from a file that must exist.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse_file(path, &content)
    }

    fn parse_file(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml(content).map_err(|e| match e {
            ConfigError::ParseError { reason, .. } => ConfigError::ParseError {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            sections = config.sections.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The section registry this configuration selects: the configured
    /// sections in order, or the built-ins when none are configured.
    pub fn registry(&self) -> SectionRegistry {
        SectionRegistry::build(self.sections.iter().map(Section::from).collect())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        for (i, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "sections[{i}]: title cannot be empty"
                )));
            }
        }

        if !(1..=6).contains(&self.render.heading_level) {
            return Err(ConfigError::ValidationError(
                "render.heading_level must be between 1 and 6".into(),
            ));
        }

        Ok(())
    }

    /// A sample `relnotes.toml` with one custom section.
    pub fn sample_toml() -> String {
        let sample = Self {
            sections: vec![SectionConfig {
                title: "Features".into(),
                labels: vec!["enhancement".into()],
            }],
            render: RenderConfig::default(),
        };
        toml::to_string_pretty(&sample).unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
