//! Theme configuration.
//!
//! The renderer needs two things besides the parsed page: the location of an
//! external stylesheet whose contents are embedded verbatim, and three hue
//! angles exposed to that stylesheet as CSS custom properties.
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. stock defaults ([`SiteConfig::default`])
//! 2. an optional TOML file passed with `--config`
//! 3. command-line overrides (`--theme`, `--background-hue`, ...)
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [theme]
//! stylesheet = "theme.css"  # Embedded verbatim into the page
//!
//! [theme.hues]
//! background = 220          # Degrees, 0-359
//! text = 220
//! accent = 30
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::source::{SourceBuffer, SourceError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("TOML parse error in '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Config validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::Source(err) => err.exit_code(),
            ConfigError::Toml { .. } | ConfigError::Validation(_) => 2,
        }
    }
}

/// Full set of process-wide settings, built once and passed down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Stylesheet and color settings.
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hues = &self.theme.hues;
        for (name, value) in [
            ("background", hues.background),
            ("text", hues.text),
            ("accent", hues.accent),
        ] {
            if value >= FULL_TURN {
                return Err(ConfigError::Validation(format!(
                    "theme.hues.{name} must be 0-359, got {value}"
                )));
            }
        }
        if self.theme.stylesheet.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "theme.stylesheet must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, overrides: &ThemeOverrides) {
        if let Some(stylesheet) = &overrides.stylesheet {
            self.theme.stylesheet = stylesheet.clone();
        }
        if let Some(hue) = overrides.background_hue {
            self.theme.hues.background = hue;
        }
        if let Some(hue) = overrides.text_hue {
            self.theme.hues.text = hue;
        }
        if let Some(hue) = overrides.accent_hue {
            self.theme.hues.accent = hue;
        }
    }
}

/// Stylesheet location and hue settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Stylesheet embedded verbatim into the rendered page. `-` reads stdin.
    pub stylesheet: PathBuf,
    /// Hue angles exposed as CSS custom properties.
    pub hues: HueConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET),
            hues: HueConfig::default(),
        }
    }
}

/// Hue angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HueConfig {
    pub background: u16,
    pub text: u16,
    pub accent: u16,
}

impl Default for HueConfig {
    fn default() -> Self {
        Self {
            background: 220,
            text: 220,
            accent: 30,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ThemeOverrides {
    pub stylesheet: Option<PathBuf>,
    pub background_hue: Option<u16>,
    pub text_hue: Option<u16>,
    pub accent_hue: Option<u16>,
}

pub const DEFAULT_STYLESHEET: &str = "theme.css";

const FULL_TURN: u16 = 360;

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse and validate config from TOML text.
///
/// `origin` names the file in error messages.
pub fn parse_config(origin: &str, content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content).map_err(|source| ConfigError::Toml {
        path: origin.to_string(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file.
///
/// Missing keys take stock defaults, unknown keys are rejected. A file that
/// cannot be opened or read fails the same way a missing source document does.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let buffer = SourceBuffer::read(path)?;
    parse_config(buffer.name(), buffer.text())
}

/// Returns a fully-commented stock config file with all keys and explanations.
///
/// Used by the `--gen-config` flag.
pub fn stock_config_toml() -> &'static str {
    r##"# simple-man configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Pass this file with --config. Command-line flags (--theme,
# --background-hue, --text-hue, --accent-hue) override what is set here.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Stylesheet embedded verbatim into the generated page.
# Relative paths are resolved against the working directory.
stylesheet = "theme.css"

# Hue angles in degrees (0-359), exposed to the stylesheet as
# --hue-background, --hue-text and --hue-accent.
[theme.hues]
background = 220
text = 220
accent = 30
"##
}

/// Generate the CSS custom properties carrying the configured hues.
pub fn generate_hue_css(hues: &HueConfig) -> String {
    format!(
        r#":root {{
    --hue-background: {background}deg;
    --hue-text: {text}deg;
    --hue-accent: {accent}deg;
}}"#,
        background = hues.background,
        text = hues.text,
        accent = hues.accent,
    )
}
