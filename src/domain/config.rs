//! Generator configuration (`pake-config.toml`).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::AppError;

/// Default configuration file name at the project root.
pub const CONFIG_FILE: &str = "pake-config.toml";

/// When the overlay's `bundle.icon` list may be replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconPolicy {
    /// Always replace the icon list.
    #[default]
    Overwrite,
    /// Replace only when the list is missing or empty, or an icon was supplied explicitly.
    Preserve,
}

impl IconPolicy {
    pub fn label(self) -> &'static str {
        match self {
            IconPolicy::Overwrite => "overwrite",
            IconPolicy::Preserve => "preserve",
        }
    }

    /// Decide whether the icon list is written.
    pub fn should_assign(self, has_existing_icons: bool, explicit_icon: bool) -> bool {
        match self {
            IconPolicy::Overwrite => true,
            IconPolicy::Preserve => !has_existing_icons || explicit_icon,
        }
    }
}

impl fmt::Display for IconPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IconPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(IconPolicy::Overwrite),
            "preserve" => Ok(IconPolicy::Preserve),
            other => Err(AppError::config_error(format!(
                "Invalid icon policy '{}': must be one of overwrite, preserve",
                other
            ))),
        }
    }
}

/// Settings that tune how overlays are rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub icon_policy: IconPolicy,
    /// JSON pointers removed from every overlay before it is written.
    pub strip_fields: Vec<String>,
}

/// Parse and validate configuration content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;

    if let Some(bad) = config.strip_fields.iter().find(|p| !p.starts_with('/')) {
        return Err(AppError::config_error(format!(
            "Invalid strip field '{}': must be a JSON pointer starting with '/'",
            bad
        )));
    }

    Ok(config)
}
