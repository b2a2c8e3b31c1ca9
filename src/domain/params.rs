//! Environment-provided application parameters.

use super::AppError;

/// Required parameters in the order they are checked.
pub const REQUIRED_VARS: [&str; 4] = ["URL", "NAME", "TITLE", "NAME_ZH"];

/// Optional short display name; falls back to `NAME_ZH`.
pub const SHORT_NAME_VAR: &str = "SHORT_NAME";

/// Presence of this variable marks the icon as explicitly supplied.
pub const ICON_VAR: &str = "ICON";

/// Validated parameters for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppParams {
    pub url: String,
    pub name: String,
    pub title: String,
    pub name_zh: String,
    pub short_name: Option<String>,
    pub explicit_icon: bool,
}

impl AppParams {
    /// Read parameters through `lookup`, failing on the first missing required one.
    ///
    /// `lookup` yields `Ok(None)` for an unset variable and an error for one that
    /// cannot be read. Each accepted value is reported to `report` as `"<VAR>: <value>"` before the
    /// next variable is checked, so output stops exactly where validation stops.
    pub fn from_lookup<L, R>(lookup: L, mut report: R) -> Result<Self, AppError>
    where
        L: Fn(&str) -> Result<Option<String>, AppError>,
        R: FnMut(&str),
    {
        let [url_var, name_var, title_var, name_zh_var] = REQUIRED_VARS;
        let mut require = |var: &'static str| -> Result<String, AppError> {
            let value = lookup(var)?.ok_or(AppError::MissingEnvVar(var))?;
            report(&format!("{}: {}", var, value));
            Ok(value)
        };
        let url = require(url_var)?;
        let name = require(name_var)?;
        let title = require(title_var)?;
        let name_zh = require(name_zh_var)?;

        let short_name = lookup(SHORT_NAME_VAR)?;
        match &short_name {
            Some(value) => report(&format!("{}: {}", SHORT_NAME_VAR, value)),
            None => tracing::debug!("{} not set, using NAME_ZH as display name", SHORT_NAME_VAR),
        }

        // Only presence matters; the icon value itself is never read.
        let explicit_icon = !matches!(lookup(ICON_VAR), Ok(None));

        Ok(Self { url, name, title, name_zh, short_name, explicit_icon })
    }

    /// Name written into the base app document's `productName`.
    ///
    /// An empty `SHORT_NAME` falls back to `NAME_ZH` like an unset one.
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().filter(|name| !name.is_empty()).unwrap_or(&self.name_zh)
    }

    /// Reverse-domain identifier of the packaged application.
    pub fn identifier(&self) -> String {
        format!("com.pake.{}", self.name)
    }

    /// Dash-separated package name used by Linux desktop integration.
    pub fn package_name(&self) -> String {
        format!("com-pake-{}", self.name)
    }
}
