//! pake-config: rewrite Pake/Tauri packaging configuration from environment parameters.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use adapters::filesystem::FilesystemStore;
use app::AppContext;
use app::commands::generate as generate_command;

pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use domain::{AppError, AppParams, GeneratorConfig, IconPolicy, Platform, PlatformTarget};

/// Read the generator parameters from the process environment.
///
/// Prints `<VAR>: <value>` for each accepted parameter and stops at the first
/// missing required one. A value that is not valid UTF-8 is a configuration error.
pub fn validate_env() -> Result<AppParams, AppError> {
    AppParams::from_lookup(
        |key| match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(AppError::config_error(format!("{} is not valid UTF-8", key)))
            }
        },
        |line| println!("{}", line),
    )
}

/// Load generator configuration for the project at `root`.
///
/// An explicit `config_path` must exist; otherwise `pake-config.toml` in the
/// project root is used when present.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<GeneratorConfig, AppError> {
    match config_path {
        Some(path) => app::config::load_config_file(path),
        None => app::config::load_config(&FilesystemStore::new(root)?),
    }
}

/// Rewrite the configuration documents of the project at `root`.
pub fn generate(
    root: PathBuf,
    params: &AppParams,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let ctx = AppContext::new(FilesystemStore::new(root)?);
    generate_command::execute(&ctx, params, options)
}
