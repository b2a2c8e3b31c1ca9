//! Generator configuration loading.

use std::path::Path;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, CONFIG_FILE, GeneratorConfig};
use crate::ports::RepositoryFilesystem;

/// Load `pake-config.toml` from the project root, or defaults when it is absent.
pub fn load_config<F: RepositoryFilesystem>(repository: &F) -> Result<GeneratorConfig, AppError> {
    if !repository.file_exists(CONFIG_FILE) {
        tracing::debug!("{} not found, using default configuration", CONFIG_FILE);
        return Ok(GeneratorConfig::default());
    }

    let content = repository.read_file(CONFIG_FILE)?;
    parse_config_content(&content)
}

/// Load a configuration file named explicitly by the caller. The file must exist.
pub fn load_config_file(path: &Path) -> Result<GeneratorConfig, AppError> {
    if !path.exists() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }

    let content = std::fs::read_to_string(path)?;
    parse_config_content(&content)
}
