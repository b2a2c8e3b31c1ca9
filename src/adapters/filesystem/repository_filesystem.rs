//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemStore;

impl RepositoryFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        tracing::debug!("Writing {}", full_path.display());
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn copy_file(&self, from: &str, to: &str) -> Result<(), AppError> {
        let source = self.resolve_path(from);
        let destination = self.resolve_path(to);
        self.validate_path_within_root(&source)?;
        self.validate_path_within_root(&destination)?;
        tracing::debug!("Copying {} to {}", source.display(), destination.display());
        fs::copy(source, destination).map(|_| ()).map_err(AppError::from)
    }

    fn file_exists(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.exists()
    }
}
