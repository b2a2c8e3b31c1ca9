//! Filesystem adapter for the `RepositoryFilesystem` port.
//!
//! `FilesystemStore` owns the project root and refuses any path that resolves
//! outside of it.

mod repository_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at the project directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at `root`, made absolute against the working directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, AppError> {
        let root = lexical_normalize(&std::path::absolute(root)?);
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a project-relative path onto the root.
    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Reject `path` when its logical form leaves the project root.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        if !lexical_normalize(&full_path).starts_with(lexical_normalize(&self.root)) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }
        Ok(())
    }
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// A `..` with no preceding normal component is kept on relative paths and
/// dropped at the filesystem root.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::CurDir | Component::ParentDir) | None => {
                    normalized.push("..");
                }
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component.as_os_str());
            }
        }
    }
    normalized
}
