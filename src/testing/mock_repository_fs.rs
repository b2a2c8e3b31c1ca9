//! Test double for `RepositoryFilesystem`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
///
/// Every successful write or copy destination is appended to `writes`, so tests
/// can assert on write order.
#[derive(Debug, Default)]
pub struct MockRepositoryFs {
    pub files: RefCell<BTreeMap<String, String>>,
    pub writes: RefCell<Vec<String>>,
    /// Paths whose writes fail with `PermissionDenied`.
    pub read_only: RefCell<Vec<String>>,
}

impl MockRepositoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        self
    }

    pub fn with_read_only(self, path: &str) -> Self {
        self.read_only.borrow_mut().push(path.to_string());
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn json(&self, path: &str) -> serde_json::Value {
        let content = self.content(path).unwrap_or_else(|| panic!("{} was not written", path));
        serde_json::from_str(&content).expect("valid JSON")
    }

    fn check_writable(&self, path: &str) -> Result<(), AppError> {
        if self.read_only.borrow().iter().any(|p| p == path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("Mock file is read-only: {}", path),
            )));
        }
        Ok(())
    }
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.check_writable(path)?;
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        self.writes.borrow_mut().push(path.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &str, to: &str) -> Result<(), AppError> {
        let content = self.read_file(from)?;
        self.write_file(to, &content)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }
}
