use crate::ports::RepositoryFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem> {
    repository: F,
}

impl<F: RepositoryFilesystem> AppContext<F> {
    pub fn new(repository: F) -> Self {
        Self { repository }
    }

    /// Filesystem rooted at the project being configured.
    pub fn repository(&self) -> &F {
        &self.repository
    }
}
