mod mock_repository_fs;

pub use mock_repository_fs::MockRepositoryFs;
