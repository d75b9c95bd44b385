//! File system port
//!
//! Configuration loading and the spool provisioner reach the disk only
//! through [`FileSystem`].

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

/// Port for file system operations (Hexagonal Architecture)
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// Read a UTF-8 file into a string
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError`] if the file is missing, unreadable or not UTF-8.
    fn read_file(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Write `data` to `path`, replacing any existing file
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError`] if the file cannot be written.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), FileSystemError>;

    fn path_exists(&self, path: &Path) -> bool;

    /// Expand a leading `~` to the user's home directory
    ///
    /// The path does not need to exist.
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError::HomeDirNotFound`] if the home directory cannot be
    /// determined, or [`FileSystemError::UnsupportedTilde`] for `~user` paths.
    fn expand_path(&self, path: &Path) -> Result<PathBuf, FileSystemError>;

    /// Paths of the entries directly inside `path`, in no particular order
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError`] if `path` is not a readable directory.
    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError>;

    /// Create a directory and all of its missing parents
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError`] if any component cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Directory holding `config.yaml`
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError::HomeDirNotFound`] if no home directory is known.
    fn config_dir(&self) -> Result<PathBuf, FileSystemError>;
}

/// Errors that can occur during file system operations
#[derive(Error, Debug, Clone)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    IoError(Arc<io::Error>),

    /// Home directory could not be determined (needed for path expansion)
    #[error("Home directory not found")]
    HomeDirNotFound,

    /// Only the current user's `~` is expanded; `~user` forms are not
    #[error("Cannot expand `{}`: only `~` and `~/...` are supported", .0.display())]
    UnsupportedTilde(PathBuf),
}

impl From<io::Error> for FileSystemError {
    fn from(error: io::Error) -> Self {
        Self::IoError(Arc::new(error))
    }
}

#[cfg(test)]
impl MockFileSystem {
    pub(crate) fn mock_read_file<P, S>(&mut self, path: P, content: S)
    where
        PathBuf: From<P>,
        S: ToString,
    {
        let path_buf = PathBuf::from(path);
        let content_string = content.to_string();
        self.expect_read_file()
            .with(mockall::predicate::eq(path_buf))
            .returning(move |_| Ok(content_string.clone()));
    }

    pub(crate) fn mock_path_exists<P>(&mut self, path: P, exists: bool)
    where
        PathBuf: From<P>,
    {
        self.expect_path_exists()
            .with(mockall::predicate::eq(PathBuf::from(path)))
            .returning(move |_| exists);
    }

    pub(crate) fn mock_config_dir_ok<P>(&mut self, path: P)
    where
        PathBuf: From<P>,
    {
        let p = PathBuf::from(path);
        self.expect_config_dir().return_once(|| Ok(p));
    }

    /// Set up a complete mock configuration file scenario
    ///
    /// The config file is found as `config.yaml` in `config_dir`; `config.yml` is
    /// reported missing.
    pub(crate) fn mock_config_file(&mut self, config_dir: &Path, config_yaml: &str) {
        let config_path = config_dir.join("config.yaml");

        self.mock_config_dir_ok(config_dir);
        self.mock_path_exists(&config_path, true);
        self.mock_read_file(&config_path, config_yaml);

        self.mock_path_exists(config_dir.join("config.yml"), false);
    }

    pub(crate) fn mock_expand_path<P>(&mut self, input: P, output: P)
    where
        PathBuf: From<P>,
    {
        let input = PathBuf::from(input);
        let output = PathBuf::from(output);

        self.expect_expand_path()
            .with(mockall::predicate::eq(input))
            .return_once(|_| Ok(output));
    }
}
