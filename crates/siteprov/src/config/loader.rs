pub mod yaml;

pub use self::yaml::Yaml;

use std::path::PathBuf;

use thiserror::Error;

use crate::{config::AppConfig, fs::filesystem::FileSystemError};

/// Port for loading configuration from disk
///
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait ConfigLoader: Send + Sync {
    /// Load configuration from standard locations
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] if no single config file can be found, read
    /// or parsed.
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError>;

    /// Find possible configuration file paths
    ///
    /// # Errors
    ///
    /// Returns the searched directory if it contains no config file.
    fn find_config_file_paths(&self) -> Result<Vec<PathBuf>, PathBuf>;
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error(transparent)]
    FileSystemError(#[from] FileSystemError),

    #[error("No configuration file found in: {}", .searched.display())]
    NotFound { searched: PathBuf },

    #[error("Multiple configuration files found: {}", .0.join(", "))]
    MultipleFound(Vec<String>),

    #[error(transparent)]
    ConfigError(#[from] ::config::ConfigError),
}

/// This trait allows for applying runtime CLI arguments on top of the configuration that the app
/// read from the config file.
///
pub trait ApplyToConfg {
    /// Implement this method such that the arguments in `args` are applied after/on top of the
    /// configuration that was loaded from the config file.
    ///
    fn apply_to_config(&self, config: AppConfig) -> AppConfig;
}
