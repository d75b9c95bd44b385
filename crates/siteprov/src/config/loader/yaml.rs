use std::path::PathBuf;

use config::FileFormat;
use tracing::debug;

use crate::{config::AppConfig, fs::filesystem::FileSystem};

use super::{ConfigLoadError, ConfigLoader};

pub struct Yaml<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> Yaml<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ConfigLoader for Yaml<'_, F> {
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError> {
        let mut config_paths = self
            .find_config_file_paths()
            .map_err(|searched| ConfigLoadError::NotFound { searched })?;

        if config_paths.len() > 1 {
            return Err(ConfigLoadError::MultipleFound(
                config_paths
                    .into_iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>(),
            ));
        }

        let Some(config_path) = config_paths.pop() else {
            return Err(ConfigLoadError::NotFound {
                searched: self.fs.config_dir()?,
            });
        };
        debug!(path = %config_path.display(), "loading configuration");

        let file_contents = self.fs.read_file(&config_path)?;

        let config = config::Config::builder()
            .add_source(config::File::from_str(&file_contents, FileFormat::Yaml))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // `~` in the spool directory is expanded here so adapters only see absolute paths
        app_config.spool_directory = self.fs.expand_path(&app_config.spool_directory)?;

        Ok(app_config)
    }

    fn find_config_file_paths(&self) -> Result<Vec<PathBuf>, PathBuf> {
        let mut paths = Vec::new();

        if let Ok(config_dir) = self.fs.config_dir() {
            let config_yaml = config_dir.join("config.yaml");
            let config_yml = config_dir.join("config.yml");

            if self.fs.path_exists(&config_yaml) {
                paths.push(config_yaml);
            }
            if self.fs.path_exists(&config_yml) {
                paths.push(config_yml);
            }

            if paths.is_empty() {
                return Err(config_dir);
            }
        }

        Ok(paths)
    }
}
