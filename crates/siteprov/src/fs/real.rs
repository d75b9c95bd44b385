// Real file system adapter implementation

use std::{
    fs,
    path::{Path, PathBuf},
};

use etcetera::{AppStrategy, AppStrategyArgs, choose_app_strategy};

use super::filesystem::{FileSystem, FileSystemError};

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "SITEPROV_CONFIG_DIR";

/// Real file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_file(&self, path: &Path) -> Result<String, FileSystemError> {
        Ok(fs::read_to_string(path)?)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), FileSystemError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(fs::write(path, data)?)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn expand_path(&self, path: &Path) -> Result<PathBuf, FileSystemError> {
        let binding = path.to_string_lossy();
        let expanded = shellexpand::tilde(&binding);

        if expanded.starts_with('~') {
            let names_other_user = path
                .components()
                .next()
                .is_some_and(|first| first.as_os_str() != "~");

            return Err(if names_other_user {
                FileSystemError::UnsupportedTilde(path.to_path_buf())
            } else {
                FileSystemError::HomeDirNotFound
            });
        }

        Ok(PathBuf::from(expanded.as_ref()))
    }

    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        let entries = fs::read_dir(path)?;

        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry?.path());
        }

        Ok(paths)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        Ok(fs::create_dir_all(path)?)
    }

    fn config_dir(&self) -> Result<PathBuf, FileSystemError> {
        // Check for environment variable override first
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        choose_app_strategy(AppStrategyArgs {
            top_level_domain: "dev".to_string(),
            author: "siteprov".to_string(),
            app_name: "siteprov".to_string(),
        })
        .map(|xdg| xdg.config_dir())
        .map_err(|_| FileSystemError::HomeDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_path_exists() {
        let fs = RealFileSystem;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        assert!(!fs.path_exists(&file_path));

        File::create(&file_path).unwrap();

        assert!(fs.path_exists(&file_path));
    }

    #[test]
    fn test_list_directory() {
        let fs = RealFileSystem;

        let dir = tempdir().unwrap();
        let file1 = dir.path().join("file1.yaml");
        let file2 = dir.path().join("file2.yaml");

        File::create(&file1).unwrap();
        File::create(&file2).unwrap();

        let paths = fs.list_directory(dir.path()).unwrap();

        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&file1));
        assert!(paths.contains(&file2));
    }

    #[test]
    fn test_write_then_read_file() {
        let fs = RealFileSystem;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("spooled.yaml");

        fs.write_file(&file_path, b"title: Contoso News").unwrap();

        assert_eq!(fs.read_file(&file_path).unwrap(), "title: Contoso News");
    }

    #[test]
    fn test_read_missing_file() {
        let fs = RealFileSystem;

        let dir = tempdir().unwrap();
        let err = fs.read_file(&dir.path().join("missing.yaml")).unwrap_err();

        assert!(matches!(err, FileSystemError::IoError(_)));
    }

    #[test]
    fn test_create_dir_all() {
        let fs = RealFileSystem;

        let dir = tempdir().unwrap();
        let spool = dir.path().join("a").join("b").join("spool");

        fs.create_dir_all(&spool).unwrap();

        assert!(spool.is_dir());
    }

    #[test]
    fn test_expand_path_leaves_absolute_paths_alone() {
        let fs = RealFileSystem;

        let expanded = fs.expand_path(Path::new("/var/spool/siteprov")).unwrap();

        assert_eq!(expanded, PathBuf::from("/var/spool/siteprov"));
    }

    #[test]
    fn test_expand_path_expands_tilde() {
        let fs = RealFileSystem;

        if let Ok(expanded) = fs.expand_path(Path::new("~/spool")) {
            assert!(!expanded.starts_with("~"));
            assert!(expanded.ends_with("spool"));
        }
    }

    #[test]
    fn test_expand_path_rejects_other_users_home() {
        let fs = RealFileSystem;

        let err = fs.expand_path(Path::new("~otheruser/spool")).unwrap_err();

        assert!(matches!(
            err,
            FileSystemError::UnsupportedTilde(ref path) if path == Path::new("~otheruser/spool")
        ));
        assert!(err.to_string().contains("~otheruser/spool"));
    }
}
