//! On-disk fixtures: config files and spool inspection.

use std::{fs, path::Path};

use tempfile::TempDir;

/// Writes `config.yaml` into `<temp_dir>/.config/siteprov` and creates
/// `<temp_dir>/spool`.
///
/// With no `config_yaml`, a minimal valid config pointing at that spool
/// directory is written.
///
/// # Example
/// ```rust
/// let temp_dir = TempDir::new().unwrap();
/// write_config_file(&temp_dir, None);
/// ```
pub fn write_config_file(temp_dir: &TempDir, config_yaml: Option<&str>) {
    let config_dir = temp_dir.path().join(".config").join("siteprov");
    fs::create_dir_all(&config_dir).unwrap();

    let spool_dir = temp_dir.path().join("spool");
    fs::create_dir_all(&spool_dir).unwrap();

    let yaml = config_yaml.map_or_else(
        || {
            format!(
                "tenant_url: {}\nspool_directory: {}\n",
                crate::constants::TEST_TENANT_URL,
                spool_dir.display()
            )
        },
        ToString::to_string,
    );

    fs::write(config_dir.join("config.yaml"), yaml).unwrap();
}

/// Parses every request document in `spool_dir`.
#[must_use]
pub fn spooled_documents(spool_dir: &Path) -> Vec<serde_yaml::Value> {
    if !spool_dir.exists() {
        return Vec::new();
    }

    fs::read_dir(spool_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
        .map(|path| serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap())
        .collect()
}
