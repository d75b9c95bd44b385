use assert_cmd::Command;
use test_common::{TempDir, write_config_file};

pub const GRAPH_TOKEN_ENV: &str = "SITEPROV_GRAPH_TOKEN";

// Helper to create a temporary config environment with a spool directory
#[must_use]
pub fn setup_default_test_config() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_config_file(&temp_dir, None);
    temp_dir
}

// Helper to create a temporary config environment from raw yaml
#[must_use]
pub fn setup_test_config(config_yaml: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_config_file(&temp_dir, Some(config_yaml));
    temp_dir
}

// Helper function to get a command instance with environment variables pointing to our test config
#[must_use]
pub fn get_command_with_test_config(temp_dir: &TempDir) -> Command {
    let mut cmd = get_command();

    cmd.env(
        "SITEPROV_CONFIG_DIR",
        temp_dir.path().join(".config").join("siteprov"),
    )
    .env_remove(GRAPH_TOKEN_ENV)
    .env_remove("SITEPROV_LOG");

    cmd
}

// Helper function to get a command instance
#[must_use]
pub fn get_command() -> Command {
    Command::cargo_bin("siteprov-cli").unwrap()
}
