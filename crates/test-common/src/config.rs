//! `AppConfig` test helpers to eliminate duplication across tests.

use crate::constants::{TEST_SPOOL_DIR, TEST_TENANT_URL, UNSET_TOKEN_ENV};
use siteprov::{
    config::{AppConfig, AppConfigBuilder},
    site::context::ConnectionKind,
};
use std::path::Path;

/// Creates a standard test configuration with colors disabled.
#[must_use]
pub fn test_config() -> AppConfig {
    base_builder().spool_directory(TEST_SPOOL_DIR).build()
}

/// Creates a test configuration spooling into `spool_dir`.
/// Used primarily in integration tests with temporary directories.
pub fn test_config_with_spool<P: AsRef<Path>>(spool_dir: P) -> AppConfig {
    base_builder()
        .spool_directory(spool_dir.as_ref())
        .build()
}

/// Creates a test configuration for a specific connection kind.
#[must_use]
pub fn test_config_with_connection(kind: ConnectionKind) -> AppConfig {
    base_builder()
        .spool_directory(TEST_SPOOL_DIR)
        .connection_kind(kind)
        .build()
}

fn base_builder() -> AppConfigBuilder {
    AppConfigBuilder::default()
        .tenant_url(TEST_TENANT_URL)
        .graph_token_env(UNSET_TOKEN_ENV)
        .use_colors(false)
}
