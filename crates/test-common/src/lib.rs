//! Common test utilities shared across all siteprov crates.
//!
//! This crate provides standardized test helpers to eliminate code duplication
//! while maintaining test clarity and ergonomics.

pub mod config;
pub mod constants;
pub mod fixtures;
pub mod params;
pub mod service;

// Re-export the most commonly used items for convenience
pub use config::{test_config, test_config_with_connection, test_config_with_spool};
pub use constants::*;
pub use fixtures::{spooled_documents, write_config_file};
pub use params::{communication_site_params, team_site_no_group_params, team_site_params};
pub use service::{
    RecordingProvisioner, create_recording_service, create_spool_service, test_connection,
};

// Re-export commonly used external dependencies for convenience
pub use siteprov::{
    config::AppConfigBuilder,
    site::{SiteArchetype, SiteParameters},
};
pub use tempfile::TempDir;
