//! Common test constants used across multiple test files.

/// Tenant used by every test configuration
pub const TEST_TENANT_URL: &str = "https://contoso.sharepoint.com";

/// Default spool directory for tests that never touch the disk
pub const TEST_SPOOL_DIR: &str = "/tmp/siteprov-test-spool";

/// Locale reported by the test connection
pub const TEST_LOCALE: u32 = 1033;

/// Graph token handed out by the test connection
pub const TEST_GRAPH_TOKEN: &str = "test-graph-token";

/// A token environment variable that no test ever sets
pub const UNSET_TOKEN_ENV: &str = "SITEPROV_TEST_TOKEN_THAT_IS_NEVER_SET";

/// Communication site used by the end-to-end scenarios
pub const NEWS_TITLE: &str = "Contoso News";
pub const NEWS_URL: &str = "https://contoso.sharepoint.com/sites/news";

/// Team site used by the end-to-end scenarios
pub const MARKETING_TITLE: &str = "Marketing";
pub const MARKETING_ALIAS: &str = "marketing";
