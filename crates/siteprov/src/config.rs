pub mod loader;
pub mod validate;

pub use self::loader::{ApplyToConfg, ConfigLoadError, ConfigLoader, Yaml as YamlLoader};

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::site::{Lcid, context::ConnectionKind};

const VERBOSE_DEFAULT: bool = false;
const USE_COLORS_DEFAULT: bool = true;
pub const DEFAULT_GRAPH_TOKEN_ENV: &str = "SITEPROV_GRAPH_TOKEN";
pub const DEFAULT_AWAIT_TIMEOUT_SECS: u64 = 300;

/// Comprehensive application configuration that combines file config and CLI args
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    // Core settings
    pub(crate) tenant_url: String,
    pub(crate) spool_directory: PathBuf,

    // Connection settings
    #[serde(default)]
    pub(crate) connection_kind: ConnectionKind,

    #[serde(default = "default_locale")]
    pub(crate) locale: Lcid,

    #[serde(default = "default_graph_token_env")]
    pub(crate) graph_token_env: String,

    #[serde(default = "default_await_timeout_secs")]
    pub(crate) await_timeout_secs: u64,

    // UI settings
    #[serde(default)]
    pub(crate) verbose: bool,

    #[serde(default = "default_use_colors")]
    pub(crate) use_colors: bool,
}

fn default_locale() -> Lcid {
    Lcid::ENGLISH_US
}
fn default_graph_token_env() -> String {
    DEFAULT_GRAPH_TOKEN_ENV.to_string()
}
fn default_await_timeout_secs() -> u64 {
    DEFAULT_AWAIT_TIMEOUT_SECS
}
fn default_use_colors() -> bool {
    USE_COLORS_DEFAULT
}

impl AppConfig {
    #[must_use]
    pub fn tenant_url(&self) -> &str {
        &self.tenant_url
    }

    #[must_use]
    pub fn spool_directory(&self) -> &Path {
        &self.spool_directory
    }

    #[must_use]
    pub fn connection_kind(&self) -> ConnectionKind {
        self.connection_kind
    }

    #[must_use]
    pub fn locale(&self) -> Lcid {
        self.locale
    }

    /// Name of the environment variable holding the Microsoft Graph token
    #[must_use]
    pub fn graph_token_env(&self) -> &str {
        &self.graph_token_env
    }

    #[must_use]
    pub fn await_timeout(&self) -> Duration {
        Duration::from_secs(self.await_timeout_secs)
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    pub fn connection_kind_mut(&mut self) -> &mut ConnectionKind {
        &mut self.connection_kind
    }

    pub fn locale_mut(&mut self) -> &mut Lcid {
        &mut self.locale
    }

    pub fn spool_directory_mut(&mut self) -> &mut PathBuf {
        &mut self.spool_directory
    }

    pub fn verbose_mut(&mut self) -> &mut bool {
        &mut self.verbose
    }

    pub fn use_colors_mut(&mut self) -> &mut bool {
        &mut self.use_colors
    }
}

/// Builder pattern for `AppConfig` testing
///
#[derive(Default, Debug)]
pub struct AppConfigBuilder {
    tenant_url: String,
    spool_directory: PathBuf,
    connection_kind: Option<ConnectionKind>,
    locale: Option<Lcid>,
    graph_token_env: Option<String>,
    await_timeout_secs: Option<u64>,
    verbose: Option<bool>,
    use_colors: Option<bool>,
}

impl AppConfigBuilder {
    #[must_use]
    pub fn tenant_url(mut self, tenant_url: &str) -> Self {
        self.tenant_url = tenant_url.to_string();
        self
    }

    #[must_use]
    pub fn spool_directory<D>(mut self, spool_directory: D) -> Self
    where
        D: AsRef<std::ffi::OsStr>,
    {
        self.spool_directory = PathBuf::from(spool_directory.as_ref());
        self
    }

    #[must_use]
    pub fn connection_kind(mut self, kind: ConnectionKind) -> Self {
        self.connection_kind = Some(kind);
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: Lcid) -> Self {
        self.locale = Some(locale);
        self
    }

    #[must_use]
    pub fn graph_token_env(mut self, name: &str) -> Self {
        self.graph_token_env = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn await_timeout_secs(mut self, secs: u64) -> Self {
        self.await_timeout_secs = Some(secs);
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    #[must_use]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = Some(use_colors);
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        AppConfig {
            tenant_url: self.tenant_url,
            spool_directory: self.spool_directory,
            connection_kind: self.connection_kind.unwrap_or_default(),
            locale: self.locale.unwrap_or_else(default_locale),
            graph_token_env: self.graph_token_env.unwrap_or_else(default_graph_token_env),
            await_timeout_secs: self
                .await_timeout_secs
                .unwrap_or(DEFAULT_AWAIT_TIMEOUT_SECS),
            verbose: self.verbose.unwrap_or(VERBOSE_DEFAULT),
            use_colors: self.use_colors.unwrap_or(USE_COLORS_DEFAULT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_builder() {
        let config = AppConfigBuilder::default()
            .tenant_url("https://contoso.sharepoint.com")
            .spool_directory("/var/spool/siteprov")
            .connection_kind(ConnectionKind::AppOnlyGraph)
            .locale(Lcid::new(1031))
            .graph_token_env("GRAPH_TOKEN")
            .await_timeout_secs(30)
            .verbose(true)
            .use_colors(false)
            .build();

        assert_eq!(config.tenant_url(), "https://contoso.sharepoint.com");
        assert_eq!(config.spool_directory(), Path::new("/var/spool/siteprov"));
        assert_eq!(config.connection_kind(), ConnectionKind::AppOnlyGraph);
        assert_eq!(config.locale(), Lcid::new(1031));
        assert_eq!(config.graph_token_env(), "GRAPH_TOKEN");
        assert_eq!(config.await_timeout(), Duration::from_secs(30));
        assert!(config.verbose());
        assert!(!config.use_colors());
    }

    #[test]
    fn test_default_values() {
        let config = AppConfigBuilder::default()
            .tenant_url("https://contoso.sharepoint.com")
            .spool_directory("/var/spool/siteprov")
            .build();

        assert_eq!(config.connection_kind(), ConnectionKind::Interactive);
        assert_eq!(config.locale(), Lcid::ENGLISH_US);
        assert_eq!(config.graph_token_env(), DEFAULT_GRAPH_TOKEN_ENV);
        assert_eq!(config.await_timeout().as_secs(), DEFAULT_AWAIT_TIMEOUT_SECS);
        assert_eq!(config.verbose(), VERBOSE_DEFAULT);
        assert_eq!(config.use_colors(), USE_COLORS_DEFAULT);
    }

    #[test]
    fn test_mutable_accessors() {
        let mut config = AppConfigBuilder::default()
            .tenant_url("https://contoso.sharepoint.com")
            .spool_directory("/old/spool")
            .build();

        *config.connection_kind_mut() = ConnectionKind::AppOnlyAcs;
        *config.locale_mut() = Lcid::new(1053);
        *config.spool_directory_mut() = PathBuf::from("/new/spool");
        *config.verbose_mut() = true;
        *config.use_colors_mut() = false;

        assert_eq!(config.connection_kind(), ConnectionKind::AppOnlyAcs);
        assert_eq!(config.locale(), Lcid::new(1053));
        assert_eq!(config.spool_directory(), Path::new("/new/spool"));
        assert!(config.verbose());
        assert!(!config.use_colors());
    }

    #[test]
    fn test_serde_deserialization() {
        let yaml = r#"
            tenant_url: "https://contoso.sharepoint.com"
            spool_directory: "/var/spool/siteprov"
            connection_kind: app-only-acs
            locale: 1036
            graph_token_env: "CONTOSO_GRAPH_TOKEN"
            await_timeout_secs: 45
            verbose: true
            use_colors: false
        "#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.connection_kind, ConnectionKind::AppOnlyAcs);
        assert_eq!(config.locale, Lcid::new(1036));
        assert_eq!(config.graph_token_env, "CONTOSO_GRAPH_TOKEN");
        assert_eq!(config.await_timeout_secs, 45);
        assert!(config.verbose);
        assert!(!config.use_colors);
    }

    #[test]
    fn test_serde_partial_deserialization() {
        let yaml = r#"
            tenant_url: "https://contoso.sharepoint.com"
            spool_directory: "~/spool"
        "#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.spool_directory, PathBuf::from("~/spool"));
        assert_eq!(config.connection_kind, ConnectionKind::Interactive);
        assert_eq!(config.locale, Lcid::ENGLISH_US);
        assert_eq!(config.graph_token_env, DEFAULT_GRAPH_TOKEN_ENV);
        assert!(config.use_colors);
    }

    #[test]
    fn test_missing_tenant_url_fails() {
        let yaml = r#"
            spool_directory: "/var/spool/siteprov"
        "#;

        assert!(serde_yaml::from_str::<AppConfig>(yaml).is_err());
    }
}
