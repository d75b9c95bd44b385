use async_trait::async_trait;
use tracing::debug;

use crate::{
    config::AppConfig,
    site::{
        Lcid,
        context::{ConnectionContext, ConnectionKind, ContextError, GraphToken},
    },
};

/// A [`ConnectionContext`] described by the application configuration
///
/// The connection kind and session locale come from the config file (or CLI
/// overrides); the Graph token is read from the environment variable named by
/// `graph_token_env`.
#[derive(Debug, Clone)]
pub struct ConfiguredConnection {
    kind: ConnectionKind,
    locale: Lcid,
    graph_token: Option<GraphToken>,
    token_source: String,
}

impl ConfiguredConnection {
    #[must_use]
    pub fn new(
        kind: ConnectionKind,
        locale: Lcid,
        graph_token: Option<GraphToken>,
        token_source: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            locale,
            graph_token,
            token_source: token_source.into(),
        }
    }

    /// Build the connection from config, reading the token from the process environment
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let token_env = config.graph_token_env();
        let graph_token = std::env::var(token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .map(GraphToken::new);

        debug!(
            connection_kind = %config.connection_kind(),
            locale = %config.locale(),
            token_env,
            token_present = graph_token.is_some(),
            "connection context configured",
        );

        Self::new(
            config.connection_kind(),
            config.locale(),
            graph_token,
            token_env,
        )
    }
}

#[async_trait]
impl ConnectionContext for ConfiguredConnection {
    async fn current_locale(&self) -> Result<Lcid, ContextError> {
        Ok(self.locale)
    }

    fn connection_kind(&self) -> ConnectionKind {
        self.kind
    }

    async fn acquire_graph_token(&self) -> Result<GraphToken, ContextError> {
        if !self.kind.can_acquire_graph_token() {
            return Err(ContextError::TokenUnavailable {
                reason: format!("`{}` connections carry no Graph permissions", self.kind),
            });
        }

        self.graph_token
            .clone()
            .ok_or_else(|| ContextError::TokenUnavailable {
                reason: format!("environment variable `{}` is not set", self.token_source),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfigBuilder;

    #[tokio::test]
    async fn test_returns_configured_locale() {
        let connection =
            ConfiguredConnection::new(ConnectionKind::Interactive, Lcid::new(1031), None, "TOKEN");

        assert_eq!(connection.current_locale().await.unwrap(), Lcid::new(1031));
        assert_eq!(connection.connection_kind(), ConnectionKind::Interactive);
    }

    #[tokio::test]
    async fn test_hands_out_configured_token() {
        let connection = ConfiguredConnection::new(
            ConnectionKind::AppOnlyGraph,
            Lcid::ENGLISH_US,
            Some(GraphToken::new("graph-token")),
            "TOKEN",
        );

        let token = connection.acquire_graph_token().await.unwrap();
        assert_eq!(token.secret(), "graph-token");
    }

    #[tokio::test]
    async fn test_missing_token_names_environment_variable() {
        let connection = ConfiguredConnection::new(
            ConnectionKind::Interactive,
            Lcid::ENGLISH_US,
            None,
            "SITEPROV_GRAPH_TOKEN",
        );

        let err = connection.acquire_graph_token().await.unwrap_err();
        assert!(err.to_string().contains("SITEPROV_GRAPH_TOKEN"));
    }

    #[tokio::test]
    async fn test_acs_connection_never_hands_out_token() {
        let connection = ConfiguredConnection::new(
            ConnectionKind::AppOnlyAcs,
            Lcid::ENGLISH_US,
            Some(GraphToken::new("ignored")),
            "TOKEN",
        );

        let err = connection.acquire_graph_token().await.unwrap_err();
        assert!(matches!(err, ContextError::TokenUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_from_config_reads_kind_and_locale() {
        let config = AppConfigBuilder::default()
            .tenant_url("https://contoso.sharepoint.com")
            .spool_directory("/tmp/spool")
            .connection_kind(ConnectionKind::ManagedIdentity)
            .locale(Lcid::new(1043))
            .graph_token_env("SITEPROV_TEST_TOKEN_THAT_IS_NEVER_SET")
            .build();

        let connection = ConfiguredConnection::from_config(&config);

        assert_eq!(connection.connection_kind(), ConnectionKind::ManagedIdentity);
        assert_eq!(connection.current_locale().await.unwrap(), Lcid::new(1043));
        assert!(connection.acquire_graph_token().await.is_err());
    }
}
