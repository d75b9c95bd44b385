//! Connection context port
//!
//! The dispatcher reads three things from the connection it runs over: the
//! locale of the current session, the kind of connection, and (for group-backed
//! sites) a Microsoft Graph access token.

pub mod configured;

use std::{fmt, str::FromStr};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Lcid;

pub use configured::ConfiguredConnection;

/// Port for the authenticated connection (Hexagonal Architecture)
///
/// Read-only from the dispatcher's point of view.
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
#[async_trait]
pub trait ConnectionContext: Send + Sync {
    /// Locale of the site the connection points at
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::LocaleUnavailable`] if the locale cannot be read.
    async fn current_locale(&self) -> Result<Lcid, ContextError>;

    /// How the connection was authenticated
    fn connection_kind(&self) -> ConnectionKind;

    /// Acquire an access token for Microsoft Graph
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::TokenUnavailable`] if no token can be produced.
    async fn acquire_graph_token(&self) -> Result<GraphToken, ContextError>;
}

/// How a connection was authenticated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    #[default]
    Interactive,
    DeviceLogin,
    Credentials,
    AppOnlyAcs,
    AppOnlyAzureAd,
    AppOnlyGraph,
    ManagedIdentity,
    AccessToken,
}

impl ConnectionKind {
    pub const ALL: [Self; 8] = [
        Self::Interactive,
        Self::DeviceLogin,
        Self::Credentials,
        Self::AppOnlyAcs,
        Self::AppOnlyAzureAd,
        Self::AppOnlyGraph,
        Self::ManagedIdentity,
        Self::AccessToken,
    ];

    /// Whether a Microsoft Graph token can be obtained over this kind of connection
    ///
    /// SharePoint ACS app-only credentials are scoped to SharePoint and carry no
    /// Graph permissions.
    #[must_use]
    pub fn can_acquire_graph_token(self) -> bool {
        !matches!(self, Self::AppOnlyAcs)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::DeviceLogin => "device-login",
            Self::Credentials => "credentials",
            Self::AppOnlyAcs => "app-only-acs",
            Self::AppOnlyAzureAd => "app-only-azure-ad",
            Self::AppOnlyGraph => "app-only-graph",
            Self::ManagedIdentity => "managed-identity",
            Self::AccessToken => "access-token",
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-").to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("unknown connection kind `{s}`"))
    }
}

/// A Microsoft Graph access token
///
/// The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct GraphToken(String);

impl GraphToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GraphToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GraphToken(<redacted>)")
    }
}

/// Errors raised by a [`ConnectionContext`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContextError {
    #[error("No Microsoft Graph access token is available: {reason}")]
    TokenUnavailable { reason: String },

    #[error("The current locale could not be determined: {reason}")]
    LocaleUnavailable { reason: String },
}
