use std::fmt;

use thiserror::Error;

use crate::validation::ValidationIssues;

use super::{
    SiteArchetype,
    context::{ConnectionKind, ContextError},
    port::ProvisioningError,
};

/// Everything that can stop a site from being provisioned
///
/// The first three variants are detected locally; none of them ever reaches the
/// provisioning service.
#[derive(Error, Debug, Clone)]
pub enum SiteError {
    /// The archetype discriminant was missing or not recognized
    #[error("{}", invalid_archetype_message(.value.as_deref()))]
    InvalidArchetype { value: Option<String> },

    /// The supplied fields do not fit the archetype's parameter set
    #[error("Invalid parameters for {archetype}: {issues}")]
    ParameterSetViolation {
        archetype: SiteArchetype,
        issues: ValidationIssues,
    },

    /// The connection cannot produce a credential the archetype needs
    #[error(
        "Creating a {archetype} requires an underlying Microsoft 365 group, which needs a \
         Microsoft Graph access token. A token cannot be acquired over a `{connection_kind}` \
         connection"
    )]
    CapabilityUnavailable {
        archetype: SiteArchetype,
        connection_kind: ConnectionKind,
    },

    /// The connection context failed to supply a locale or token
    #[error("Connection context failed while preparing {archetype}: {source}")]
    Context {
        archetype: SiteArchetype,
        #[source]
        source: ContextError,
    },

    /// The provisioning service rejected or failed the request
    #[error("Provisioning {archetype} failed: {source}")]
    Provisioning {
        archetype: SiteArchetype,
        #[source]
        source: ProvisioningError,
    },
}

fn invalid_archetype_message(value: Option<&str>) -> String {
    let expected = SiteArchetype::ALL
        .iter()
        .map(|a| a.cli_name())
        .collect::<Vec<_>>()
        .join(", ");

    match value {
        Some(value) => format!("Unknown site type `{value}` (expected one of: {expected})"),
        None => format!("No site type given (expected one of: {expected})"),
    }
}

impl SiteError {
    /// The archetype the failure belongs to, when one was resolved
    #[must_use]
    pub fn archetype(&self) -> Option<SiteArchetype> {
        match self {
            Self::InvalidArchetype { .. } => None,
            Self::ParameterSetViolation { archetype, .. }
            | Self::CapabilityUnavailable { archetype, .. }
            | Self::Context { archetype, .. }
            | Self::Provisioning { archetype, .. } => Some(*archetype),
        }
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArchetype { .. } | Self::ParameterSetViolation { .. } => {
                ErrorCategory::InvalidArgument
            }
            Self::CapabilityUnavailable { .. } => ErrorCategory::SecurityError,
            Self::Context { .. } => ErrorCategory::ConnectionError,
            Self::Provisioning { .. } => ErrorCategory::ProvisioningError,
        }
    }

    /// Whether the failure was detected before anything was sent to the provisioning service
    #[must_use]
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Provisioning { .. })
    }
}

/// Coarse reporting category of a [`SiteError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    SecurityError,
    ConnectionError,
    ProvisioningError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => f.write_str("invalid_argument"),
            Self::SecurityError => f.write_str("security_error"),
            Self::ConnectionError => f.write_str("connection_error"),
            Self::ProvisioningError => f.write_str("provisioning_error"),
        }
    }
}
