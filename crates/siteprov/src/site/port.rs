//! Site provisioning port and error types
//!
//! This module defines the port the dispatcher submits finished creation
//! requests to. The provisioning service owns the actual, potentially
//! long-running, site creation; polling, retry policy and transport are its
//! concern.

use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use super::{
    context::GraphToken,
    request::{
        CommunicationSiteCreationRequest, CompletionMode, TeamNoGroupSiteCreationRequest,
        TeamSiteCreationRequest,
    },
};

/// Port for site provisioning (Hexagonal Architecture)
///
/// Each call creates one site. With [`CompletionMode::AwaitCompletion`] the
/// implementation blocks until the site is ready; with
/// [`CompletionMode::FireAndForget`] it returns as soon as creation is accepted.
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
#[async_trait]
pub trait SiteProvisioner: Send + Sync {
    /// Create a communication site
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError`] if the service rejects or fails the request.
    async fn create_communication_site(
        &self,
        request: &CommunicationSiteCreationRequest,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError>;

    /// Create a team site backed by a Microsoft 365 group
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError`] if the service rejects or fails the request.
    async fn create_team_site(
        &self,
        request: &TeamSiteCreationRequest,
        graph_token: &GraphToken,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError>;

    /// Create a team site without a Microsoft 365 group
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError`] if the service rejects or fails the request.
    async fn create_team_site_no_group(
        &self,
        request: &TeamNoGroupSiteCreationRequest,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError>;
}

/// Address of a site, exactly as the provisioning service reported it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SiteAddress(String);

impl SiteAddress {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SiteAddress {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl From<&str> for SiteAddress {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

/// How far creation got before the provisioning call returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    /// The site exists and is ready to use
    Completed,

    /// Creation was accepted and continues in the background
    Accepted,
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => f.write_str("completed"),
            Self::Accepted => f.write_str("accepted"),
        }
    }
}

/// Successful result of a provisioning call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningOutcome {
    pub(crate) address: SiteAddress,
    pub(crate) completion: Completion,
}

impl ProvisioningOutcome {
    #[must_use]
    pub fn new(address: impl Into<SiteAddress>, completion: Completion) -> Self {
        Self {
            address: address.into(),
            completion,
        }
    }

    #[must_use]
    pub fn completed(address: impl Into<SiteAddress>) -> Self {
        Self::new(address, Completion::Completed)
    }

    #[must_use]
    pub fn accepted(address: impl Into<SiteAddress>) -> Self {
        Self::new(address, Completion::Accepted)
    }

    #[must_use]
    pub fn address(&self) -> &SiteAddress {
        &self.address
    }

    #[must_use]
    pub fn completion(&self) -> Completion {
        self.completion
    }
}

/// Failures reported by a [`SiteProvisioner`]
///
/// The dispatcher passes these through untouched.
#[derive(Error, Debug, Clone)]
pub enum ProvisioningError {
    /// A site already exists (or is being created) at the address
    #[error("A site already exists at {address}")]
    Conflict { address: String },

    /// The service refused the request
    #[error("The provisioning service rejected the request: {message}")]
    Rejected { message: String },

    /// The site did not finish provisioning in time
    #[error("Provisioning did not complete within {after:?}")]
    TimedOut { after: Duration },

    /// The call was cancelled before it finished
    #[error("Provisioning was cancelled")]
    Cancelled,

    /// IO error while handing the request to the service
    #[error("IO error while submitting request: {0}")]
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for ProvisioningError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}
