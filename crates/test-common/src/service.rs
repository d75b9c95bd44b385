//! Service creation helpers and a recording provisioner.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use siteprov::{
    config::AppConfig,
    fs::RealFileSystem,
    site::{
        Lcid,
        context::{ConfiguredConnection, ConnectionKind, GraphToken},
        port::{ProvisioningError, ProvisioningOutcome, SiteProvisioner},
        provisioner::SpoolProvisioner,
        request::{
            CommunicationSiteCreationRequest, CompletionMode, CreationRequest,
            TeamNoGroupSiteCreationRequest, TeamSiteCreationRequest,
        },
        service::SiteServiceImpl,
    },
};

use crate::constants::{TEST_GRAPH_TOKEN, TEST_LOCALE};

/// A connection of `kind` reporting the test locale and handing out the test token.
#[must_use]
pub fn test_connection(kind: ConnectionKind) -> ConfiguredConnection {
    ConfiguredConnection::new(
        kind,
        Lcid::new(TEST_LOCALE),
        Some(GraphToken::new(TEST_GRAPH_TOKEN)),
        "TEST_GRAPH_TOKEN",
    )
}

/// Creates a service spooling into the config's spool directory on the real file system.
#[must_use]
pub fn create_spool_service(
    config: &AppConfig,
    kind: ConnectionKind,
) -> SiteServiceImpl<SpoolProvisioner<RealFileSystem>, ConfiguredConnection> {
    let provisioner = SpoolProvisioner::from_config(RealFileSystem, config);
    SiteServiceImpl::new(provisioner, test_connection(kind))
}

/// Creates a service whose provisioner only records what it receives.
#[must_use]
pub fn create_recording_service(
    kind: ConnectionKind,
) -> (
    SiteServiceImpl<RecordingProvisioner, ConfiguredConnection>,
    RecordingProvisioner,
) {
    let provisioner = RecordingProvisioner::default();
    let service = SiteServiceImpl::new(provisioner.clone(), test_connection(kind));
    (service, provisioner)
}

/// Records every request and answers with the request's own address.
#[derive(Debug, Clone, Default)]
pub struct RecordingProvisioner {
    calls: Arc<Mutex<Vec<(CreationRequest, CompletionMode)>>>,
}

impl RecordingProvisioner {
    #[must_use]
    pub fn calls(&self) -> Vec<(CreationRequest, CompletionMode)> {
        self.calls.lock().unwrap().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, request: CreationRequest, mode: CompletionMode) {
        self.calls.lock().unwrap().push((request, mode));
    }
}

#[async_trait]
impl SiteProvisioner for RecordingProvisioner {
    async fn create_communication_site(
        &self,
        request: &CommunicationSiteCreationRequest,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError> {
        self.record(request.clone().into(), mode);
        Ok(ProvisioningOutcome::accepted(request.url()))
    }

    async fn create_team_site(
        &self,
        request: &TeamSiteCreationRequest,
        _graph_token: &GraphToken,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError> {
        self.record(request.clone().into(), mode);
        Ok(ProvisioningOutcome::accepted(format!(
            "{}/sites/{}",
            crate::constants::TEST_TENANT_URL,
            request.alias()
        )))
    }

    async fn create_team_site_no_group(
        &self,
        request: &TeamNoGroupSiteCreationRequest,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError> {
        self.record(request.clone().into(), mode);
        Ok(ProvisioningOutcome::accepted(request.url()))
    }
}
