//! The request builder and dispatcher
//!
//! [`SiteService`] is the primary port callers use. It binds parameters, shapes
//! the archetype's creation request and submits it through exactly one
//! [`SiteProvisioner`] call. Each archetype has its own handler.

mod communication;
mod steps;
mod team;
mod team_no_group;


use async_trait::async_trait;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{
    FieldGroup, FieldGroupDescriptor, SiteArchetype, SiteError, SiteParameters,
    context::ConnectionContext,
    port::{ProvisioningOutcome, SiteProvisioner},
    request::CompletionMode,
};

/// Per-invocation options that are not part of any field group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitOptions {
    /// Hub site to associate the new site with
    pub hub_site_id: Option<Uuid>,

    pub completion: CompletionMode,
}

impl SubmitOptions {
    #[must_use]
    pub fn new(hub_site_id: Option<Uuid>, completion: CompletionMode) -> Self {
        Self {
            hub_site_id,
            completion,
        }
    }
}

/// Primary port for site creation
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
#[async_trait]
pub trait SiteService: Send + Sync {
    /// Bind `params` for `archetype` and submit the resulting request
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if the parameters do not fit the archetype, the
    /// connection cannot supply what the archetype needs, or provisioning fails.
    async fn build_and_submit(
        &self,
        archetype: SiteArchetype,
        params: &SiteParameters,
        options: SubmitOptions,
    ) -> Result<ProvisioningOutcome, SiteError>;

    /// Submit an already bound field group
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if the connection cannot supply what the archetype
    /// needs, or provisioning fails.
    async fn submit(
        &self,
        group: FieldGroup,
        options: SubmitOptions,
    ) -> Result<ProvisioningOutcome, SiteError>;
}

/// Implementation of the [`SiteService`]
#[derive(Debug)]
pub struct SiteServiceImpl<P, C> {
    provisioner: P,
    context: C,
}

impl<P, C> SiteServiceImpl<P, C>
where
    P: SiteProvisioner,
    C: ConnectionContext,
{
    pub fn new(provisioner: P, context: C) -> Self {
        Self {
            provisioner,
            context,
        }
    }

    #[must_use]
    pub fn provisioner(&self) -> &P {
        &self.provisioner
    }

    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }
}

#[async_trait]
impl<P, C> SiteService for SiteServiceImpl<P, C>
where
    P: SiteProvisioner,
    C: ConnectionContext,
{
    #[instrument(skip(self, params), fields(archetype = %archetype))]
    async fn build_and_submit(
        &self,
        archetype: SiteArchetype,
        params: &SiteParameters,
        options: SubmitOptions,
    ) -> Result<ProvisioningOutcome, SiteError> {
        let group = FieldGroupDescriptor::for_archetype(archetype)
            .bind(params)
            .inspect_err(|e| debug!(error = %e, "parameters rejected"))?;

        self.submit(group, options).await
    }

    #[instrument(skip(self, group), fields(archetype = %group.archetype()))]
    async fn submit(
        &self,
        group: FieldGroup,
        options: SubmitOptions,
    ) -> Result<ProvisioningOutcome, SiteError> {
        debug!(
            completion = ?options.completion,
            hub_site_id = ?options.hub_site_id,
            "dispatching creation request"
        );

        match group {
            FieldGroup::Communication(fields) => {
                communication::handle_communication_site(
                    fields,
                    options,
                    &self.provisioner,
                    &self.context,
                )
                .await
            }
            FieldGroup::Team(fields) => {
                team::handle_team_site(fields, options, &self.provisioner, &self.context).await
            }
            FieldGroup::TeamNoGroup(fields) => {
                team_no_group::handle_team_site_no_group(
                    fields,
                    options,
                    &self.provisioner,
                    &self.context,
                )
                .await
            }
        }
    }
}
