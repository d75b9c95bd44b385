//! Group-backed team sites
//!
//! Creating the group needs a Microsoft Graph token, so the connection's
//! capability is checked before anything else happens. The locale is passed
//! through as supplied; there is no fallback to the connection's locale.

use tracing::debug;

use crate::site::{
    SiteArchetype, SiteError, TeamSiteFields,
    context::ConnectionContext,
    port::{ProvisioningOutcome, SiteProvisioner},
    request::TeamSiteCreationRequest,
};

use super::{SubmitOptions, steps};

pub(super) async fn handle_team_site<P, C>(
    fields: TeamSiteFields,
    options: SubmitOptions,
    provisioner: &P,
    context: &C,
) -> Result<ProvisioningOutcome, SiteError>
where
    P: SiteProvisioner,
    C: ConnectionContext,
{
    let archetype = SiteArchetype::TeamSite;

    steps::ensure_graph_capability(archetype, context)?;
    let token = steps::acquire_graph_token(archetype, context).await?;

    if fields.lcid.is_none() {
        debug!("locale not supplied; leaving it to the provisioning service");
    }

    let request = TeamSiteCreationRequest::new(fields, options.hub_site_id);

    steps::finish(
        archetype,
        provisioner
            .create_team_site(&request, &token, options.completion)
            .await,
    )
}
