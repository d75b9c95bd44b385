use crate::site::{
    SiteArchetype, SiteError, TeamSiteNoGroupFields,
    context::ConnectionContext,
    port::{ProvisioningOutcome, SiteProvisioner},
    request::TeamNoGroupSiteCreationRequest,
};

use super::{SubmitOptions, steps};

pub(super) async fn handle_team_site_no_group<P, C>(
    fields: TeamSiteNoGroupFields,
    options: SubmitOptions,
    provisioner: &P,
    context: &C,
) -> Result<ProvisioningOutcome, SiteError>
where
    P: SiteProvisioner,
    C: ConnectionContext,
{
    let archetype = SiteArchetype::TeamSiteNoGroup;
    let lcid = steps::resolve_locale(archetype, fields.lcid, context).await?;

    let request = TeamNoGroupSiteCreationRequest::new(fields, lcid, options.hub_site_id);

    steps::finish(
        archetype,
        provisioner
            .create_team_site_no_group(&request, options.completion)
            .await,
    )
}
