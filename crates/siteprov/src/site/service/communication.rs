use tracing::debug;

use crate::site::{
    CommunicationSiteFields, DesignChoice, SiteArchetype, SiteError,
    context::ConnectionContext,
    port::{ProvisioningOutcome, SiteProvisioner},
    request::CommunicationSiteCreationRequest,
};

use super::{SubmitOptions, steps};

pub(super) async fn handle_communication_site<P, C>(
    fields: CommunicationSiteFields,
    options: SubmitOptions,
    provisioner: &P,
    context: &C,
) -> Result<ProvisioningOutcome, SiteError>
where
    P: SiteProvisioner,
    C: ConnectionContext,
{
    let archetype = SiteArchetype::CommunicationSite;
    let lcid = steps::resolve_locale(archetype, fields.lcid, context).await?;

    match fields.design {
        DesignChoice::BuiltIn(design) => debug!(%design, "using built-in site design"),
        DesignChoice::Custom(id) => debug!(%id, "using custom site design"),
    }

    let request = CommunicationSiteCreationRequest::new(fields, lcid, options.hub_site_id);

    steps::finish(
        archetype,
        provisioner
            .create_communication_site(&request, options.completion)
            .await,
    )
}
