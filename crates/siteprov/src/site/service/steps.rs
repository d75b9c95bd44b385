//! Steps shared by the archetype handlers

use tracing::{debug, error, warn};

use crate::site::{
    Lcid, SiteArchetype, SiteError,
    context::{ConnectionContext, GraphToken},
    port::{ProvisioningError, ProvisioningOutcome},
};

/// Use the supplied locale, falling back to the connection's current locale
pub(super) async fn resolve_locale<C>(
    archetype: SiteArchetype,
    supplied: Option<Lcid>,
    context: &C,
) -> Result<Lcid, SiteError>
where
    C: ConnectionContext,
{
    if let Some(lcid) = supplied {
        return Ok(lcid);
    }

    let lcid = context
        .current_locale()
        .await
        .map_err(|source| SiteError::Context { archetype, source })?;

    debug!(%lcid, "locale not supplied; using the connection's locale");
    Ok(lcid)
}

/// Refuse up front when the connection can never yield a Graph token
pub(super) fn ensure_graph_capability<C>(
    archetype: SiteArchetype,
    context: &C,
) -> Result<(), SiteError>
where
    C: ConnectionContext,
{
    let connection_kind = context.connection_kind();

    if connection_kind.can_acquire_graph_token() {
        return Ok(());
    }

    warn!(
        %connection_kind,
        "connection cannot acquire a Microsoft Graph token; refusing to create {archetype}"
    );
    Err(SiteError::CapabilityUnavailable {
        archetype,
        connection_kind,
    })
}

pub(super) async fn acquire_graph_token<C>(
    archetype: SiteArchetype,
    context: &C,
) -> Result<GraphToken, SiteError>
where
    C: ConnectionContext,
{
    context
        .acquire_graph_token()
        .await
        .inspect(|_| debug!("acquired Microsoft Graph token"))
        .map_err(|source| {
            error!(error = %source, "could not acquire a Microsoft Graph token");
            SiteError::Context { archetype, source }
        })
}

/// Wrap the provisioner's answer with the archetype, logging failures
pub(super) fn finish(
    archetype: SiteArchetype,
    result: Result<ProvisioningOutcome, ProvisioningError>,
) -> Result<ProvisioningOutcome, SiteError> {
    match result {
        Ok(outcome) => {
            debug!(
                address = %outcome.address(),
                completion = %outcome.completion(),
                "provisioning request submitted"
            );
            Ok(outcome)
        }
        Err(source) => {
            error!(error = %source, "provisioning failed");
            Err(SiteError::Provisioning { archetype, source })
        }
    }
}
