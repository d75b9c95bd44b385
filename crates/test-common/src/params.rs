//! Parameter bags for the three archetypes.

use crate::constants::{MARKETING_ALIAS, MARKETING_TITLE, NEWS_TITLE, NEWS_URL};
use siteprov::site::SiteParameters;

/// Mandatory fields of the "Contoso News" communication site.
#[must_use]
pub fn communication_site_params() -> SiteParameters {
    SiteParameters {
        title: Some(NEWS_TITLE.to_string()),
        url: Some(NEWS_URL.to_string()),
        ..SiteParameters::default()
    }
}

/// Mandatory fields of the "Marketing" team site.
#[must_use]
pub fn team_site_params() -> SiteParameters {
    SiteParameters {
        title: Some(MARKETING_TITLE.to_string()),
        alias: Some(MARKETING_ALIAS.to_string()),
        ..SiteParameters::default()
    }
}

/// Mandatory fields of a team site without a group at `url`.
#[must_use]
pub fn team_site_no_group_params(url: &str) -> SiteParameters {
    SiteParameters {
        title: Some("Projects".to_string()),
        url: Some(url.to_string()),
        ..SiteParameters::default()
    }
}
