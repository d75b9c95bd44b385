//! Typed field groups, one per archetype

use uuid::Uuid;

use super::{DesignChoice, Geography, Lcid, SiteArchetype};

/// Fields of a communication site
#[derive(Debug, Clone, PartialEq)]
pub struct CommunicationSiteFields {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub classification: Option<String>,
    pub share_by_email_enabled: bool,
    pub design: DesignChoice,
    pub lcid: Option<Lcid>,
    pub owner: Option<String>,
    pub preferred_data_location: Option<Geography>,
    pub sensitivity_label: Option<String>,
}

impl CommunicationSiteFields {
    /// Mandatory fields only; everything else absent and the design left at its default
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
            classification: None,
            share_by_email_enabled: false,
            design: DesignChoice::default(),
            lcid: None,
            owner: None,
            preferred_data_location: None,
            sensitivity_label: None,
        }
    }
}

/// Fields of a group-backed team site
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSiteFields {
    pub title: String,
    pub alias: String,
    pub description: Option<String>,
    pub classification: Option<String>,
    pub is_public: bool,
    pub lcid: Option<Lcid>,
    pub owners: Vec<String>,
    pub preferred_data_location: Option<Geography>,
    pub sensitivity_label: Option<String>,
}

impl TeamSiteFields {
    #[must_use]
    pub fn new(title: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            alias: alias.into(),
            description: None,
            classification: None,
            is_public: false,
            lcid: None,
            owners: Vec::new(),
            preferred_data_location: None,
            sensitivity_label: None,
        }
    }
}

/// Fields of a team site without a Microsoft 365 group
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSiteNoGroupFields {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub classification: Option<String>,
    pub share_by_email_enabled: bool,
    pub site_design_id: Option<Uuid>,
    pub lcid: Option<Lcid>,
    pub owner: Option<String>,
    pub preferred_data_location: Option<Geography>,
    pub sensitivity_label: Option<String>,
}

impl TeamSiteNoGroupFields {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
            classification: None,
            share_by_email_enabled: false,
            site_design_id: None,
            lcid: None,
            owner: None,
            preferred_data_location: None,
            sensitivity_label: None,
        }
    }
}

/// The field group of exactly one archetype
#[derive(Debug, Clone, PartialEq)]
pub enum FieldGroup {
    Communication(CommunicationSiteFields),
    Team(TeamSiteFields),
    TeamNoGroup(TeamSiteNoGroupFields),
}

impl FieldGroup {
    #[must_use]
    pub fn archetype(&self) -> SiteArchetype {
        match self {
            Self::Communication(_) => SiteArchetype::CommunicationSite,
            Self::Team(_) => SiteArchetype::TeamSite,
            Self::TeamNoGroup(_) => SiteArchetype::TeamSiteNoGroup,
        }
    }
}

impl From<CommunicationSiteFields> for FieldGroup {
    fn from(fields: CommunicationSiteFields) -> Self {
        Self::Communication(fields)
    }
}

impl From<TeamSiteFields> for FieldGroup {
    fn from(fields: TeamSiteFields) -> Self {
        Self::Team(fields)
    }
}

impl From<TeamSiteNoGroupFields> for FieldGroup {
    fn from(fields: TeamSiteNoGroupFields) -> Self {
        Self::TeamNoGroup(fields)
    }
}
