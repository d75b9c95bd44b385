//! Creation requests handed to the provisioning service
//!
//! One request type per archetype. Requests are built by the dispatcher from a
//! bound field group plus resolved defaults, submitted once and dropped.
//! Optional values that were not supplied are left out of the serialized form.

use serde::Serialize;
use uuid::Uuid;

use super::{
    CommunicationSiteDesign, CommunicationSiteFields, DesignChoice, Geography, Lcid,
    SiteArchetype, TeamSiteFields, TeamSiteNoGroupFields,
};

/// Whether the caller waits for the site to be fully provisioned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionMode {
    /// Return as soon as creation has been accepted
    #[default]
    FireAndForget,

    /// Block until the site has been created
    AwaitCompletion,
}

impl CompletionMode {
    #[must_use]
    pub fn from_wait(wait: bool) -> Self {
        if wait {
            Self::AwaitCompletion
        } else {
            Self::FireAndForget
        }
    }

    #[must_use]
    pub fn blocks_until_complete(self) -> bool {
        matches!(self, Self::AwaitCompletion)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunicationSiteCreationRequest {
    pub(crate) title: String,
    pub(crate) url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) classification: Option<String>,
    pub(crate) share_by_email_enabled: bool,
    pub(crate) lcid: Lcid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hub_site_id: Option<Uuid>,
    #[serde(flatten)]
    pub(crate) design: DesignChoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) preferred_data_location: Option<Geography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sensitivity_label: Option<String>,
}

impl CommunicationSiteCreationRequest {
    pub(crate) fn new(fields: CommunicationSiteFields, lcid: Lcid, hub_site_id: Option<Uuid>) -> Self {
        Self {
            title: fields.title,
            url: fields.url,
            description: fields.description,
            classification: fields.classification,
            share_by_email_enabled: fields.share_by_email_enabled,
            lcid,
            hub_site_id,
            design: fields.design,
            owner: fields.owner,
            preferred_data_location: fields.preferred_data_location,
            sensitivity_label: fields.sensitivity_label,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn classification(&self) -> Option<&str> {
        self.classification.as_deref()
    }

    #[must_use]
    pub fn share_by_email_enabled(&self) -> bool {
        self.share_by_email_enabled
    }

    #[must_use]
    pub fn lcid(&self) -> Lcid {
        self.lcid
    }

    #[must_use]
    pub fn hub_site_id(&self) -> Option<Uuid> {
        self.hub_site_id
    }

    #[must_use]
    pub fn design(&self) -> DesignChoice {
        self.design
    }

    /// The built-in design, absent when a custom design was chosen
    #[must_use]
    pub fn site_design(&self) -> Option<CommunicationSiteDesign> {
        match self.design {
            DesignChoice::BuiltIn(design) => Some(design),
            DesignChoice::Custom(_) => None,
        }
    }

    /// The custom design id, absent when a built-in design was chosen
    #[must_use]
    pub fn site_design_id(&self) -> Option<Uuid> {
        match self.design {
            DesignChoice::BuiltIn(_) => None,
            DesignChoice::Custom(id) => Some(id),
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[must_use]
    pub fn preferred_data_location(&self) -> Option<Geography> {
        self.preferred_data_location
    }

    #[must_use]
    pub fn sensitivity_label(&self) -> Option<&str> {
        self.sensitivity_label.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSiteCreationRequest {
    pub(crate) display_name: String,
    pub(crate) alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) classification: Option<String>,
    pub(crate) is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) lcid: Option<Lcid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hub_site_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) owners: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) preferred_data_location: Option<Geography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sensitivity_label: Option<String>,
}

impl TeamSiteCreationRequest {
    pub(crate) fn new(fields: TeamSiteFields, hub_site_id: Option<Uuid>) -> Self {
        Self {
            display_name: fields.title,
            alias: fields.alias,
            description: fields.description,
            classification: fields.classification,
            is_public: fields.is_public,
            lcid: fields.lcid,
            hub_site_id,
            owners: fields.owners,
            preferred_data_location: fields.preferred_data_location,
            sensitivity_label: fields.sensitivity_label,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn classification(&self) -> Option<&str> {
        self.classification.as_deref()
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    #[must_use]
    pub fn lcid(&self) -> Option<Lcid> {
        self.lcid
    }

    #[must_use]
    pub fn hub_site_id(&self) -> Option<Uuid> {
        self.hub_site_id
    }

    #[must_use]
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    #[must_use]
    pub fn preferred_data_location(&self) -> Option<Geography> {
        self.preferred_data_location
    }

    #[must_use]
    pub fn sensitivity_label(&self) -> Option<&str> {
        self.sensitivity_label.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamNoGroupSiteCreationRequest {
    pub(crate) title: String,
    pub(crate) url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) classification: Option<String>,
    pub(crate) share_by_email_enabled: bool,
    /// Custom site design to apply
    ///
    /// `None` stands for the nil UUID, which the provisioning service reads as
    /// "no custom design". It is omitted from the serialized request rather than
    /// sent as `00000000-0000-0000-0000-000000000000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) site_design_id: Option<Uuid>,
    pub(crate) lcid: Lcid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hub_site_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) preferred_data_location: Option<Geography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sensitivity_label: Option<String>,
}

impl TeamNoGroupSiteCreationRequest {
    pub(crate) fn new(fields: TeamSiteNoGroupFields, lcid: Lcid, hub_site_id: Option<Uuid>) -> Self {
        Self {
            title: fields.title,
            url: fields.url,
            description: fields.description,
            classification: fields.classification,
            share_by_email_enabled: fields.share_by_email_enabled,
            site_design_id: fields.site_design_id,
            lcid,
            hub_site_id,
            owner: fields.owner,
            preferred_data_location: fields.preferred_data_location,
            sensitivity_label: fields.sensitivity_label,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn classification(&self) -> Option<&str> {
        self.classification.as_deref()
    }

    #[must_use]
    pub fn share_by_email_enabled(&self) -> bool {
        self.share_by_email_enabled
    }

    #[must_use]
    pub fn site_design_id(&self) -> Option<Uuid> {
        self.site_design_id
    }

    /// The design id in the service's wire form, where absent is the nil UUID
    #[must_use]
    pub fn site_design_id_or_nil(&self) -> Uuid {
        self.site_design_id.unwrap_or_else(Uuid::nil)
    }

    #[must_use]
    pub fn lcid(&self) -> Lcid {
        self.lcid
    }

    #[must_use]
    pub fn hub_site_id(&self) -> Option<Uuid> {
        self.hub_site_id
    }

    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[must_use]
    pub fn preferred_data_location(&self) -> Option<Geography> {
        self.preferred_data_location
    }

    #[must_use]
    pub fn sensitivity_label(&self) -> Option<&str> {
        self.sensitivity_label.as_deref()
    }
}

/// Any one of the three creation requests
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CreationRequest {
    Communication(CommunicationSiteCreationRequest),
    Team(TeamSiteCreationRequest),
    TeamNoGroup(TeamNoGroupSiteCreationRequest),
}

impl CreationRequest {
    #[must_use]
    pub fn archetype(&self) -> SiteArchetype {
        match self {
            Self::Communication(_) => SiteArchetype::CommunicationSite,
            Self::Team(_) => SiteArchetype::TeamSite,
            Self::TeamNoGroup(_) => SiteArchetype::TeamSiteNoGroup,
        }
    }

    #[must_use]
    pub fn hub_site_id(&self) -> Option<Uuid> {
        match self {
            Self::Communication(r) => r.hub_site_id(),
            Self::Team(r) => r.hub_site_id(),
            Self::TeamNoGroup(r) => r.hub_site_id(),
        }
    }
}

impl From<CommunicationSiteCreationRequest> for CreationRequest {
    fn from(request: CommunicationSiteCreationRequest) -> Self {
        Self::Communication(request)
    }
}

impl From<TeamSiteCreationRequest> for CreationRequest {
    fn from(request: TeamSiteCreationRequest) -> Self {
        Self::Team(request)
    }
}

impl From<TeamNoGroupSiteCreationRequest> for CreationRequest {
    fn from(request: TeamNoGroupSiteCreationRequest) -> Self {
        Self::TeamNoGroup(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(request: &impl Serialize) -> serde_yaml::Value {
        serde_yaml::to_value(request).unwrap()
    }

    #[test]
    fn test_completion_mode_from_wait_flag() {
        assert_eq!(CompletionMode::from_wait(false), CompletionMode::FireAndForget);
        assert_eq!(CompletionMode::from_wait(true), CompletionMode::AwaitCompletion);
        assert!(!CompletionMode::default().blocks_until_complete());
    }

    #[test]
    fn test_builtin_design_serializes_without_design_id() {
        let request = CommunicationSiteCreationRequest::new(
            CommunicationSiteFields::new("Contoso News", "https://tenant/sites/news"),
            Lcid::ENGLISH_US,
            None,
        );

        let value = yaml(&request);
        assert_eq!(value["site_design"], serde_yaml::Value::from("Topic"));
        assert!(value.get("site_design_id").is_none());
        assert!(value.get("hub_site_id").is_none());
        assert!(value.get("description").is_none());
        assert_eq!(value["lcid"], serde_yaml::Value::from(1033));
    }

    #[test]
    fn test_custom_design_serializes_without_builtin_design() {
        let design_id = Uuid::new_v4();
        let mut fields = CommunicationSiteFields::new("Contoso News", "https://tenant/sites/news");
        fields.design = DesignChoice::Custom(design_id);

        let request = CommunicationSiteCreationRequest::new(fields, Lcid::ENGLISH_US, None);

        assert_eq!(request.site_design(), None);
        assert_eq!(request.site_design_id(), Some(design_id));

        let value = yaml(&request);
        assert!(value.get("site_design").is_none());
        assert_eq!(
            value["site_design_id"],
            serde_yaml::Value::from(design_id.to_string())
        );
    }

    #[test]
    fn test_team_site_request_maps_title_to_display_name() {
        let mut fields = TeamSiteFields::new("Marketing", "marketing");
        fields.owners = vec!["adele@contoso.com".to_string(), "megan@contoso.com".to_string()];
        let hub = Uuid::new_v4();

        let request = TeamSiteCreationRequest::new(fields, Some(hub));

        assert_eq!(request.display_name(), "Marketing");
        assert_eq!(request.alias(), "marketing");
        assert_eq!(request.owners().len(), 2);
        assert_eq!(request.hub_site_id(), Some(hub));
        assert_eq!(request.lcid(), None);

        let value = yaml(&request);
        assert!(value.get("lcid").is_none());
        assert_eq!(value["owners"][0], serde_yaml::Value::from("adele@contoso.com"));
    }

    #[test]
    fn test_creation_request_reports_archetype_and_hub() {
        let hub = Uuid::new_v4();
        let request: CreationRequest = TeamNoGroupSiteCreationRequest::new(
            TeamSiteNoGroupFields::new("Projects", "https://tenant/sites/projects"),
            Lcid::ENGLISH_US,
            Some(hub),
        )
        .into();

        assert_eq!(request.archetype(), SiteArchetype::TeamSiteNoGroup);
        assert_eq!(request.hub_site_id(), Some(hub));
    }

    #[test]
    fn test_no_group_design_id_absent_means_nil() {
        let request = TeamNoGroupSiteCreationRequest::new(
            TeamSiteNoGroupFields::new("Projects", "https://tenant/sites/projects"),
            Lcid::ENGLISH_US,
            None,
        );

        assert_eq!(request.site_design_id(), None);
        assert_eq!(request.site_design_id_or_nil(), Uuid::nil());
        assert!(yaml(&request).get("site_design_id").is_none());

        let design_id = Uuid::new_v4();
        let mut fields = TeamSiteNoGroupFields::new("Projects", "https://tenant/sites/projects");
        fields.site_design_id = Some(design_id);
        let request = TeamNoGroupSiteCreationRequest::new(fields, Lcid::ENGLISH_US, None);

        assert_eq!(request.site_design_id_or_nil(), design_id);
    }
}
