//! The loose, caller-supplied parameter bag
//!
//! Every field is optional here. Whether a field is legal, mandatory or
//! defaulted depends on the archetype and is decided when the bag is bound by
//! a [`FieldGroupDescriptor`](super::FieldGroupDescriptor).

use std::fmt;

use uuid::Uuid;

use super::{CommunicationSiteDesign, Geography, Lcid};

/// Names of every parameter any field group knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterName {
    Title,
    Url,
    Alias,
    Description,
    Classification,
    ShareByEmailEnabled,
    IsPublic,
    SiteDesign,
    SiteDesignId,
    Lcid,
    Owner,
    Owners,
    PreferredDataLocation,
    SensitivityLabel,
}

impl ParameterName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Url => "url",
            Self::Alias => "alias",
            Self::Description => "description",
            Self::Classification => "classification",
            Self::ShareByEmailEnabled => "share_by_email_enabled",
            Self::IsPublic => "is_public",
            Self::SiteDesign => "site_design",
            Self::SiteDesignId => "site_design_id",
            Self::Lcid => "lcid",
            Self::Owner => "owner",
            Self::Owners => "owners",
            Self::PreferredDataLocation => "preferred_data_location",
            Self::SensitivityLabel => "sensitivity_label",
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters as supplied by the caller
///
/// `None` means "not supplied". Switch parameters are `Some(true)` when given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteParameters {
    pub title: Option<String>,
    pub url: Option<String>,
    pub alias: Option<String>,
    pub description: Option<String>,
    pub classification: Option<String>,
    pub share_by_email_enabled: Option<bool>,
    pub is_public: Option<bool>,
    pub site_design: Option<CommunicationSiteDesign>,
    pub site_design_id: Option<Uuid>,
    pub lcid: Option<Lcid>,
    pub owner: Option<String>,
    pub owners: Option<Vec<String>>,
    pub preferred_data_location: Option<Geography>,
    pub sensitivity_label: Option<String>,
}

impl SiteParameters {
    /// Whether the caller supplied `name`
    #[must_use]
    pub fn is_supplied(&self, name: ParameterName) -> bool {
        match name {
            ParameterName::Title => self.title.is_some(),
            ParameterName::Url => self.url.is_some(),
            ParameterName::Alias => self.alias.is_some(),
            ParameterName::Description => self.description.is_some(),
            ParameterName::Classification => self.classification.is_some(),
            ParameterName::ShareByEmailEnabled => self.share_by_email_enabled.is_some(),
            ParameterName::IsPublic => self.is_public.is_some(),
            ParameterName::SiteDesign => self.site_design.is_some(),
            ParameterName::SiteDesignId => self.site_design_id.is_some(),
            ParameterName::Lcid => self.lcid.is_some(),
            ParameterName::Owner => self.owner.is_some(),
            ParameterName::Owners => self.owners.is_some(),
            ParameterName::PreferredDataLocation => self.preferred_data_location.is_some(),
            ParameterName::SensitivityLabel => self.sensitivity_label.is_some(),
        }
    }

    /// Every supplied parameter, in declaration order
    #[must_use]
    pub fn supplied(&self) -> Vec<ParameterName> {
        ALL_PARAMETERS
            .into_iter()
            .filter(|name| self.is_supplied(*name))
            .collect()
    }
}

const ALL_PARAMETERS: [ParameterName; 14] = [
    ParameterName::Title,
    ParameterName::Url,
    ParameterName::Alias,
    ParameterName::Description,
    ParameterName::Classification,
    ParameterName::ShareByEmailEnabled,
    ParameterName::IsPublic,
    ParameterName::SiteDesign,
    ParameterName::SiteDesignId,
    ParameterName::Lcid,
    ParameterName::Owner,
    ParameterName::Owners,
    ParameterName::PreferredDataLocation,
    ParameterName::SensitivityLabel,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_supplied_by_default() {
        assert!(SiteParameters::default().supplied().is_empty());
    }

    #[test]
    fn test_supplied_lists_fields_in_declaration_order() {
        let params = SiteParameters {
            owners: Some(vec![]),
            title: Some("Marketing".to_string()),
            alias: Some("marketing".to_string()),
            ..SiteParameters::default()
        };

        assert_eq!(
            params.supplied(),
            vec![
                ParameterName::Title,
                ParameterName::Alias,
                ParameterName::Owners
            ]
        );
    }

    #[test]
    fn test_switch_counts_as_supplied_when_present() {
        let params = SiteParameters {
            is_public: Some(false),
            ..SiteParameters::default()
        };

        assert!(params.is_supplied(ParameterName::IsPublic));
        assert!(!params.is_supplied(ParameterName::ShareByEmailEnabled));
    }
}
