//! Parameter-set resolution
//!
//! Each archetype accepts its own set of fields. A [`FieldGroupDescriptor`]
//! describes that set and binds a loose [`SiteParameters`] bag into the typed
//! [`FieldGroup`], reporting every problem it finds in one
//! [`SiteError::ParameterSetViolation`].

use std::fmt;

use url::Url;

use crate::validation::{ValidationErrorCategory, ValidationIssue, ValidationIssues};

use super::{
    CommunicationSiteFields, DesignChoice, DesignSubMode, FieldGroup, ParameterName,
    SiteArchetype, SiteError, SiteParameters, TeamSiteFields, TeamSiteNoGroupFields,
};

/// How a field participates in a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Must be supplied and non-blank
    Mandatory,

    /// May be omitted
    Optional,

    /// May be omitted; the named default applies
    Defaulted(&'static str),

    /// Mandatory in the given sub-mode, illegal in the others
    MandatoryIn(DesignSubMode),
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandatory => f.write_str("mandatory"),
            Self::Optional => f.write_str("optional"),
            Self::Defaulted(_) => f.write_str("defaulted"),
            Self::MandatoryIn(mode) => write!(f, "mandatory ({mode})"),
        }
    }
}

/// One legal field of a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    name: ParameterName,
    requirement: Requirement,
    only_in: Option<DesignSubMode>,
}

impl FieldSpec {
    const fn new(name: ParameterName, requirement: Requirement) -> Self {
        Self {
            name,
            requirement,
            only_in: None,
        }
    }

    const fn only_in(mut self, mode: DesignSubMode) -> Self {
        self.only_in = Some(mode);
        self
    }

    #[must_use]
    pub fn name(&self) -> ParameterName {
        self.name
    }

    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// The default applied when the field is omitted
    #[must_use]
    pub fn default_value(&self) -> Option<&'static str> {
        match self.requirement {
            Requirement::Defaulted(value) => Some(value),
            _ => None,
        }
    }

    /// The sub-mode the field is restricted to, if any
    #[must_use]
    pub fn sub_mode(&self) -> Option<DesignSubMode> {
        self.only_in
    }

    fn requirement_in(&self, mode: Option<DesignSubMode>) -> Option<Requirement> {
        if let (Some(only), Some(mode)) = (self.only_in, mode) {
            if only != mode {
                return None;
            }
        }

        match self.requirement {
            Requirement::MandatoryIn(required) if Some(required) == mode => {
                Some(Requirement::Mandatory)
            }
            other => Some(other),
        }
    }
}

const COMMUNICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(ParameterName::Title, Requirement::Mandatory),
    FieldSpec::new(ParameterName::Url, Requirement::Mandatory),
    FieldSpec::new(ParameterName::Description, Requirement::Optional),
    FieldSpec::new(ParameterName::Classification, Requirement::Optional),
    FieldSpec::new(ParameterName::ShareByEmailEnabled, Requirement::Optional),
    FieldSpec::new(ParameterName::SiteDesign, Requirement::Defaulted("Topic"))
        .only_in(DesignSubMode::BuiltInDesign),
    FieldSpec::new(
        ParameterName::SiteDesignId,
        Requirement::MandatoryIn(DesignSubMode::CustomDesign),
    )
    .only_in(DesignSubMode::CustomDesign),
    FieldSpec::new(ParameterName::Lcid, Requirement::Optional),
    FieldSpec::new(ParameterName::Owner, Requirement::Optional),
    FieldSpec::new(ParameterName::PreferredDataLocation, Requirement::Optional),
    FieldSpec::new(ParameterName::SensitivityLabel, Requirement::Optional),
];

const TEAM_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(ParameterName::Title, Requirement::Mandatory),
    FieldSpec::new(ParameterName::Alias, Requirement::Mandatory),
    FieldSpec::new(ParameterName::Description, Requirement::Optional),
    FieldSpec::new(ParameterName::Classification, Requirement::Optional),
    FieldSpec::new(ParameterName::IsPublic, Requirement::Optional),
    FieldSpec::new(ParameterName::Lcid, Requirement::Optional),
    FieldSpec::new(ParameterName::Owners, Requirement::Optional),
    FieldSpec::new(ParameterName::PreferredDataLocation, Requirement::Optional),
    FieldSpec::new(ParameterName::SensitivityLabel, Requirement::Optional),
];

const TEAM_NO_GROUP_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(ParameterName::Title, Requirement::Mandatory),
    FieldSpec::new(ParameterName::Url, Requirement::Mandatory),
    FieldSpec::new(ParameterName::Description, Requirement::Optional),
    FieldSpec::new(ParameterName::Classification, Requirement::Optional),
    FieldSpec::new(ParameterName::ShareByEmailEnabled, Requirement::Optional),
    FieldSpec::new(ParameterName::SiteDesignId, Requirement::Optional),
    FieldSpec::new(ParameterName::Lcid, Requirement::Optional),
    FieldSpec::new(ParameterName::Owner, Requirement::Optional),
    FieldSpec::new(ParameterName::PreferredDataLocation, Requirement::Optional),
    FieldSpec::new(ParameterName::SensitivityLabel, Requirement::Optional),
];

/// Resolve the archetype discriminant into its descriptor
///
/// # Errors
///
/// Returns [`SiteError::InvalidArchetype`] if `archetype` is absent or not recognized.
pub fn resolve(archetype: Option<&str>) -> Result<FieldGroupDescriptor, SiteError> {
    let archetype = archetype
        .ok_or(SiteError::InvalidArchetype { value: None })?
        .parse::<SiteArchetype>()?;

    Ok(FieldGroupDescriptor::for_archetype(archetype))
}

/// The legal fields of one archetype and how to bind them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGroupDescriptor {
    archetype: SiteArchetype,
    fields: &'static [FieldSpec],
}

impl FieldGroupDescriptor {
    #[must_use]
    pub fn for_archetype(archetype: SiteArchetype) -> Self {
        let fields = match archetype {
            SiteArchetype::CommunicationSite => COMMUNICATION_FIELDS,
            SiteArchetype::TeamSite => TEAM_FIELDS,
            SiteArchetype::TeamSiteNoGroup => TEAM_NO_GROUP_FIELDS,
        };

        Self { archetype, fields }
    }

    #[must_use]
    pub fn archetype(&self) -> SiteArchetype {
        self.archetype
    }

    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Whether `name` belongs to this archetype's group in any sub-mode
    #[must_use]
    pub fn is_legal(&self, name: ParameterName) -> bool {
        self.spec(name).is_some()
    }

    /// The effective requirement of `name` in `sub_mode`
    ///
    /// `None` when the field is not legal in that sub-mode. Archetypes without
    /// sub-modes ignore `sub_mode`.
    #[must_use]
    pub fn requirement(
        &self,
        name: ParameterName,
        sub_mode: Option<DesignSubMode>,
    ) -> Option<Requirement> {
        let sub_mode = if self.has_sub_modes() { sub_mode } else { None };
        self.spec(name)?.requirement_in(sub_mode)
    }

    /// The sub-mode implied by which fields the caller populated
    #[must_use]
    pub fn sub_mode(&self, params: &SiteParameters) -> Option<DesignSubMode> {
        if !self.has_sub_modes() {
            return None;
        }

        if params.site_design_id.is_some() {
            Some(DesignSubMode::CustomDesign)
        } else {
            Some(DesignSubMode::BuiltInDesign)
        }
    }

    /// Bind a parameter bag into this archetype's field group
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::ParameterSetViolation`] listing every issue found.
    pub fn bind(&self, params: &SiteParameters) -> Result<FieldGroup, SiteError> {
        let issues = self.check(params);
        if issues.has_errors() {
            return Err(SiteError::ParameterSetViolation {
                archetype: self.archetype,
                issues,
            });
        }

        Ok(self.build(params.clone()))
    }

    fn spec(&self, name: ParameterName) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    fn has_sub_modes(&self) -> bool {
        self.fields.iter().any(|spec| spec.only_in.is_some())
    }

    fn check(&self, params: &SiteParameters) -> ValidationIssues {
        let mut issues = ValidationIssues::default();

        for name in params.supplied() {
            if !self.is_legal(name) {
                issues.push(foreign_field_issue(self.archetype, name));
            }
        }

        if self.has_sub_modes() && params.site_design.is_some() && params.site_design_id.is_some()
        {
            issues.push(ValidationIssue::error(
                ValidationErrorCategory::Conflict,
                ParameterName::SiteDesignId.as_str(),
                "`site_design` and `site_design_id` cannot be used together",
                Some("Pick either a built-in design or a custom design id"),
            ));
        }

        let sub_mode = self.sub_mode(params);
        for spec in self.fields {
            if spec.requirement_in(sub_mode) == Some(Requirement::Mandatory)
                && is_blank(params, spec.name)
            {
                issues.push(ValidationIssue::error(
                    ValidationErrorCategory::RequiredField,
                    spec.name.as_str(),
                    &format!("`{}` is required for {}", spec.name, self.archetype),
                    None,
                ));
            }
        }

        if self.is_legal(ParameterName::Url) {
            if let Some(url) = params.url.as_deref().filter(|u| !u.trim().is_empty()) {
                if let Err(message) = check_site_url(url) {
                    issues.push(ValidationIssue::error(
                        ValidationErrorCategory::UrlFormat,
                        ParameterName::Url.as_str(),
                        &message,
                        Some("Use an absolute address such as https://contoso.sharepoint.com/sites/news"),
                    ));
                }
            }
        }

        if self.is_legal(ParameterName::Alias) {
            if let Some(alias) = params.alias.as_deref().filter(|a| !a.trim().is_empty()) {
                if alias.chars().any(|c| c.is_whitespace() || c == '/') {
                    issues.push(ValidationIssue::error(
                        ValidationErrorCategory::InvalidValue,
                        ParameterName::Alias.as_str(),
                        &format!("alias `{alias}` must not contain whitespace or `/`"),
                        Some("Use a mail nickname such as `marketing-team`"),
                    ));
                }
            }
        }

        issues
    }

    // Only called once `check` found no errors, so mandatory fields are present.
    fn build(&self, params: SiteParameters) -> FieldGroup {
        let title = params.title.unwrap_or_default();

        match self.archetype {
            SiteArchetype::CommunicationSite => {
                let design = match params.site_design_id {
                    Some(id) => DesignChoice::Custom(id),
                    None => DesignChoice::BuiltIn(params.site_design.unwrap_or_default()),
                };

                FieldGroup::Communication(CommunicationSiteFields {
                    title,
                    url: params.url.unwrap_or_default(),
                    description: params.description,
                    classification: params.classification,
                    share_by_email_enabled: params.share_by_email_enabled.unwrap_or(false),
                    design,
                    lcid: params.lcid,
                    owner: params.owner,
                    preferred_data_location: params.preferred_data_location,
                    sensitivity_label: params.sensitivity_label,
                })
            }
            SiteArchetype::TeamSite => FieldGroup::Team(TeamSiteFields {
                title,
                alias: params.alias.unwrap_or_default(),
                description: params.description,
                classification: params.classification,
                is_public: params.is_public.unwrap_or(false),
                lcid: params.lcid,
                owners: params.owners.unwrap_or_default(),
                preferred_data_location: params.preferred_data_location,
                sensitivity_label: params.sensitivity_label,
            }),
            SiteArchetype::TeamSiteNoGroup => FieldGroup::TeamNoGroup(TeamSiteNoGroupFields {
                title,
                url: params.url.unwrap_or_default(),
                description: params.description,
                classification: params.classification,
                share_by_email_enabled: params.share_by_email_enabled.unwrap_or(false),
                site_design_id: params.site_design_id,
                lcid: params.lcid,
                owner: params.owner,
                preferred_data_location: params.preferred_data_location,
                sensitivity_label: params.sensitivity_label,
            }),
        }
    }
}

fn foreign_field_issue(archetype: SiteArchetype, name: ParameterName) -> ValidationIssue {
    let accepted_by = SiteArchetype::ALL
        .into_iter()
        .filter(|other| FieldGroupDescriptor::for_archetype(*other).is_legal(name))
        .map(SiteArchetype::cli_name)
        .collect::<Vec<_>>();

    let suggestion = if accepted_by.is_empty() {
        None
    } else {
        Some(format!("`{name}` is accepted by: {}", accepted_by.join(", ")))
    };

    ValidationIssue::error(
        ValidationErrorCategory::ForeignField,
        name.as_str(),
        &format!("`{name}` is not a parameter of {archetype}"),
        suggestion.as_deref(),
    )
}

fn is_blank(params: &SiteParameters, name: ParameterName) -> bool {
    let text = match name {
        ParameterName::Title => params.title.as_deref(),
        ParameterName::Url => params.url.as_deref(),
        ParameterName::Alias => params.alias.as_deref(),
        other => return !params.is_supplied(other),
    };

    text.is_none_or(|value| value.trim().is_empty())
}

fn check_site_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| format!("`{raw}` is not an absolute URL: {e}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "`{raw}` uses the `{}` scheme; only http and https are supported",
            url.scheme()
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("`{raw}` has no host"));
    }

    Ok(())
}
