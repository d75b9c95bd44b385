//! Site archetypes, field groups and the dispatcher that provisions them
//!
//! A caller picks a [`SiteArchetype`], fills a loose [`SiteParameters`] bag, and
//! the [`parameter_set`] resolver binds that bag into the archetype's typed
//! [`FieldGroup`]. The [`service`] then shapes a creation request from the field
//! group plus the [`context`] of the current connection and submits it through
//! the [`port::SiteProvisioner`].

pub mod context;
pub mod error;
pub mod fields;
pub mod parameter_set;
pub mod parameters;
pub mod port;
pub mod provisioner;
pub mod request;
pub mod service;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use self::{
    error::SiteError,
    fields::{CommunicationSiteFields, FieldGroup, TeamSiteFields, TeamSiteNoGroupFields},
    parameter_set::{FieldGroupDescriptor, resolve},
    parameters::{ParameterName, SiteParameters},
};

/// The kind of site to create
///
/// Chosen once per invocation; decides which field group is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteArchetype {
    CommunicationSite,
    TeamSite,
    TeamSiteNoGroup,
}

impl SiteArchetype {
    pub const ALL: [Self; 3] = [Self::CommunicationSite, Self::TeamSite, Self::TeamSiteNoGroup];

    /// The name accepted on the command line
    #[must_use]
    pub fn cli_name(self) -> &'static str {
        match self {
            Self::CommunicationSite => "communication-site",
            Self::TeamSite => "team-site",
            Self::TeamSiteNoGroup => "team-site-no-group",
        }
    }
}

impl fmt::Display for SiteArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommunicationSite => f.write_str("CommunicationSite"),
            Self::TeamSite => f.write_str("TeamSite"),
            Self::TeamSiteNoGroup => f.write_str("TeamSiteNoGroup"),
        }
    }
}

impl FromStr for SiteArchetype {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "communicationsite" => Ok(Self::CommunicationSite),
            "teamsite" => Ok(Self::TeamSite),
            "teamsitenogroup" | "teamsitenom365group" => Ok(Self::TeamSiteNoGroup),
            _ => Err(SiteError::InvalidArchetype {
                value: Some(s.to_string()),
            }),
        }
    }
}

/// Built-in communication site designs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommunicationSiteDesign {
    #[default]
    Topic,
    Showcase,
    Blank,
}

impl CommunicationSiteDesign {
    pub const ALL: [Self; 3] = [Self::Topic, Self::Showcase, Self::Blank];
}

impl fmt::Display for CommunicationSiteDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Topic => f.write_str("Topic"),
            Self::Showcase => f.write_str("Showcase"),
            Self::Blank => f.write_str("Blank"),
        }
    }
}

impl FromStr for CommunicationSiteDesign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|design| design.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown site design `{s}` (expected one of: Topic, Showcase, Blank)")
            })
    }
}

/// How a communication site's design is chosen
///
/// Built from whichever design field the caller populated; never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DesignChoice {
    /// A design from the built-in catalog
    #[serde(rename = "site_design")]
    BuiltIn(CommunicationSiteDesign),

    /// A tenant-defined site design, referenced by id
    #[serde(rename = "site_design_id")]
    Custom(Uuid),
}

impl DesignChoice {
    #[must_use]
    pub fn sub_mode(&self) -> DesignSubMode {
        match self {
            Self::BuiltIn(_) => DesignSubMode::BuiltInDesign,
            Self::Custom(_) => DesignSubMode::CustomDesign,
        }
    }
}

impl Default for DesignChoice {
    fn default() -> Self {
        Self::BuiltIn(CommunicationSiteDesign::default())
    }
}

/// The two communication-site parameter sub-modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignSubMode {
    BuiltInDesign,
    CustomDesign,
}

impl fmt::Display for DesignSubMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltInDesign => f.write_str("built-in design"),
            Self::CustomDesign => f.write_str("custom design"),
        }
    }
}

/// A Windows locale identifier, e.g. `1033` for English (United States)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lcid(u32);

impl Lcid {
    pub const ENGLISH_US: Self = Self(1033);

    #[must_use]
    pub const fn new(lcid: u32) -> Self {
        Self(lcid)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Lcid {
    fn from(lcid: u32) -> Self {
        Self(lcid)
    }
}

impl fmt::Display for Lcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Preferred data location of a multi-geo tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Geography {
    Apc,
    Are,
    Aus,
    Bra,
    Can,
    Che,
    Deu,
    Eur,
    Fra,
    Gbr,
    Ind,
    Isr,
    Ita,
    Jpn,
    Kor,
    Nam,
    Nor,
    Pol,
    Qat,
    Swe,
    Zaf,
}

impl Geography {
    pub const ALL: [Self; 21] = [
        Self::Apc,
        Self::Are,
        Self::Aus,
        Self::Bra,
        Self::Can,
        Self::Che,
        Self::Deu,
        Self::Eur,
        Self::Fra,
        Self::Gbr,
        Self::Ind,
        Self::Isr,
        Self::Ita,
        Self::Jpn,
        Self::Kor,
        Self::Nam,
        Self::Nor,
        Self::Pol,
        Self::Qat,
        Self::Swe,
        Self::Zaf,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Apc => "APC",
            Self::Are => "ARE",
            Self::Aus => "AUS",
            Self::Bra => "BRA",
            Self::Can => "CAN",
            Self::Che => "CHE",
            Self::Deu => "DEU",
            Self::Eur => "EUR",
            Self::Fra => "FRA",
            Self::Gbr => "GBR",
            Self::Ind => "IND",
            Self::Isr => "ISR",
            Self::Ita => "ITA",
            Self::Jpn => "JPN",
            Self::Kor => "KOR",
            Self::Nam => "NAM",
            Self::Nor => "NOR",
            Self::Pol => "POL",
            Self::Qat => "QAT",
            Self::Swe => "SWE",
            Self::Zaf => "ZAF",
        }
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Geography {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|geo| geo.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown data location `{s}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_parses_cli_and_display_names() {
        for archetype in SiteArchetype::ALL {
            assert_eq!(archetype.cli_name().parse::<SiteArchetype>().unwrap(), archetype);
            assert_eq!(archetype.to_string().parse::<SiteArchetype>().unwrap(), archetype);
        }

        assert_eq!(
            "TeamSiteNoM365Group".parse::<SiteArchetype>().unwrap(),
            SiteArchetype::TeamSiteNoGroup
        );
        assert_eq!(
            " TEAM_SITE ".parse::<SiteArchetype>().unwrap(),
            SiteArchetype::TeamSite
        );
    }

    #[test]
    fn test_unknown_archetype_is_invalid() {
        let err = "wiki".parse::<SiteArchetype>().unwrap_err();

        assert!(matches!(
            err,
            SiteError::InvalidArchetype { value: Some(ref v) } if v == "wiki"
        ));
    }

    #[test]
    fn test_design_defaults_to_topic() {
        assert_eq!(CommunicationSiteDesign::default(), CommunicationSiteDesign::Topic);
        assert_eq!(
            DesignChoice::default(),
            DesignChoice::BuiltIn(CommunicationSiteDesign::Topic)
        );
    }

    #[test]
    fn test_design_parsing_is_case_insensitive() {
        assert_eq!(
            "showcase".parse::<CommunicationSiteDesign>().unwrap(),
            CommunicationSiteDesign::Showcase
        );
        assert!("Hero".parse::<CommunicationSiteDesign>().is_err());
    }

    #[test]
    fn test_design_choice_sub_mode() {
        assert_eq!(
            DesignChoice::Custom(Uuid::nil()).sub_mode(),
            DesignSubMode::CustomDesign
        );
        assert_eq!(DesignChoice::default().sub_mode(), DesignSubMode::BuiltInDesign);
    }

    #[test]
    fn test_geography_round_trips_through_code() {
        for geo in Geography::ALL {
            assert_eq!(geo.code().to_lowercase().parse::<Geography>().unwrap(), geo);
        }
        assert!("MARS".parse::<Geography>().is_err());
    }
}
