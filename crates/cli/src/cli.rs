// src/cli.rs
use clap::{Args, Parser, Subcommand};
use siteprov::site::{CommunicationSiteDesign, Geography, context::ConnectionKind};
use uuid::Uuid;

/// Siteprov - Provision communication and team sites
///
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ClapCli {
    /// Override how the connection was authenticated
    ///
    #[clap(long, global = true)]
    pub(crate) connection_kind: Option<ConnectionKind>,

    /// Override the session locale (LCID) from config
    ///
    #[clap(long, global = true)]
    pub(crate) locale: Option<u32>,

    /// Show detailed output
    ///
    #[clap(long, short = 'v', global = true, default_value_t = false)]
    pub(crate) verbose: bool,

    /// Disable colored output
    ///
    #[clap(long, global = true, default_value_t = false)]
    pub(crate) no_color: bool,

    /// Subcommand to execute
    ///
    #[clap(subcommand)]
    pub(crate) command: ClapCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ClapCommands {
    /// Create a new site
    ///
    New(Box<NewSiteArgs>),

    /// Show the fields a site type accepts
    ///
    Fields {
        /// Site type: communication-site, team-site or team-site-no-group
        #[clap(long = "type")]
        site_type: String,
    },

    /// Siteprov: configuration management commands
    ///
    Config(ConfigCommands),
}

#[derive(Args, Debug, Clone)]
pub(crate) struct NewSiteArgs {
    /// Site type: communication-site, team-site or team-site-no-group
    #[clap(long = "type")]
    pub(crate) site_type: String,

    /// Site title (team sites: the group's display name)
    #[clap(long)]
    pub(crate) title: Option<String>,

    /// Full address of the new site
    #[clap(long)]
    pub(crate) url: Option<String>,

    /// Mail nickname of the group backing a team site
    #[clap(long)]
    pub(crate) alias: Option<String>,

    #[clap(long)]
    pub(crate) description: Option<String>,

    #[clap(long)]
    pub(crate) classification: Option<String>,

    /// Allow sharing by email
    #[clap(long)]
    pub(crate) share_by_email_enabled: bool,

    /// Make the team site's group public
    #[clap(long)]
    pub(crate) is_public: bool,

    /// Built-in design: Topic, Showcase or Blank
    #[clap(long)]
    pub(crate) site_design: Option<CommunicationSiteDesign>,

    /// Id of a custom site design
    #[clap(long)]
    pub(crate) site_design_id: Option<Uuid>,

    /// Locale of the new site
    #[clap(long)]
    pub(crate) lcid: Option<u32>,

    #[clap(long)]
    pub(crate) owner: Option<String>,

    /// Owners of a team site, comma separated
    #[clap(long, value_delimiter = ',')]
    pub(crate) owners: Option<Vec<String>>,

    /// Preferred data location, e.g. EUR
    #[clap(long)]
    pub(crate) preferred_data_location: Option<Geography>,

    #[clap(long)]
    pub(crate) sensitivity_label: Option<String>,

    /// Hub site to associate the new site with
    #[clap(long)]
    pub(crate) hub_site_id: Option<Uuid>,

    /// Wait until the site has been created
    #[clap(long)]
    pub(crate) wait: bool,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ConfigCommands {
    #[clap(subcommand)]
    pub(crate) command: ConfigSubcommands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ConfigSubcommands {
    /// Validate the siteprov configuration
    Validate,
}
