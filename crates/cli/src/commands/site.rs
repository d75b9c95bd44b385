use siteprov::{
    config::AppConfig,
    fs::RealFileSystem,
    site::{
        SiteError, SiteParameters,
        context::{ConfiguredConnection, ContextError},
        port::Completion,
        provisioner::SpoolProvisioner,
        request::CompletionMode,
        resolve,
        service::{SiteService, SiteServiceImpl, SubmitOptions},
    },
};
use tracing::info;

use crate::{
    cli::NewSiteArgs, tables::ValidationTableReporter,
    terminal_progress_reporter::TerminalProgressReporter,
};

pub(crate) async fn handle_new(
    args: &NewSiteArgs,
    config: &AppConfig,
    reporter: TerminalProgressReporter,
) -> i32 {
    let service = SiteServiceImpl::new(
        SpoolProvisioner::from_config(RealFileSystem, config),
        ConfiguredConnection::from_config(config),
    );

    run_new(&service, args, config, reporter).await
}

async fn run_new<S: SiteService>(
    service: &S,
    args: &NewSiteArgs,
    config: &AppConfig,
    reporter: TerminalProgressReporter,
) -> i32 {
    let archetype = match resolve(Some(&args.site_type)) {
        Ok(descriptor) => descriptor.archetype(),
        Err(err) => {
            report_site_error(&err, config, reporter);
            return 1;
        }
    };

    info!(%archetype, "Creating site");

    let options = SubmitOptions::new(args.hub_site_id, CompletionMode::from_wait(args.wait));
    if options.completion.blocks_until_complete() {
        reporter.report_progress(format!("Creating {archetype}, waiting for completion"));
    } else {
        reporter.report_progress(format!("Submitting {archetype}"));
    }

    match service
        .build_and_submit(archetype, &site_parameters(args), options)
        .await
    {
        Ok(outcome) => {
            match outcome.completion() {
                Completion::Completed => reporter.report_success(format!("{archetype} created")),
                Completion::Accepted => reporter.report_success(format!(
                    "{archetype} accepted, creation continues in the background"
                )),
            }
            reporter.report_result(outcome.address());
            0
        }
        Err(err) => {
            report_site_error(&err, config, reporter);
            1
        }
    }
}

fn site_parameters(args: &NewSiteArgs) -> SiteParameters {
    SiteParameters {
        title: args.title.clone(),
        url: args.url.clone(),
        alias: args.alias.clone(),
        description: args.description.clone(),
        classification: args.classification.clone(),
        share_by_email_enabled: args.share_by_email_enabled.then_some(true),
        is_public: args.is_public.then_some(true),
        site_design: args.site_design,
        site_design_id: args.site_design_id,
        lcid: args.lcid.map(Into::into),
        owner: args.owner.clone(),
        owners: args.owners.clone(),
        preferred_data_location: args.preferred_data_location,
        sensitivity_label: args.sensitivity_label.clone(),
    }
}

fn report_site_error(err: &SiteError, config: &AppConfig, reporter: TerminalProgressReporter) {
    reporter.report_error(format!("[{}] {err}", err.category()));

    match err {
        SiteError::InvalidArchetype { .. } => {
            reporter.report_suggestion(
                "Run `siteprov-cli fields --type <TYPE>` to see what a site type accepts",
            );
        }
        SiteError::ParameterSetViolation { issues, .. } => {
            ValidationTableReporter::new()
                .add_validation_errors(&issues.errors(), reporter)
                .add_validation_warnings(&issues.warnings(), reporter)
                .print();
        }
        SiteError::CapabilityUnavailable { .. } => {
            reporter.report_suggestion(
                "Use a connection that can acquire a Microsoft Graph token, or create a team-site-no-group instead",
            );
        }
        SiteError::Context {
            source: ContextError::TokenUnavailable { .. },
            ..
        } => {
            reporter.report_suggestion(format!(
                "Set the `{}` environment variable to a Microsoft Graph access token",
                config.graph_token_env()
            ));
        }
        SiteError::Context { .. } | SiteError::Provisioning { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use siteprov::site::{
        SiteArchetype, context::ConnectionKind, port::ProvisioningOutcome,
        service::MockSiteService,
    };
    use test_common::{NEWS_URL, test_config};

    use crate::cli::{ClapCli, ClapCommands};

    fn new_args(args: &[&str]) -> NewSiteArgs {
        let cli = ClapCli::parse_from(["siteprov", "new"].iter().chain(args));
        match cli.command {
            ClapCommands::New(args) => *args,
            other => panic!("expected `new`, got {other:?}"),
        }
    }

    #[test]
    fn test_switches_are_only_supplied_when_given() {
        let params = site_parameters(&new_args(&["--type", "team-site", "--is-public"]));

        assert_eq!(params.is_public, Some(true));
        assert_eq!(params.share_by_email_enabled, None);
    }

    #[test]
    fn test_owners_split_on_commas() {
        let params = site_parameters(&new_args(&[
            "--type",
            "team-site",
            "--owners",
            "ada@contoso.com,alan@contoso.com",
        ]));

        assert_eq!(
            params.owners,
            Some(vec![
                "ada@contoso.com".to_string(),
                "alan@contoso.com".to_string()
            ])
        );
    }

    #[tokio::test]
    async fn test_run_new_passes_archetype_and_wait_to_service() {
        let mut service = MockSiteService::new();
        service
            .expect_build_and_submit()
            .withf(|archetype, params, options| {
                *archetype == SiteArchetype::CommunicationSite
                    && params.url.as_deref() == Some(NEWS_URL)
                    && options.completion == CompletionMode::AwaitCompletion
                    && options.hub_site_id.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(ProvisioningOutcome::completed(NEWS_URL)));

        let args = new_args(&[
            "--type",
            "communication-site",
            "--title",
            "Contoso News",
            "--url",
            NEWS_URL,
            "--wait",
        ]);

        let code = run_new(
            &service,
            &args,
            &test_config(),
            TerminalProgressReporter::new(false),
        )
        .await;

        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_run_new_unknown_type_never_reaches_service() {
        let mut service = MockSiteService::new();
        service.expect_build_and_submit().never();

        let args = new_args(&["--type", "wiki", "--title", "Docs"]);

        let code = run_new(
            &service,
            &args,
            &test_config(),
            TerminalProgressReporter::new(false),
        )
        .await;

        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn test_run_new_service_error_exits_with_failure() {
        let mut service = MockSiteService::new();
        service.expect_build_and_submit().returning(|archetype, _, _| {
            Err(SiteError::CapabilityUnavailable {
                archetype,
                connection_kind: ConnectionKind::AppOnlyAcs,
            })
        });

        let args = new_args(&["--type", "team-site", "--title", "Marketing", "--alias", "mkt"]);

        let code = run_new(
            &service,
            &args,
            &test_config(),
            TerminalProgressReporter::new(false),
        )
        .await;

        assert_eq!(code, 1);
    }
}
