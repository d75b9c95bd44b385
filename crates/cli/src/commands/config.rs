use siteprov::config::AppConfig;
use tracing::info;

use crate::{tables::ValidationTableReporter, terminal_progress_reporter::TerminalProgressReporter};

pub(crate) fn handle_validate(
    original_config: &AppConfig,
    reporter: TerminalProgressReporter,
) -> i32 {
    info!("Validating configuration");

    let issues = original_config.validate();

    if issues.has_errors() {
        reporter.report_error("Validation failed.");

        ValidationTableReporter::new()
            .add_validation_errors(&issues.errors(), reporter)
            .add_validation_warnings(&issues.warnings(), reporter)
            .print();
        1
    } else if issues.has_warnings() {
        reporter.report_warning("Configuration is valid, with warnings.");

        ValidationTableReporter::new()
            .add_validation_warnings(&issues.warnings(), reporter)
            .print();
        0
    } else {
        reporter.report_success("Configuration is valid.");

        0
    }
}
