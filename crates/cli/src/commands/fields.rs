use siteprov::site::resolve;
use tracing::info;

use crate::{tables::FieldTableReporter, terminal_progress_reporter::TerminalProgressReporter};

pub(crate) fn handle_fields(site_type: &str, reporter: TerminalProgressReporter) -> i32 {
    info!(site_type, "Listing fields");

    match resolve(Some(site_type)) {
        Ok(descriptor) => {
            reporter.report_info(format!("Fields accepted by {}", descriptor.archetype()));

            FieldTableReporter::new()
                .add_fields(&descriptor, reporter)
                .print();
            0
        }
        Err(err) => {
            reporter.report_error(format!("[{}] {err}", err.category()));
            1
        }
    }
}
