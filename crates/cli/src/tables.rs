use comfy_table::{
    Cell, ContentArrangement, Row, Table, modifiers::UTF8_ROUND_CORNERS,
    presets::UTF8_FULL_CONDENSED,
};
use siteprov::{
    site::{FieldGroupDescriptor, parameter_set::Requirement},
    validation::ValidationIssue,
};

use crate::{formatters::format_key, terminal_progress_reporter::TerminalProgressReporter};

fn styled_table(header: Vec<&'static str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Issues found in a config file or a site's parameters, printed to stderr
pub(crate) struct ValidationTableReporter {
    table: Table,
}

impl ValidationTableReporter {
    pub(crate) fn new() -> Self {
        Self {
            table: styled_table(vec!["Category", "Field", "Message", "Suggestion"]),
        }
    }

    pub(crate) fn add_validation_errors(
        &mut self,
        error_issues: &[&ValidationIssue],
        reporter: TerminalProgressReporter,
    ) -> &mut Self {
        for error in error_issues {
            self.add_issue(reporter.format_error(error.category()), error);
        }

        self
    }

    pub(crate) fn add_validation_warnings(
        &mut self,
        warning_issues: &[&ValidationIssue],
        reporter: TerminalProgressReporter,
    ) -> &mut Self {
        for warning in warning_issues {
            self.add_issue(reporter.format_warning(warning.category()), warning);
        }

        self
    }

    fn add_issue(&mut self, category: String, issue: &ValidationIssue) {
        self.table.add_row(vec![
            category,
            issue.field().to_string(),
            issue.message().to_string(),
            issue
                .suggestion()
                .map(ToString::to_string)
                .unwrap_or_default(),
        ]);
    }

    pub(crate) fn print(&self) {
        eprintln!("{}", &self.table);
    }
}

/// The legal fields of one site type, printed to stdout
pub(crate) struct FieldTableReporter {
    table: Table,
}

impl FieldTableReporter {
    pub(crate) fn new() -> Self {
        Self {
            table: styled_table(vec!["Field", "Requirement", "Default", "Design"]),
        }
    }

    pub(crate) fn add_fields(
        &mut self,
        descriptor: &FieldGroupDescriptor,
        reporter: TerminalProgressReporter,
    ) -> &mut Self {
        for field in descriptor.fields() {
            let requirement = match field.requirement() {
                Requirement::MandatoryIn(_) => "mandatory".to_string(),
                other => other.to_string(),
            };

            self.add_row(vec![
                Cell::new(format_key(field.name(), reporter.use_colors())),
                Cell::new(requirement),
                Cell::new(field.default_value().unwrap_or_default()),
                Cell::new(
                    field
                        .sub_mode()
                        .map(|mode| mode.to_string())
                        .unwrap_or_default(),
                ),
            ]);
        }

        self
    }

    fn add_row<T: Into<Row>>(&mut self, row: T) -> &mut Self {
        self.table.add_row(row);
        self
    }

    pub(crate) fn print(&self) {
        println!("{}", &self.table);
    }
}
