//! Terminal progress reporting and output formatting
//!
//! Status messages (progress, success, warnings, errors) go to stderr so that
//! stdout only carries command results, such as the address of a new site.
//! Emoji prefixes fall back to text indicators on terminals that can't show
//! them.
//!
//! # Examples
//!
//! ```rust
//! use crate::terminal_progress_reporter::TerminalProgressReporter;
//!
//! let reporter = TerminalProgressReporter::new(true); // Enable colors
//! reporter.report_progress("Submitting TeamSite");
//! reporter.report_success("Site created");
//! reporter.report_result("https://contoso.sharepoint.com/sites/marketing");
//! ```

use std::fmt::Display;

use console::{Emoji, style};

static ERROR_EMOJI: Emoji<'_, '_> = Emoji("❌ ", "[E] ");
static INFO_EMOJI: Emoji<'_, '_> = Emoji("ℹ️ ", "[I] ");
static PROGRESS_EMOJI: Emoji<'_, '_> = Emoji("• ", " • ");
static SUGGESTION_EMOJI: Emoji<'_, '_> = Emoji("✨", "-> ");
static SUCCESS_EMOJI: Emoji<'_, '_> = Emoji("✅ ", "OK ");
static WARN_EMOJI: Emoji<'_, '_> = Emoji("⚠️ ", "[W] ");

/// Types of status messages that can be displayed to the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MessageType {
    Error,
    Info,
    Progress,
    Success,
    Suggestion,
    Warning,
}

/// Terminal progress reporter for consistent CLI output formatting
#[derive(Debug, Clone, Copy)]
pub struct TerminalProgressReporter {
    /// Whether to use colored output (respects user preference and terminal capabilities)
    use_colors: bool,
}

impl TerminalProgressReporter {
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub(crate) fn use_colors(self) -> bool {
        self.use_colors
    }

    /// Format a status line with the message type's prefix and styling
    pub(crate) fn status_line(self, message_type: MessageType, message: impl Display) -> String {
        let prefix = match message_type {
            MessageType::Error => ERROR_EMOJI,
            MessageType::Info => INFO_EMOJI,
            MessageType::Progress => PROGRESS_EMOJI,
            MessageType::Success => SUCCESS_EMOJI,
            MessageType::Suggestion => SUGGESTION_EMOJI,
            MessageType::Warning => WARN_EMOJI,
        };

        let formatted_message = if self.use_colors {
            match message_type {
                MessageType::Error => style(message).for_stderr().red().bold().to_string(),
                MessageType::Info => style(message).for_stderr().blue().to_string(),
                MessageType::Progress => style(message).for_stderr().dim().to_string(),
                MessageType::Success => style(message).for_stderr().green().to_string(),
                MessageType::Suggestion => {
                    return format!(
                        "{prefix} {}: {}",
                        style("Suggestion").for_stderr().yellow().bold(),
                        &message
                    );
                }
                MessageType::Warning => style(message).for_stderr().yellow().bold().to_string(),
            }
        } else if message_type == MessageType::Suggestion {
            return format!("{prefix}Suggestion: {message}");
        } else {
            message.to_string()
        };

        format!("{prefix}{formatted_message}")
    }

    pub(crate) fn format_error(self, message: impl Display) -> String {
        self.status_line(MessageType::Error, message)
    }

    pub(crate) fn format_warning(self, message: impl Display) -> String {
        self.status_line(MessageType::Warning, message)
    }

    /// Print a command result to stdout, unstyled
    pub(crate) fn report_result(self, message: impl Display) {
        println!("{message}");
    }

    pub(crate) fn report_progress(self, message: impl Display) {
        eprintln!("{}", self.status_line(MessageType::Progress, message));
    }

    pub(crate) fn report_success(self, message: impl Display) {
        eprintln!("{}", self.status_line(MessageType::Success, message));
    }

    pub(crate) fn report_suggestion(self, message: impl Display) {
        eprintln!("{}", self.status_line(MessageType::Suggestion, message));
    }

    pub(crate) fn report_info(self, message: impl Display) {
        eprintln!("{}", self.status_line(MessageType::Info, message));
    }

    pub(crate) fn report_warning(self, message: impl Display) {
        eprintln!("{}", self.format_warning(message));
    }

    pub(crate) fn report_error(self, message: impl Display) {
        eprintln!("{}", self.format_error(message));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_terminal_reporter_formatting() {
        let reporter = TerminalProgressReporter::new(true);

        let success_msg = reporter.status_line(MessageType::Success, "Site created");
        let error_msg = reporter.format_error("Provisioning failed");
        let warning_msg = reporter.format_warning("No token");

        assert!(success_msg.contains("Site created"));
        assert!(error_msg.contains("Provisioning failed"));
        assert!(warning_msg.contains("No token"));

        assert!(success_msg.contains("✅") || success_msg.contains("OK"));
        assert!(error_msg.contains("❌") || error_msg.contains("[E]"));
        assert!(warning_msg.contains("⚠️") || warning_msg.contains("[W]"));
    }

    #[test]
    fn test_terminal_reporter_without_colors() {
        let reporter = TerminalProgressReporter::new(false);

        let success_msg = reporter.status_line(MessageType::Success, "Site created");
        let suggestion_msg = reporter.status_line(MessageType::Suggestion, "Use --wait");

        assert!(!success_msg.contains("\x1b["));
        assert!(suggestion_msg.ends_with("Suggestion: Use --wait"));
    }
}
