use std::path::Path;

use url::Url;

use crate::validation::{ValidationErrorCategory, ValidationIssue, ValidationIssues};

use super::AppConfig;

impl AppConfig {
    /// Full validation for the `AppConfig`
    ///
    #[must_use]
    pub fn validate(&self) -> ValidationIssues {
        let mut issues = ValidationIssues::default();

        issues.extend(validate_tenant_url(&self.tenant_url));
        issues.extend(validate_spool_directory(&self.spool_directory));
        issues.extend(self.validate_graph_token_env());

        if self.await_timeout_secs == 0 {
            issues.push(ValidationIssue::error(
                ValidationErrorCategory::InvalidValue,
                "await_timeout_secs",
                "`await_timeout_secs` must be greater than zero",
                Some("Remove the key to use the default of 300 seconds"),
            ));
        }

        issues
    }

    fn validate_graph_token_env(&self) -> Option<ValidationIssue> {
        if self.graph_token_env.trim().is_empty() {
            return Some(ValidationIssue::error(
                ValidationErrorCategory::RequiredField,
                "graph_token_env",
                "The `graph_token_env` field exists, but has no value",
                Some("Remove the key to use `SITEPROV_GRAPH_TOKEN`"),
            ));
        }

        let token_missing = std::env::var(&self.graph_token_env)
            .map(|token| token.trim().is_empty())
            .unwrap_or(true);

        (token_missing && self.connection_kind.can_acquire_graph_token()).then(|| {
            ValidationIssue::warning(
                ValidationErrorCategory::Other,
                "graph_token_env",
                &format!(
                    "Environment variable `{}` is not set; team sites cannot be created",
                    self.graph_token_env
                ),
                Some("Export a Microsoft Graph access token before creating team sites"),
            )
        })
    }
}

fn validate_tenant_url(tenant_url: &str) -> Vec<ValidationIssue> {
    if tenant_url.trim().is_empty() {
        return vec![ValidationIssue::error(
            ValidationErrorCategory::RequiredField,
            "tenant_url",
            "The `tenant_url` field exists, but has no value",
            Some("Set a value for `tenant_url`. Ex. `tenant_url: https://contoso.sharepoint.com`"),
        )];
    }

    match Url::parse(tenant_url) {
        Ok(url) if url.scheme() == "https" => Vec::new(),
        Ok(url) if url.scheme() == "http" => vec![ValidationIssue::warning(
            ValidationErrorCategory::UrlFormat,
            "tenant_url",
            "`tenant_url` uses plain http",
            Some("Tenants are normally reached over https"),
        )],
        Ok(url) => vec![ValidationIssue::error(
            ValidationErrorCategory::UrlFormat,
            "tenant_url",
            &format!("`tenant_url` uses the unsupported `{}` scheme", url.scheme()),
            Some("Use an https address. Ex. `https://contoso.sharepoint.com`"),
        )],
        Err(e) => vec![ValidationIssue::error(
            ValidationErrorCategory::UrlFormat,
            "tenant_url",
            &format!("`tenant_url` is not an absolute URL: {e}"),
            Some("Use an https address. Ex. `https://contoso.sharepoint.com`"),
        )],
    }
}

fn validate_spool_directory(spool_directory: &Path) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if spool_directory.as_os_str().is_empty() {
        issues.push(ValidationIssue::error(
            ValidationErrorCategory::RequiredField,
            "spool_directory",
            "The `spool_directory` field exists, but has no value",
            Some("Set a value for `spool_directory`. Ex. `spool_directory: ~/.local/share/siteprov/spool`"),
        ));
        return issues;
    }

    let spool_dir = spool_directory.to_string_lossy();
    let expanded_path = shellexpand::tilde(&spool_dir);

    if !Path::new(expanded_path.as_ref()).is_absolute() {
        issues.push(ValidationIssue::error(
            ValidationErrorCategory::PathFormat,
            "spool_directory",
            "The path at `spool_directory` is not absolute",
            Some("Provide an absolute path, or one starting with `~`"),
        ));
    }

    issues
}
