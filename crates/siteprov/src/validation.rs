use core::fmt;

/// A single validation issue (error or warning)
///
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// The category of the issue
    ///
    pub(crate) category: ValidationErrorCategory,

    /// The field or context where the issue was found
    ///
    pub(crate) field: String,

    /// Detailed description of the issue
    ///
    pub(crate) message: String,

    /// Is this a warning (false = error)
    ///
    pub(crate) level: ValidationLevel,

    /// Suggested fix for the issue
    ///
    pub(crate) suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation error
    ///
    pub(crate) fn error(
        category: ValidationErrorCategory,
        field: &str,
        message: &str,
        suggestion: Option<&str>,
    ) -> Self {
        Self {
            category,
            field: field.to_string(),
            message: message.to_string(),
            level: ValidationLevel::Error,
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    /// Create a new validation warning
    pub(crate) fn warning(
        category: ValidationErrorCategory,
        field: &str,
        message: &str,
        suggestion: Option<&str>,
    ) -> Self {
        Self {
            category,
            field: field.to_string(),
            message: message.to_string(),
            level: ValidationLevel::Warning,
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    #[must_use]
    pub fn category(&self) -> ValidationErrorCategory {
        self.category
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn level(&self) -> ValidationLevel {
        self.level
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&String> {
        self.suggestion.as_ref()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: {}", self.field, self.message)
    }
}

/// An ordered collection of [`ValidationIssue`]s
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationIssues(Vec<ValidationIssue>);

impl ValidationIssues {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|i| i.level == ValidationLevel::Error)
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.0.iter().any(|i| i.level == ValidationLevel::Warning)
    }

    #[must_use]
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.0
            .iter()
            .filter(|i| i.level == ValidationLevel::Error)
            .collect()
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.0
            .iter()
            .filter(|i| i.level == ValidationLevel::Warning)
            .collect()
    }

    /// Names of the fields that have at least one error, in reporting order
    #[must_use]
    pub fn error_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();

        for issue in self.errors() {
            if !fields.contains(&issue.field()) {
                fields.push(issue.field());
            }
        }

        fields
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, issue: ValidationIssue) {
        self.0.push(issue);
    }
}

impl Extend<ValidationIssue> for ValidationIssues {
    fn extend<I: IntoIterator<Item = ValidationIssue>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl From<Vec<ValidationIssue>> for ValidationIssues {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self(issues)
    }
}

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join("; "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationLevel {
    Error,
    Warning,
}

/// Categories of validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCategory {
    /// Missing required fields
    ///
    RequiredField,

    /// Field that does not belong to the active parameter set
    ///
    ForeignField,

    /// Fields that cannot be supplied together
    ///
    Conflict,

    /// Invalid field values
    ///
    InvalidValue,

    /// URL format errors
    ///
    UrlFormat,

    /// Path format errors
    ///
    PathFormat,

    /// Other errors
    ///
    Other,
}

impl fmt::Display for ValidationErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiredField => f.write_str("required_field"),
            Self::ForeignField => f.write_str("foreign_field"),
            Self::Conflict => f.write_str("conflict"),
            Self::InvalidValue => f.write_str("invalid_value"),
            Self::UrlFormat => f.write_str("url_format"),
            Self::PathFormat => f.write_str("path_format"),
            Self::Other => f.write_str("other"),
        }
    }
}
