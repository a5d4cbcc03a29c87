//! Parse issue types for recoverable parsing problems
//!
//! Contains types for representing warnings and notes that the reader and
//! writer recover from. These allow processing to continue while collecting
//! problems for the caller to inspect or ignore.

use core::fmt;

/// Parse issue severity levels
///
/// Determines how serious an issue is. Nothing the codec reports as an
/// issue stops processing; the severity only guides the caller.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IssueSeverity {
    /// Information that may be useful but doesn't affect the result
    Info,

    /// Non-standard input or output that was coerced to something legal
    Warning,

    /// Input that was dropped, so the result lost data
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Issue categories for filtering
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    /// Section headers and document layout
    Structure,

    /// Style rows
    Style,

    /// Dialogue and comment rows
    Event,

    /// Timestamps and time ranges
    Timing,

    /// Color literals
    Color,

    /// `Format:` lines and field counts
    Format,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Style => write!(f, "style"),
            Self::Event => write!(f, "event"),
            Self::Timing => write!(f, "timing"),
            Self::Color => write!(f, "color"),
            Self::Format => write!(f, "format"),
        }
    }
}

/// Recoverable problem found while reading or writing a script
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Issue severity level
    pub severity: IssueSeverity,

    /// Issue category for filtering/grouping
    pub category: IssueCategory,

    /// Human-readable message
    pub message: String,

    /// Line number where issue occurred (1-based, 0 when not tied to a line)
    pub line: usize,

    /// Suggested fix or explanation
    pub suggestion: Option<String>,
}

impl ParseIssue {
    /// Create new parse issue with minimal information
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        message: String,
        line: usize,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            line,
            suggestion: None,
        }
    }

    /// Add suggestion to existing issue
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Create info-level issue
    #[must_use]
    pub const fn info(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Info, category, message, line)
    }

    /// Create warning-level issue
    #[must_use]
    pub const fn warning(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Warning, category, message, line)
    }

    /// Create error-level issue
    #[must_use]
    pub const fn error(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Error, category, message, line)
    }

    /// Format issue for display in a console
    #[must_use]
    pub fn format_for_display(&self) -> String {
        let mut result = format!(
            "[{}:{}] {}: {}",
            self.line, self.category, self.severity, self.message
        );

        if let Some(suggestion) = &self.suggestion {
            result.push_str("\n  Suggestion: ");
            result.push_str(suggestion);
        }

        result
    }

    /// Emit this issue through `tracing` at a level matching its severity
    pub(crate) fn log(&self) {
        match self.severity {
            IssueSeverity::Info => tracing::debug!(
                line = self.line,
                category = %self.category,
                "{}",
                self.message
            ),
            IssueSeverity::Warning => tracing::warn!(
                line = self.line,
                category = %self.category,
                "{}",
                self.message
            ),
            IssueSeverity::Error => tracing::error!(
                line = self.line,
                category = %self.category,
                "{}",
                self.message
            ),
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_for_display())
    }
}
