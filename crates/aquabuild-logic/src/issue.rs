//! Compatibility findings.
//!
//! A finding with `severity: Error` is a domain result ("these species will
//! fight"), not a fault — the engine never fails on type-valid input. Issue
//! ids are stable slugs derived from their cause, so re-evaluating the same
//! build produces the same ids and consumers can diff reports idempotently.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueCategory {
    Water,
    Space,
    Aggression,
    Equipment,
    Other,
}

/// One compatibility problem found in a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityIssue {
    /// Stable slug, e.g. `temp-mismatch` or `predator-fish-3-fish-1`.
    pub id: String,
    pub severity: Severity,
    pub category: IssueCategory,
    pub title: String,
    pub description: String,
    /// Ids of the catalog items involved. For directional pairwise issues
    /// the aggressor comes first.
    pub affected_items: Vec<String>,
    pub suggestion: Option<String>,
}

impl CompatibilityIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_error() {
        let issue = CompatibilityIssue {
            id: "temp-mismatch".to_string(),
            severity: Severity::Error,
            category: IssueCategory::Water,
            title: "Incompatible Temperature Requirements".to_string(),
            description: String::new(),
            affected_items: vec![],
            suggestion: None,
        };
        assert!(issue.is_error());
        let warn = CompatibilityIssue {
            severity: Severity::Warning,
            ..issue
        };
        assert!(!warn.is_error());
    }
}
