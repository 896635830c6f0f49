//! Error types for the recommendation engine and the rule/profile loaders

use crate::profile::Field;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A problem with a single input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: Field,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.key(), self.message)
    }
}

/// The only error the engine reports. Blocks the whole recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    #[error("invalid input: {}", join_issues(.issues))]
    InvalidInput { issues: Vec<FieldIssue> },
}

impl RecommendationError {
    pub fn invalid(issues: Vec<FieldIssue>) -> Self {
        RecommendationError::InvalidInput { issues }
    }

    /// Per-field messages, for presenters that mark individual inputs
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            RecommendationError::InvalidInput { issues } => issues,
        }
    }

    /// True if any issue concerns the given field
    pub fn concerns(&self, field: Field) -> bool {
        self.issues().iter().any(|issue| issue.field == field)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failures while reading rule tables, profile batches or export documents
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{file} line {line}: {reason}")]
    InvalidRow {
        file: String,
        line: u64,
        reason: String,
    },

    #[error("inconsistent rule table {file}: {reason}")]
    InvalidRules { file: String, reason: String },
}

pub type Result<T, E = RecommendationError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_lists_every_field() {
        let err = RecommendationError::invalid(vec![
            FieldIssue::new(Field::Age, "must be between 18 and 70"),
            FieldIssue::new(Field::Income, "must be greater than 0"),
        ]);

        assert_eq!(
            err.to_string(),
            "invalid input: age: must be between 18 and 70; income: must be greater than 0"
        );
        assert!(err.concerns(Field::Age));
        assert!(err.concerns(Field::Income));
        assert!(!err.concerns(Field::Dependents));
    }
}
