//! Error types for directory loading and booking validation.

use crate::booking::BookingField;
use crate::types::ProviderId;

/// Failure to produce a directory snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("Malformed provider document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Provider id {0} appears more than once")]
    DuplicateId(ProviderId),

    /// Fetch failures reported by sources that do not go through reqwest.
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// A booking draft that cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", list_fields(.0))]
    MissingFields(Vec<BookingField>),
}

fn list_fields(fields: &[BookingField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_labels() {
        let err = ValidationError::MissingFields(vec![BookingField::Name, BookingField::Date]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: Your Name, Appointment Date"
        );
    }

    #[test]
    fn test_duplicate_id_message() {
        let err = DirectoryError::DuplicateId(ProviderId(7));
        assert_eq!(err.to_string(), "Provider id 7 appears more than once");
    }
}
