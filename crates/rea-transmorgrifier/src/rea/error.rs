use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw text that could not be coerced into the type a field needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralParseError {
    #[error("Failed to parse element: {element}; value: '{value}' into a {target}.")]
    InvalidValue {
        element: String,
        value: String,
        target: &'static str,
    },
    #[error("Value '{value}' is out of range. It should only be 0/1/yes/no.")]
    NotOneZeroYesNo { value: String },
    #[error("Value '{value}' is out of range. It should only be true/false.")]
    NotTrueFalse { value: String },
    #[error(
        "Failed to parse the value '{value}' into an int. Is it a valid number? Does it contain decimal point values?"
    )]
    NotAnInteger { value: String },
    #[error("Failed to parse the value '{value}' into a byte.")]
    ByteOutOfRange { value: String },
    #[error(
        "Invalid date/time trying to be parsed. Attempted the value: '{value}' but that format is invalid. Element/Attribute: {location}"
    )]
    InvalidDateTime { value: String, location: String },
    #[error("Inspection element has an invalid Date/Time value. Element: {element}")]
    InvalidInspection { element: String },
    #[error("Expected the element '{name}' but failed to find it in the element '{parent}'.")]
    MissingElement { name: String, parent: String },
    #[error("Expected the attribute '{name}' but failed to find it in the element '{element}'.")]
    MissingAttribute { name: String, element: String },
    #[error("The XML document could not be read: {reason}")]
    MalformedXml { reason: String },
}

/// A status, category or vocabulary value the feed does not define.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    #[error("Invalid status '{value}' found for the listing category '{category}'.")]
    UnknownStatus { value: String, category: String },
    #[error("Invalid {vocabulary} '{value}'. Allowed values: {allowed}.")]
    UnknownValue {
        vocabulary: &'static str,
        value: String,
        allowed: String,
    },
    #[error(
        "The existing listing '{listing_id}' is a {existing} listing but the segment describes a {segment} listing."
    )]
    CategoryMismatch {
        listing_id: String,
        existing: String,
        segment: String,
    },
}

/// Failure that rejects a single segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error(transparent)]
    Structural(#[from] StructuralParseError),
    #[error(transparent)]
    Classification(#[from] ClassificationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    StructuralParse,
    Classification,
}

impl SegmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SegmentError::Structural(_) => ErrorKind::StructuralParse,
            SegmentError::Classification(_) => ErrorKind::Classification,
        }
    }
}

/// Which document attribute fell outside its allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentField {
    #[serde(rename = "usage")]
    Usage,
    #[serde(rename = "contentType")]
    ContentType,
}

impl DocumentField {
    pub fn attribute_name(&self) -> &'static str {
        match self {
            DocumentField::Usage => "usage",
            DocumentField::ContentType => "contentType",
        }
    }
}

/// Non-fatal: documents were dropped because of unrecognised metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDocumentWarning {
    pub field: DocumentField,
    /// Distinct offending values in order of first appearance.
    pub values: Vec<String>,
}

impl fmt::Display for InvalidDocumentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At least 1 document has an invalid '{}' value. Invalid values: {}",
            self.field.attribute_name(),
            self.values.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_deterministic() {
        let err = StructuralParseError::InvalidValue {
            element: "residential.price".to_string(),
            value: "aaa".to_string(),
            target: "int",
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse element: residential.price; value: 'aaa' into a int."
        );

        let err = SegmentError::from(StructuralParseError::NotOneZeroYesNo {
            value: "range".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Value 'range' is out of range. It should only be 0/1/yes/no."
        );
        assert_eq!(err.kind(), ErrorKind::StructuralParse);
    }

    #[test]
    fn classification_errors_report_their_kind() {
        let err = SegmentError::from(ClassificationError::UnknownStatus {
            value: "pending".to_string(),
            category: "residential".to_string(),
        });
        assert_eq!(err.kind(), ErrorKind::Classification);
        assert_eq!(
            err.to_string(),
            "Invalid status 'pending' found for the listing category 'residential'."
        );
    }

    #[test]
    fn warning_lists_values_in_order() {
        let warning = InvalidDocumentWarning {
            field: DocumentField::ContentType,
            values: vec!["blah-1".to_string(), "blah-2".to_string()],
        };
        assert_eq!(
            warning.to_string(),
            "At least 1 document has an invalid 'contentType' value. Invalid values: blah-1, blah-2"
        );
    }
}
