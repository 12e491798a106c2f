use super::error::{ErrorKind, SegmentError};
use crate::domain::Listing;
use serde::{Deserialize, Serialize};

/// Name reported in [`ParsedResult::source_name`].
pub const SOURCE_NAME: &str = "REA";

/// Outcome of one `parse` call. Every segment of the document lands in exactly one of
/// `listings`, `errors` or `unhandled_data`, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResult {
    pub listings: Vec<ListingResult>,
    pub errors: Vec<ParsedError>,
    /// Raw XML of segments whose category is not built here.
    pub unhandled_data: Vec<String>,
    pub source_name: String,
}

impl ParsedResult {
    pub fn new() -> Self {
        Self {
            listings: Vec::new(),
            errors: Vec::new(),
            unhandled_data: Vec::new(),
            source_name: SOURCE_NAME.to_string(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.listings.len() + self.errors.len() + self.unhandled_data.len()
    }
}

impl Default for ParsedResult {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingResult {
    pub listing: Listing,
    pub warnings: Vec<String>,
    /// The segment's raw XML.
    pub source_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedError {
    pub exception_message: String,
    pub kind: ErrorKind,
    /// The raw XML that failed.
    pub invalid_data: String,
    pub agency_id: Option<String>,
    pub listing_id: Option<String>,
}

impl ParsedError {
    pub fn from_segment_error(
        error: &SegmentError,
        invalid_data: impl Into<String>,
        agency_id: Option<String>,
        listing_id: Option<String>,
    ) -> Self {
        Self {
            exception_message: error.to_string(),
            kind: error.kind(),
            invalid_data: invalid_data.into(),
            agency_id,
            listing_id,
        }
    }
}
