//! realestate.com.au XML feed support.
//!
//! [`ReaXmlTransmorgrifier::parse`] reads a document, splits it into listing segments, builds
//! each segment independently (in parallel) and gathers the outcomes into a [`ParsedResult`].
//! A bad segment never affects its neighbours and `parse` itself never fails.

mod builders;
pub mod coerce;
pub mod dates;
pub mod error;
mod mapping;
pub mod merge;
pub mod normalizer;
pub mod query;
mod result;
pub mod segments;
pub mod status;

#[cfg(test)]
mod tests;

pub use error::{
    ClassificationError, DocumentField, ErrorKind, InvalidDocumentWarning, SegmentError,
    StructuralParseError,
};
pub use merge::{merge, FieldSet, ListingField};
pub use result::{ListingResult, ParsedError, ParsedResult, SOURCE_NAME};

use crate::config::TransmorgrifierOptions;
use crate::domain::{Listing, ListingCategory};
use query::{name_of, outer_xml};
use rayon::prelude::*;
use roxmltree::{Document, Node, ParsingOptions};
use segments::{Segment, SegmentKind};
use tracing::{debug, debug_span, info, warn};

/// Converts REA XML into listings.
#[derive(Debug, Clone, Default)]
pub struct ReaXmlTransmorgrifier {
    options: TransmorgrifierOptions,
}

enum SegmentOutcome {
    Listing(ListingResult),
    Error(ParsedError),
    Unhandled(String),
}

impl ReaXmlTransmorgrifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TransmorgrifierOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TransmorgrifierOptions {
        &self.options
    }

    /// Parses `xml`. When `existing` is given, the segment with the same agency and listing id
    /// is merged onto it; `existing` itself is left untouched.
    pub fn parse(&self, xml: &str, existing: Option<&Listing>) -> ParsedResult {
        let parsing = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = match Document::parse_with_options(xml, parsing) {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "xml document could not be read");
                let error = SegmentError::from(StructuralParseError::MalformedXml {
                    reason: err.to_string(),
                });
                let mut result = ParsedResult::new();
                result
                    .errors
                    .push(ParsedError::from_segment_error(&error, xml, None, None));
                return result;
            }
        };

        let segments = segments::extract(&document);
        let outcomes: Vec<SegmentOutcome> = segments
            .par_iter()
            .map(|segment| self.process(segment, existing))
            .collect();

        let mut result = ParsedResult::new();
        for outcome in outcomes {
            match outcome {
                SegmentOutcome::Listing(listing) => result.listings.push(listing),
                SegmentOutcome::Error(error) => result.errors.push(error),
                SegmentOutcome::Unhandled(raw) => result.unhandled_data.push(raw),
            }
        }

        info!(
            listings = result.listings.len(),
            errors = result.errors.len(),
            unhandled = result.unhandled_data.len(),
            "parsed rea document"
        );
        result
    }

    fn process(&self, segment: &Segment<'_, '_>, existing: Option<&Listing>) -> SegmentOutcome {
        let source = outer_xml(segment.node).to_string();
        let SegmentKind::Listing(category) = segment.kind else {
            debug!(
                index = segment.index,
                element = name_of(segment.node),
                "skipping unhandled listing category"
            );
            return SegmentOutcome::Unhandled(source);
        };

        let span = debug_span!("segment", index = segment.index, %category);
        let _entered = span.enter();

        match self.build_listing(segment.node, category, existing) {
            Ok((listing, warnings)) => {
                for warning in &warnings {
                    warn!(listing_id = listing.id(), %warning, "dropped invalid documents");
                }
                debug!(listing_id = listing.id(), status = %listing.status_type(), "built listing");
                SegmentOutcome::Listing(ListingResult {
                    listing,
                    warnings: warnings.iter().map(ToString::to_string).collect(),
                    source_data: source,
                })
            }
            Err(error) => {
                let (agency_id, listing_id) = builders::identity(segment.node);
                warn!(?agency_id, ?listing_id, %error, "rejected listing segment");
                SegmentOutcome::Error(ParsedError::from_segment_error(
                    &error, source, agency_id, listing_id,
                ))
            }
        }
    }

    fn build_listing(
        &self,
        node: Node<'_, '_>,
        category: ListingCategory,
        existing: Option<&Listing>,
    ) -> Result<(Listing, Vec<InvalidDocumentWarning>), SegmentError> {
        let built = builders::build(node, category, &self.options)?;

        let matching = existing.filter(|existing| {
            existing.agency_id() == built.listing.agency_id() && existing.id() == built.listing.id()
        });
        let listing = match matching {
            Some(existing) => merge(built.listing, &built.fields, existing)?,
            None => built.listing,
        };

        Ok((listing, built.warnings))
    }
}
