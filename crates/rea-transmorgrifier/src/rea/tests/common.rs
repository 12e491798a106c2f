use roxmltree::Document;

use crate::config::TransmorgrifierOptions;
use crate::domain::ListingCategory;
use crate::rea::builders::{build, BuiltListing};
use crate::rea::error::SegmentError;
use crate::rea::merge::{FieldSet, ListingField};

pub(super) const ADDRESS: &str =
    "<address><streetNumber>39</streetNumber><street>Main Road</street><suburb>RICHMOND</suburb></address>";

/// A minimal segment for `category` with the given status and body.
pub(super) fn segment(category: ListingCategory, status: &str, body: &str) -> String {
    let name = category.element_name();
    format!(
        r#"<{name} modTime="2009-01-01-12:30:00" status="{status}"><agentID>XNWXNW</agentID><uniqueID>{name}-1</uniqueID>{body}</{name}>"#
    )
}

pub(super) fn build_segment(
    xml: &str,
    category: ListingCategory,
) -> Result<BuiltListing, SegmentError> {
    let doc = Document::parse(xml).expect("valid xml");
    build(doc.root_element(), category, &TransmorgrifierOptions::default())
}

pub(super) fn fields_of(category: ListingCategory, status: &str, body: &str) -> FieldSet {
    build_segment(&segment(category, status, body), category)
        .expect("segment builds")
        .fields
}

pub(super) fn assert_fields(fields: &FieldSet, present: &[ListingField], absent: &[ListingField]) {
    for field in present {
        assert!(fields.contains(*field), "expected {field:?} to be present");
    }
    for field in absent {
        assert!(!fields.contains(*field), "expected {field:?} to be absent");
    }
}
