use super::query::name_of;
use crate::domain::ListingCategory;
use roxmltree::{Document, Node};

/// What a top-level element turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Listing(ListingCategory),
    Unhandled,
}

/// One listing-level element of the document, in document order.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a, 'input> {
    pub index: usize,
    pub node: Node<'a, 'input>,
    pub kind: SegmentKind,
}

/// Vendor listing categories this crate does not build.
const UNHANDLED_CATEGORIES: &[&str] = &[
    "commercial",
    "commercialLand",
    "commercialRental",
    "business",
    "holidayRental",
];

fn kind_of(node: Node<'_, '_>) -> Option<SegmentKind> {
    let name = name_of(node);
    if let Some(category) = ListingCategory::from_element_name(name) {
        return Some(SegmentKind::Listing(category));
    }
    UNHANDLED_CATEGORIES
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(name))
        .then_some(SegmentKind::Unhandled)
}

/// Lists the segments of a parsed document.
///
/// The root is either one listing or a wrapper (normally `propertyList`) whose element
/// children are listings. Children of a wrapper that are not a known category are still
/// returned as `Unhandled` so every element is accounted for.
pub fn extract<'a, 'input>(document: &'a Document<'input>) -> Vec<Segment<'a, 'input>> {
    let root = document.root_element();
    if let Some(kind) = kind_of(root) {
        return vec![Segment {
            index: 0,
            node: root,
            kind,
        }];
    }

    root.children()
        .filter(|node| node.is_element())
        .enumerate()
        .map(|(index, node)| Segment {
            index,
            node,
            kind: kind_of(node).unwrap_or(SegmentKind::Unhandled),
        })
        .collect()
}
