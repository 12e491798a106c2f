use super::position;
use crate::domain::Media;
use crate::rea::dates::parse_date_time;
use crate::rea::error::{DocumentField, InvalidDocumentWarning, StructuralParseError};
use crate::rea::merge::{FieldSet, ListingField};
use crate::rea::query::{attribute_or_default, child, children};
use roxmltree::Node;
use std::cmp::Ordering;

const DOCUMENT_USAGES: &[&str] = &[
    "statementOfInformation",
    "brochure",
    "contractOfSale",
    "vendorStatement",
];

const DOCUMENT_CONTENT_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];

/// Reported in place of a usage the document did not give.
const MISSING_USAGE: &str = "(none)";

#[derive(Debug, Default)]
pub(super) struct MediaParts {
    pub images: Vec<Media>,
    pub floor_plans: Vec<Media>,
    pub documents: Vec<Media>,
    pub warnings: Vec<InvalidDocumentWarning>,
}

/// Images, floor plans and documents.
///
/// `objects` describes the full media set; the older `images`/`floorplans` containers each
/// describe one collection.
pub(super) fn read_media(
    node: Node<'_, '_>,
    fields: &mut FieldSet,
) -> Result<MediaParts, StructuralParseError> {
    let objects = child(node, "objects");
    let image_parent = objects.or_else(|| child(node, "images"));
    let plan_parent = objects.or_else(|| child(node, "floorplans"));

    let mut parts = MediaParts::default();
    if let Some(parent) = image_parent {
        fields.insert(ListingField::Images);
        parts.images = read_items(parent, "img")?;
    }
    if let Some(parent) = plan_parent {
        fields.insert(ListingField::FloorPlans);
        parts.floor_plans = read_items(parent, "floorplan")?;
    }
    if let Some(objects) = objects {
        fields.insert(ListingField::Documents);
        let (documents, warnings) = read_documents(objects)?;
        parts.documents = documents;
        parts.warnings = warnings;
    }

    Ok(parts)
}

fn read_items(parent: Node<'_, '_>, element: &str) -> Result<Vec<Media>, StructuralParseError> {
    let mut items = Vec::new();
    for item in children(parent, element) {
        let Some(url) = attribute_or_default(item, "url").or_else(|| attribute_or_default(item, "file"))
        else {
            continue;
        };

        items.push(Media {
            id: attribute_or_default(item, "id").unwrap_or_default(),
            url,
            order: 0,
            tag: None,
            content_type: attribute_or_default(item, "contentType"),
            created_on: modified_on(item, element)?,
        });
    }

    items.sort_by(|left, right| vendor_order(&left.id, &right.id));
    for (index, item) in items.iter_mut().enumerate() {
        item.order = position(index);
    }
    Ok(items)
}

fn modified_on(
    item: Node<'_, '_>,
    element: &str,
) -> Result<Option<chrono::NaiveDateTime>, StructuralParseError> {
    match attribute_or_default(item, "modTime") {
        None => Ok(None),
        Some(value) => Ok(
            parse_date_time(&value, &format!("<{element} modTime='..'/>"))?.into_option(),
        ),
    }
}

/// `m` (the main image) first, then shorter ids before longer ones: a..z, aa..ae, 1..10.
fn vendor_order(left: &str, right: &str) -> Ordering {
    let main = |id: &str| !id.eq_ignore_ascii_case("m");
    main(left)
        .cmp(&main(right))
        .then_with(|| left.len().cmp(&right.len()))
        .then_with(|| left.to_ascii_lowercase().cmp(&right.to_ascii_lowercase()))
}

fn read_documents(
    objects: Node<'_, '_>,
) -> Result<(Vec<Media>, Vec<InvalidDocumentWarning>), StructuralParseError> {
    let mut documents = Vec::new();
    let mut invalid_usages = Vec::new();
    let mut invalid_content_types = Vec::new();

    for document in children(objects, "document") {
        let usage = attribute_or_default(document, "usage");
        let content_type = attribute_or_default(document, "contentType");

        let usage_allowed = usage
            .as_deref()
            .is_some_and(|usage| is_allowed(DOCUMENT_USAGES, usage));
        let content_type_allowed = content_type
            .as_deref()
            .map_or(true, |content_type| is_allowed(DOCUMENT_CONTENT_TYPES, content_type));

        if !usage_allowed {
            push_distinct(
                &mut invalid_usages,
                usage.clone().unwrap_or_else(|| MISSING_USAGE.to_string()),
            );
        }
        if let (false, Some(content_type)) = (content_type_allowed, content_type.clone()) {
            push_distinct(&mut invalid_content_types, content_type);
        }
        if !usage_allowed || !content_type_allowed {
            continue;
        }

        let Some(url) = attribute_or_default(document, "url") else {
            continue;
        };
        documents.push(Media {
            id: attribute_or_default(document, "id").unwrap_or_default(),
            url,
            order: position(documents.len()),
            tag: usage,
            content_type,
            created_on: modified_on(document, "document")?,
        });
    }

    let warnings = [
        (DocumentField::Usage, invalid_usages),
        (DocumentField::ContentType, invalid_content_types),
    ]
    .into_iter()
    .filter(|(_, values)| !values.is_empty())
    .map(|(field, values)| InvalidDocumentWarning { field, values })
    .collect();

    Ok((documents, warnings))
}

fn is_allowed(allowed: &[&str], value: &str) -> bool {
    allowed
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(value))
}

fn push_distinct(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}
